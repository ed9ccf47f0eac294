//! Question table access.
//!
//! [`QuestionStore`] is the seam the seeding loop writes through.
//! [`DynamoStore`] talks to DynamoDB; [`DryRunStore`] only logs.

use std::collections::HashMap;
use std::future::Future;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use clario_core::item::{Item, ItemValue};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for table operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The service answered and refused (missing table, throttling, bad item).
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// Anything else: credentials, network, timeouts, response parsing.
    #[error("{0}")]
    Unexpected(String),
}

impl StoreError {
    fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        match err.as_service_error() {
            Some(service) => StoreError::Service {
                code: service.code().unwrap_or("Unknown").to_string(),
                message: service.message().unwrap_or("no message").to_string(),
            },
            None => StoreError::Unexpected(DisplayErrorContext(&err).to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// What the pre-flight check learns about the target table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
    pub status: String,
    pub item_count: Option<i64>,
}

/// A key-value table that accepts question items.
pub trait QuestionStore: Send + Sync {
    /// Confirm the table exists and is reachable.
    fn describe(&self) -> impl Future<Output = Result<TableInfo, StoreError>> + Send;

    /// Write one item, replacing any item with the same partition key.
    fn put_item(&self, item: Item) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// `true` when accepted items are not actually persisted.
    fn is_dry_run(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// DynamoStore
// ---------------------------------------------------------------------------

/// DynamoDB-backed question table.
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Build a client from the default AWS credential chain for `region`.
    pub async fn connect(table: impl Into<String>, region: impl Into<String>) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .load()
            .await;
        Self::new(Client::new(&config), table)
    }
}

impl QuestionStore for DynamoStore {
    async fn describe(&self) -> Result<TableInfo, StoreError> {
        let output = self
            .client
            .describe_table()
            .table_name(&self.table)
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        let table = output.table();
        Ok(TableInfo {
            name: self.table.clone(),
            status: table
                .and_then(|t| t.table_status())
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            item_count: table.and_then(|t| t.item_count()),
        })
    }

    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(to_attribute_map(item)))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(())
    }
}

/// Convert a top-level item into DynamoDB attributes.
pub fn to_attribute_map(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(k, v)| (k, to_attribute_value(v)))
        .collect()
}

/// Convert one value. Numbers go over the wire as their exact decimal text.
pub fn to_attribute_value(value: ItemValue) -> AttributeValue {
    match value {
        ItemValue::Null => AttributeValue::Null(true),
        ItemValue::Bool(b) => AttributeValue::Bool(b),
        ItemValue::Number(d) => AttributeValue::N(d.to_string()),
        ItemValue::Text(s) => AttributeValue::S(s),
        ItemValue::List(values) => {
            AttributeValue::L(values.into_iter().map(to_attribute_value).collect())
        }
        ItemValue::Map(map) => AttributeValue::M(to_attribute_map(map)),
    }
}

// ---------------------------------------------------------------------------
// DryRunStore
// ---------------------------------------------------------------------------

/// Accepts every item and writes nothing.
pub struct DryRunStore {
    table: String,
}

impl DryRunStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl QuestionStore for DryRunStore {
    async fn describe(&self) -> Result<TableInfo, StoreError> {
        Ok(TableInfo {
            name: self.table.clone(),
            status: "DRY_RUN".to_string(),
            item_count: None,
        })
    }

    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        tracing::debug!(
            table = %self.table,
            attributes = item.len(),
            "Dry run: skipping write",
        );
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
