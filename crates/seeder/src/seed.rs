//! The seeding loop.

use clario_core::error::CoreError;
use clario_core::item::to_item;
use clario_core::question::Question;

use crate::store::{QuestionStore, StoreError, TableInfo};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Why a single record was not written.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Conversion(#[from] CoreError),
}

#[derive(Debug)]
pub struct SeedFailure {
    pub question_id: String,
    pub error: SeedError,
}

/// Outcome of one seeding run.
///
/// On a dry run `inserted` counts records that would have been written.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub total: usize,
    pub inserted: usize,
    pub failures: Vec<SeedFailure>,
    pub dry_run: bool,
}

impl SeedReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Every record was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.inserted == self.total
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Check the table, then seed it.
///
/// Only the pre-flight check is fatal; per-record failures end up in the
/// returned report.
pub async fn run_seed<S: QuestionStore>(
    store: &S,
    questions: &[Question],
) -> Result<SeedReport, StoreError> {
    let TableInfo {
        name,
        status,
        item_count,
    } = store.describe().await?;
    tracing::info!(table = %name, %status, ?item_count, "Table is accessible");

    Ok(seed_questions(store, questions).await)
}

/// Write every question, one at a time, in order.
///
/// A failing record is logged and counted and never stops the batch.
pub async fn seed_questions<S: QuestionStore>(store: &S, questions: &[Question]) -> SeedReport {
    let mut report = SeedReport {
        total: questions.len(),
        dry_run: store.is_dry_run(),
        ..SeedReport::default()
    };

    for question in questions {
        match write_question(store, question).await {
            Ok(()) => {
                report.inserted += 1;
                if report.dry_run {
                    tracing::info!(
                        question_id = %question.question_id,
                        question_number = question.question_number,
                        "Dry run: would insert question",
                    );
                } else {
                    tracing::info!(
                        question_id = %question.question_id,
                        question_number = question.question_number,
                        "Inserted question",
                    );
                }
            }
            Err(error) => {
                match &error {
                    SeedError::Store(StoreError::Service { code, message }) => {
                        tracing::warn!(
                            question_id = %question.question_id,
                            %code,
                            %message,
                            "Store rejected question",
                        );
                    }
                    other => {
                        tracing::error!(
                            question_id = %question.question_id,
                            error = %other,
                            "Unexpected error inserting question",
                        );
                    }
                }
                report.failures.push(SeedFailure {
                    question_id: question.question_id.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        failed = report.failed(),
        total = report.total,
        dry_run = report.dry_run,
        "Seeding finished",
    );
    report
}

async fn write_question<S: QuestionStore>(store: &S, question: &Question) -> Result<(), SeedError> {
    let item = to_item(question)?;
    store.put_item(item).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
