//! Store-ready record trees.
//!
//! The question table has no native floating-point type: every number must
//! be written as an exact decimal. [`ItemValue::from_json`] walks a JSON tree
//! and converts every number it finds, at any depth. Floats go through the
//! shortest decimal string that round-trips to the same `f64`, so `0.1`
//! becomes exactly `0.1` rather than its binary expansion. A float that needs
//! more fractional digits than [`Decimal`] can hold is a conversion error.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::CoreError;

/// Top-level record: attribute name to value.
pub type Item = BTreeMap<String, ItemValue>;

/// One attribute value, numbers held as exact decimals.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    Null,
    Bool(bool),
    Number(Decimal),
    Text(String),
    List(Vec<ItemValue>),
    Map(Item),
}

impl ItemValue {
    /// Recursively convert a JSON value, turning every number into a decimal.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        Ok(match value {
            Value::Null => ItemValue::Null,
            Value::Bool(b) => ItemValue::Bool(*b),
            Value::Number(n) => ItemValue::Number(number_to_decimal(n)?),
            Value::String(s) => ItemValue::Text(s.clone()),
            Value::Array(values) => ItemValue::List(
                values
                    .iter()
                    .map(ItemValue::from_json)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => ItemValue::Map(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), ItemValue::from_json(v)?)))
                    .collect::<Result<_, CoreError>>()?,
            ),
        })
    }

    /// Convert back to JSON. Whole decimals become integers.
    pub fn to_json(&self) -> Result<Value, CoreError> {
        Ok(match self {
            ItemValue::Null => Value::Null,
            ItemValue::Bool(b) => Value::Bool(*b),
            ItemValue::Number(d) => Value::Number(decimal_to_number(d)?),
            ItemValue::Text(s) => Value::String(s.clone()),
            ItemValue::List(values) => Value::Array(
                values
                    .iter()
                    .map(ItemValue::to_json)
                    .collect::<Result<_, _>>()?,
            ),
            ItemValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
                    .collect::<Result<_, CoreError>>()?,
            ),
        })
    }
}

/// Serialize a record and convert it into a top-level [`Item`].
///
/// The record must serialize to a JSON object.
pub fn to_item<T: Serialize>(record: &T) -> Result<Item, CoreError> {
    let value = serde_json::to_value(record)
        .map_err(|e| CoreError::Internal(format!("Failed to serialize record: {e}")))?;

    match ItemValue::from_json(&value)? {
        ItemValue::Map(item) => Ok(item),
        _ => Err(CoreError::Validation(
            "Record must serialize to an object".to_string(),
        )),
    }
}

fn number_to_decimal(n: &Number) -> Result<Decimal, CoreError> {
    if let Some(i) = n.as_i64() {
        return Ok(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Decimal::from(u));
    }

    let f = n
        .as_f64()
        .ok_or_else(|| CoreError::Conversion(format!("Unsupported number {n}")))?;

    // `f64` displays its shortest round-trip form, never in exponent notation.
    let decimal = Decimal::from_str(&f.to_string())
        .map_err(|e| CoreError::Conversion(format!("{f} has no exact decimal form: {e}")))?;

    // Parsing rounds digits past the 28-place scale instead of failing.
    if decimal.to_string().parse::<f64>() != Ok(f) {
        return Err(CoreError::Conversion(format!(
            "{f} has no exact decimal form: rounds to {decimal}"
        )));
    }
    Ok(decimal)
}

fn decimal_to_number(d: &Decimal) -> Result<Number, CoreError> {
    if d.fract().is_zero() {
        if let Some(i) = d.to_i64() {
            return Ok(Number::from(i));
        }
    }

    d.to_string()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| CoreError::Conversion(format!("{d} does not fit in a JSON number")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
