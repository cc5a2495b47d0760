//! Field coercion primitives shared by the catalog normalizer and the saved
//! selection decoder.
//!
//! Every function is total: anything it cannot interpret comes back as
//! `None` (or an error value the caller logs and discards), never a panic.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use skusel_core::Combination;

use crate::error::CombinationError;

/// Result of decoding a combination field.
#[derive(Debug, Default)]
pub(crate) struct DecodedCombination {
    pub combination: Combination,
    /// Entries skipped because their key was empty or their value was not a
    /// scalar.
    pub dropped: usize,
}

/// Coerces an identifier to a string. Numbers keep their JSON spelling;
/// blank strings count as missing.
pub(crate) fn coerce_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerces a non-negative decimal price from a number or numeric string.
pub(crate) fn coerce_price(value: Option<&Value>) -> Option<Decimal> {
    let price = coerce_decimal(value?)?;
    if price < Decimal::ZERO {
        return None;
    }
    Some(price)
}

/// Coerces a non-negative whole quantity from a number or numeric string.
///
/// `"3"`, `3` and `3.0` are accepted; `3.5`, `-1` and out-of-range values are
/// not.
pub(crate) fn coerce_quantity(value: Option<&Value>) -> Option<u32> {
    let quantity = coerce_decimal(value?)?;
    if !quantity.fract().is_zero() {
        return None;
    }
    quantity.to_u32()
}

fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

/// Parses plain (`"12.99"`) and scientific (`"1.5e3"`) decimal spellings.
pub(crate) fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Decodes a combination that may be an object or its JSON-encoded string.
///
/// `null`, a blank string and an empty list (`[]`, how an empty map is
/// sometimes encoded upstream) all decode to the empty combination.
pub(crate) fn decode_combination(value: &Value) -> Result<DecodedCombination, CombinationError> {
    match value {
        Value::Null => Ok(DecodedCombination::default()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(DecodedCombination::default());
            }
            let parsed: Value =
                serde_json::from_str(trimmed).map_err(CombinationError::InvalidJson)?;
            decode_structured(&parsed)
        }
        other => decode_structured(other),
    }
}

fn decode_structured(value: &Value) -> Result<DecodedCombination, CombinationError> {
    let map = match value {
        Value::Object(map) => map,
        Value::Array(items) if items.is_empty() => return Ok(DecodedCombination::default()),
        Value::Null => return Ok(DecodedCombination::default()),
        other => return Err(CombinationError::NotAnObject(json_kind(other))),
    };

    let mut decoded = DecodedCombination::default();
    for (attribute, raw_value) in map {
        let value = match raw_value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => {
                decoded.dropped += 1;
                continue;
            }
        };
        if attribute.trim().is_empty() {
            decoded.dropped += 1;
            continue;
        }
        decoded.combination.insert(attribute.clone(), value);
    }
    Ok(decoded)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "coerce_test.rs"]
mod tests;
