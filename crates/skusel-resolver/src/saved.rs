//! Saved variant snapshots on wishlist and cart lines.
//!
//! When a shopper saves a product, the chosen variant is stored alongside the
//! line as a snapshot (`variant_id`, `variant_key`, combination, price,
//! quantity), either as a JSON object or as its encoded string. Lines are
//! priced and stock-capped from that snapshot, falling back to the product's
//! own fields when the snapshot lacks them or cannot be read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skusel_core::Combination;

use crate::coerce::{coerce_id, coerce_price, coerce_quantity, decode_combination};

#[derive(Debug, Deserialize)]
struct RawSavedVariant {
    #[serde(default)]
    variant_id: Option<Value>,
    #[serde(default)]
    variant_key: Option<Value>,
    #[serde(default)]
    combination: Option<Value>,
    #[serde(default)]
    variant_combination: Option<Value>,
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    quantity: Option<Value>,
}

/// A decoded saved-variant snapshot. Absent or invalid fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedVariant {
    pub variant_id: Option<String>,
    /// Display key stored with the snapshot, e.g. `"Black-256GB"`.
    pub variant_key: Option<String>,
    pub combination: Combination,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

impl SavedVariant {
    /// `"color: Black, size: M"`, or `None` for a default variant.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        self.combination.describe()
    }
}

/// Direction of a quantity stepper click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityStep {
    Increase,
    Decrease,
}

/// Decodes a saved snapshot from an object or its JSON-encoded string.
///
/// Returns `None` for `null`, undecodable strings and non-objects; the line
/// is then treated as having no variant.
#[must_use]
pub fn decode_saved_variant(value: &Value) -> Option<SavedVariant> {
    let structured = match value {
        Value::Null => return None,
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable saved variant snapshot");
                return None;
            }
        },
        other => other.clone(),
    };

    if !structured.is_object() {
        tracing::warn!("saved variant snapshot is not an object");
        return None;
    }

    let raw: RawSavedVariant = match serde_json::from_value(structured) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "malformed saved variant snapshot");
            return None;
        }
    };

    let combination_field = match (&raw.combination, &raw.variant_combination) {
        (Some(value), _) if !value.is_null() => Some(value),
        (_, legacy) => legacy.as_ref(),
    };
    let combination = combination_field
        .and_then(|field| decode_combination(field).ok())
        .map(|decoded| decoded.combination)
        .unwrap_or_default();

    Some(SavedVariant {
        variant_id: coerce_id(raw.variant_id.as_ref()),
        variant_key: coerce_id(raw.variant_key.as_ref()),
        combination,
        price: coerce_price(raw.price.as_ref()),
        quantity: coerce_quantity(raw.quantity.as_ref()),
    })
}

/// Unit price for a saved line: the snapshot's price, else the product's.
#[must_use]
pub fn line_price(saved: Option<&SavedVariant>, product_price: Decimal) -> Decimal {
    saved.and_then(|s| s.price).unwrap_or(product_price)
}

/// Stock available to a saved line: the snapshot's quantity, else the
/// product's.
#[must_use]
pub fn line_stock(saved: Option<&SavedVariant>, product_quantity: u32) -> u32 {
    saved.and_then(|s| s.quantity).unwrap_or(product_quantity)
}

/// Unit price times the selected quantity.
#[must_use]
pub fn line_total(
    saved: Option<&SavedVariant>,
    product_price: Decimal,
    selected_quantity: u32,
) -> Decimal {
    line_price(saved, product_price) * Decimal::from(selected_quantity)
}

/// Applies a stepper click, keeping the quantity within `1..=available`.
///
/// The floor is 1 even when nothing is available; purchase gating is the
/// caller's job.
#[must_use]
pub fn step_quantity(current: u32, step: QuantityStep, available: u32) -> u32 {
    let ceiling = available.max(1);
    let next = match step {
        QuantityStep::Increase => current.saturating_add(1),
        QuantityStep::Decrease => current.saturating_sub(1),
    };
    next.clamp(1, ceiling)
}

#[cfg(test)]
#[path = "saved_test.rs"]
mod tests;
