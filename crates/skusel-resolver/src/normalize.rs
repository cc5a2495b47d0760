//! Normalization from raw backend records to [`skusel_core::Variant`] and
//! [`skusel_core::Catalog`].
//!
//! Field coercion is delegated to [`crate::coerce`]; this module decides the
//! fallbacks and logs every value it had to replace.

use rust_decimal::Decimal;
use serde_json::Value;
use skusel_core::{Catalog, Combination, PriceSource, Variant};

use crate::coerce::{coerce_id, coerce_price, coerce_quantity, decode_combination};
use crate::resolve::duplicate_combinations;
use crate::types::{RawCatalog, RawVariant};

/// Normalizes raw variant records, preserving their order.
///
/// Never fails: a record with an undecodable combination becomes a default
/// (no-option) variant, a missing or invalid price falls back to
/// `base_price`, and a missing or invalid quantity becomes zero.
#[must_use]
pub fn normalize_variants(raw: Vec<RawVariant>, base_price: Decimal) -> Vec<Variant> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, record)| normalize_variant(record, idx + 1, base_price))
        .collect()
}

/// Normalizes a whole product snapshot.
///
/// A missing or invalid base price becomes zero and a missing base quantity
/// becomes zero; both are logged. Variant entries that are not objects are
/// skipped with a warning. Duplicate combinations are logged as a
/// data-quality warning but kept, since matching resolves them to the first
/// occurrence.
#[must_use]
pub fn normalize_catalog(raw: RawCatalog) -> Catalog {
    let product_id = coerce_id(raw.product_id.as_ref()).unwrap_or_default();

    let base_price = coerce_price(raw.base_price.as_ref()).unwrap_or_else(|| {
        tracing::warn!(
            product_id = %product_id,
            raw = ?raw.base_price,
            "product has no usable base price, defaulting to 0"
        );
        Decimal::ZERO
    });

    let base_quantity = match raw.base_quantity.as_ref() {
        None | Some(Value::Null) => 0,
        Some(value) => coerce_quantity(Some(value)).unwrap_or_else(|| {
            tracing::warn!(
                product_id = %product_id,
                raw = %value,
                "invalid base quantity, defaulting to 0"
            );
            0
        }),
    };

    let variants: Vec<Variant> = raw
        .variants
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let position = idx + 1;
            decode_record(record, position, &product_id)
                .map(|raw| normalize_variant(raw, position, base_price))
        })
        .collect();

    for (first, duplicate) in duplicate_combinations(&variants) {
        tracing::warn!(
            product_id = %product_id,
            first_variant = %first,
            duplicate_variant = %duplicate,
            "duplicate variant combination; matching will use the first"
        );
    }

    tracing::debug!(
        product_id = %product_id,
        variant_count = variants.len(),
        "normalized catalog"
    );

    Catalog {
        product_id,
        base_price,
        base_quantity,
        variants,
    }
}

fn normalize_variant(raw: RawVariant, position: usize, base_price: Decimal) -> Variant {
    let id = coerce_id(raw.id.as_ref())
        .or_else(|| coerce_id(raw.variant_id.as_ref()))
        .unwrap_or_else(|| {
            tracing::warn!(position, "variant has no usable id, using its position");
            position.to_string()
        });

    let combination = normalize_combination(&raw, &id);

    let (price, price_source) = match raw.price.as_ref() {
        None | Some(Value::Null) => (base_price, PriceSource::Product),
        Some(value) => match coerce_price(Some(value)) {
            Some(price) => (price, PriceSource::Variant),
            None => {
                tracing::warn!(
                    variant_id = %id,
                    raw = %value,
                    "invalid variant price, inheriting base price"
                );
                (base_price, PriceSource::Product)
            }
        },
    };

    let quantity = match raw.quantity.as_ref() {
        None | Some(Value::Null) => 0,
        Some(value) => coerce_quantity(Some(value)).unwrap_or_else(|| {
            tracing::warn!(
                variant_id = %id,
                raw = %value,
                "invalid variant quantity, defaulting to 0"
            );
            0
        }),
    };

    Variant {
        id,
        combination,
        price,
        price_source,
        quantity,
    }
}

/// Decodes one entry of the variant list. Anything but an object is skipped.
fn decode_record(record: Value, position: usize, product_id: &str) -> Option<RawVariant> {
    if !record.is_object() {
        tracing::warn!(
            product_id,
            position,
            raw = %record,
            "variant record is not an object, skipping"
        );
        return None;
    }
    match serde_json::from_value(record) {
        Ok(raw) => Some(raw),
        Err(e) => {
            tracing::warn!(
                product_id,
                position,
                error = %e,
                "unreadable variant record, skipping"
            );
            None
        }
    }
}

/// Picks the canonical combination field (legacy field as fallback) and
/// decodes it, degrading to an empty combination on failure.
fn normalize_combination(raw: &RawVariant, variant_id: &str) -> Combination {
    let field = match (&raw.combination, &raw.variant_combination) {
        (Some(value), _) if !value.is_null() => value,
        (_, Some(value)) => value,
        _ => return Combination::new(),
    };

    match decode_combination(field) {
        Ok(decoded) => {
            if decoded.dropped > 0 {
                tracing::warn!(
                    variant_id,
                    dropped = decoded.dropped,
                    "ignored non-scalar combination entries"
                );
            }
            decoded.combination
        }
        Err(e) => {
            tracing::warn!(
                variant_id,
                error = %e,
                "malformed combination, treating variant as default"
            );
            Combination::new()
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
