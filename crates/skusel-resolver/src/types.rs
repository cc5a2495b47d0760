//! Raw catalog shapes as the backend hands them over.
//!
//! ## Observed field shapes
//!
//! ### `combination` / `variant_combination`
//! Stored in a JSON column, so it arrives either already decoded (an object)
//! or as the encoded string, e.g. `"{\"color\":\"Black\"}"`. An empty
//! combination is sometimes encoded as `"[]"` (an empty list) rather than
//! `"{}"`. Older rows only carry `variant_combination`; newer payloads use
//! `combination`. When both are present the canonical `combination` wins.
//!
//! ### `price`
//! A decimal column serialized as a string (`"12.99"`) or a number. May be
//! `null` or absent, in which case the variant inherits the product price.
//!
//! ### `quantity`
//! Integer column; may arrive as a number or a numeric string.
//!
//! Every field is modelled as an optional `serde_json::Value` so a single bad
//! field never fails deserialization of the whole catalog; coercion happens
//! in [`crate::normalize`]. The variant list itself is kept as raw values for
//! the same reason: a `null` or scalar entry is skipped there, not here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One variant record before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVariant {
    /// Opaque identifier (string or number).
    #[serde(default)]
    pub id: Option<Value>,

    /// Legacy name for `id`; consulted only when `id` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<Value>,

    /// Canonical combination field: an object or its JSON-encoded string.
    #[serde(default)]
    pub combination: Option<Value>,

    /// Legacy combination field; consulted only when `combination` is absent
    /// or `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_combination: Option<Value>,

    /// Decimal price as a number or string.
    #[serde(default)]
    pub price: Option<Value>,

    /// Units in stock as a number or string.
    #[serde(default)]
    pub quantity: Option<Value>,
}

/// A product snapshot: base fields plus its raw variant records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub product_id: Option<Value>,

    /// The product's own price; `product_price` in older payloads.
    #[serde(default, alias = "product_price")]
    pub base_price: Option<Value>,

    /// The product's own stock; `product_quantity` in older payloads.
    #[serde(default, alias = "product_quantity")]
    pub base_quantity: Option<Value>,

    /// `product_variant` in older payloads. `null` is treated as no variants.
    /// Entries are decoded into [`RawVariant`] during normalization.
    #[serde(default, alias = "product_variant")]
    pub variants: Option<Vec<Value>>,
}
