use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::stats::{StockPolicy, StockStatus};

/// Attribute → value mapping that tags a single variant, e.g.
/// `{color: "Black", storage: "256GB"}`.
///
/// An empty combination marks the default (no-option) variant. Keys keep
/// the order they were declared in; equality and hashing ignore that order.
#[derive(Debug, Clone, Default)]
pub struct Combination(Vec<(String, String)>);

impl Combination {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `attribute` to `value`, returning the previous value if any.
    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let attribute = attribute.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == attribute) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((attribute, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == attribute)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attribute names in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if this combination agrees with every pick in
    /// `selection` except the one for `attribute`.
    ///
    /// A selected attribute this combination does not declare counts as a
    /// disagreement.
    #[must_use]
    pub fn agrees_with_except(&self, selection: &Selection, attribute: &str) -> bool {
        selection
            .iter()
            .filter(|(selected, _)| *selected != attribute)
            .all(|(selected, value)| self.get(selected) == Some(value))
    }

    /// Returns `true` if `selection` names exactly this combination's
    /// attributes, each with an equal value.
    #[must_use]
    pub fn matches_exactly(&self, selection: &Selection) -> bool {
        self.len() == selection.len()
            && self
                .iter()
                .all(|(attribute, value)| selection.get(attribute) == Some(value))
    }

    /// Human-readable form used on order lines and wishlist rows, e.g.
    /// `"color: Black, size: M"`. `None` for the default variant.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.iter()
                .map(|(attribute, value)| format!("{attribute}: {value}"))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

impl PartialEq for Combination {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(attribute, value)| other.get(attribute) == Some(value))
    }
}

impl Eq for Combination {}

impl Hash for Combination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort_unstable();
        pairs.hash(state);
    }
}

/// Later pairs override earlier ones for the same attribute.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Combination {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut combination = Self::new();
        for (attribute, value) in iter {
            combination.insert(attribute, value);
        }
        combination
    }
}

impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Combination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CombinationVisitor;

        impl<'de> Visitor<'de> for CombinationVisitor {
            type Value = Combination;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of attribute names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Combination, A::Error> {
                let mut combination = Combination::new();
                while let Some((attribute, value)) = access.next_entry::<String, String>()? {
                    combination.insert(attribute, value);
                }
                Ok(combination)
            }
        }

        deserializer.deserialize_map(CombinationVisitor)
    }
}

/// The user's in-progress choice of attribute values.
///
/// Picks are applied with union-with-override semantics; a key only goes
/// away through [`Selection::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pick, overwriting any earlier value for the same attribute.
    /// Returns the value it replaced.
    pub fn select(
        &mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(attribute.into(), value.into())
    }

    /// Builder form of [`Selection::select`].
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.select(attribute, value);
        self
    }

    /// Drops every pick (e.g. when the catalog changes).
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<Combination> for Selection {
    fn from(combination: Combination) -> Self {
        Self(combination.0.into_iter().collect())
    }
}

impl From<&Combination> for Selection {
    fn from(combination: &Combination) -> Self {
        combination.iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Where a variant's price came from during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// The record carried its own valid price.
    Variant,
    /// The record had no usable price and inherits the product's base price.
    Product,
}

/// A single purchasable variant of a product, after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Opaque identifier, unique within its product.
    pub id: String,
    pub combination: Combination,
    /// Price after normalization. When `price_source` is
    /// [`PriceSource::Product`] this is the base price seen at load time.
    pub price: Decimal,
    pub price_source: PriceSource,
    /// Units in stock. Zero means the variant cannot be selected or bought.
    pub quantity: u32,
}

impl Variant {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// The price to charge given the product's current base price.
    #[must_use]
    pub fn effective_price(&self, base_price: Decimal) -> Decimal {
        match self.price_source {
            PriceSource::Variant => self.price,
            PriceSource::Product => base_price,
        }
    }

    #[must_use]
    pub fn stock_status(&self, policy: &StockPolicy) -> StockStatus {
        policy.classify(self.quantity)
    }
}

/// Read-only snapshot of one product and its variants, as supplied by the
/// backend for a single product view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub product_id: String,
    /// The product's own price, used by variants without one and when the
    /// product has no variants at all.
    pub base_price: Decimal,
    /// The product's own stock, used only when it has no variants.
    pub base_quantity: u32,
    pub variants: Vec<Variant>,
}

impl Catalog {
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
