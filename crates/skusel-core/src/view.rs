use serde::{Deserialize, Serialize};

use crate::catalog::Variant;
use crate::stats::AggregateStats;

/// One selectable value of an attribute, as the option buttons render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionState {
    pub value: String,
    /// `false` renders the button disabled.
    pub reachable: bool,
    pub selected: bool,
}

/// Every known value of one attribute, in first-seen catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOptions {
    pub attribute: String,
    pub values: Vec<OptionState>,
}

impl AttributeOptions {
    pub fn reachable_values(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|o| o.reachable)
            .map(|o| o.value.as_str())
    }
}

/// Everything the product view needs after a selection change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedView {
    pub options: Vec<AttributeOptions>,
    /// `None` means the selection is incomplete or names no variant; purchase
    /// actions must stay disabled.
    pub matched_variant: Option<Variant>,
    /// Gate for the single "confirm selection" action.
    pub can_update: bool,
    /// `None` for a product without variants.
    pub aggregate: Option<AggregateStats>,
}

impl ResolvedView {
    /// Reachable values for `attribute`, or an empty list if the attribute is
    /// unknown.
    #[must_use]
    pub fn reachable_values(&self, attribute: &str) -> Vec<&str> {
        self.options
            .iter()
            .find(|o| o.attribute == attribute)
            .map(|o| o.reachable_values().collect())
            .unwrap_or_default()
    }
}
