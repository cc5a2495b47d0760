//! Constraint resolution over a product's variants.
//!
//! All functions are pure and total. "Nothing valid" is always expressed as
//! an empty list or `None`, never as an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use skusel_core::{
    AttributeOptions, Catalog, Combination, OptionState, ResolvedView, Selection, StockPolicy,
    Variant,
};

use crate::summarize::summarize;

/// Every value one attribute takes anywhere in the catalog, regardless of
/// stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValues {
    pub attribute: String,
    pub values: Vec<String>,
}

/// Union of all combination keys, in first-seen order.
#[must_use]
pub fn attributes_of(variants: &[Variant]) -> Vec<String> {
    let mut attributes: Vec<String> = Vec::new();
    for variant in variants {
        for attribute in variant.combination.attributes() {
            if !attributes.iter().any(|a| a == attribute) {
                attributes.push(attribute.to_string());
            }
        }
    }
    attributes
}

/// Every attribute with every value that appears for it, in first-seen
/// order. Used to render the full set of option buttons.
#[must_use]
pub fn option_values(variants: &[Variant]) -> Vec<AttributeValues> {
    attributes_of(variants)
        .into_iter()
        .map(|attribute| {
            let mut values: Vec<String> = Vec::new();
            for value in variants
                .iter()
                .filter_map(|v| v.combination.get(&attribute))
            {
                if !values.iter().any(|known| known == value) {
                    values.push(value.to_string());
                }
            }
            AttributeValues { attribute, values }
        })
        .collect()
}

/// Values of `attribute` that lead to an in-stock variant given the picks for
/// every *other* attribute.
///
/// The current pick for `attribute` itself is ignored, so the user can always
/// switch an earlier choice. Values are deduplicated in first-seen order.
#[must_use]
pub fn reachable_values(variants: &[Variant], attribute: &str, selection: &Selection) -> Vec<String> {
    let mut reachable: Vec<String> = Vec::new();
    for variant in variants
        .iter()
        .filter(|v| v.is_available() && v.combination.agrees_with_except(selection, attribute))
    {
        if let Some(value) = variant.combination.get(attribute) {
            if !reachable.iter().any(|known| known == value) {
                reachable.push(value.to_string());
            }
        }
    }
    reachable
}

/// The variant whose combination is exactly `selection`: same key set, equal
/// values.
///
/// A selection short of a variant's attributes, or naming an attribute the
/// variant lacks, matches nothing. With duplicate combinations the first in
/// catalog order wins. The default (empty-combination) variant matches only
/// the empty selection.
#[must_use]
pub fn match_variant<'a>(variants: &'a [Variant], selection: &Selection) -> Option<&'a Variant> {
    variants
        .iter()
        .find(|v| v.combination.matches_exactly(selection))
}

/// `true` iff `selection` matches a variant that has stock.
#[must_use]
pub fn can_update(variants: &[Variant], selection: &Selection) -> bool {
    match_variant(variants, selection).is_some_and(Variant::is_available)
}

/// The selection a product view starts with: the first in-stock variant's
/// combination, else the first variant's, else nothing.
#[must_use]
pub fn default_selection(variants: &[Variant]) -> Selection {
    variants
        .iter()
        .find(|v| v.is_available())
        .or_else(|| variants.first())
        .map(|v| Selection::from(&v.combination))
        .unwrap_or_default()
}

/// Pairs of `(first id, duplicate id)` for variants sharing a combination.
#[must_use]
pub fn duplicate_combinations(variants: &[Variant]) -> Vec<(String, String)> {
    let mut first_seen: HashMap<&Combination, &str> = HashMap::new();
    let mut duplicates = Vec::new();
    for variant in variants {
        match first_seen.get(&variant.combination) {
            Some(first) => duplicates.push(((*first).to_string(), variant.id.clone())),
            None => {
                first_seen.insert(&variant.combination, &variant.id);
            }
        }
    }
    duplicates
}

/// Recomputes everything the product view shows for `selection`.
#[must_use]
pub fn resolve(catalog: &Catalog, selection: &Selection, policy: &StockPolicy) -> ResolvedView {
    let variants = catalog.variants.as_slice();

    let options = option_values(variants)
        .into_iter()
        .map(|AttributeValues { attribute, values }| {
            let reachable = reachable_values(variants, &attribute, selection);
            let picked = selection.get(&attribute);
            let values = values
                .into_iter()
                .map(|value| OptionState {
                    reachable: reachable.contains(&value),
                    selected: picked == Some(value.as_str()),
                    value,
                })
                .collect();
            AttributeOptions { attribute, values }
        })
        .collect();

    let matched_variant = match_variant(variants, selection).cloned();
    let can_update = matched_variant.as_ref().is_some_and(Variant::is_available);

    tracing::debug!(
        product_id = %catalog.product_id,
        picks = selection.len(),
        matched = ?matched_variant.as_ref().map(|v| v.id.as_str()),
        can_update,
        "resolved selection"
    );

    ResolvedView {
        options,
        matched_variant,
        can_update,
        aggregate: summarize(variants, catalog.base_price, policy),
    }
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
