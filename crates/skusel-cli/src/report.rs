//! JSON-ready reports built from a loaded catalog.

use serde::Serialize;
use skusel_core::{AggregateStats, Catalog, Headline, ResolvedView, Selection, StockPolicy};
use skusel_resolver::{
    attributes_of, default_selection, headline, option_values, resolve, summarize,
    AttributeValues,
};

#[derive(Debug, Serialize)]
pub(crate) struct SummaryReport {
    pub product_id: String,
    /// `null` when the product has no variants.
    pub aggregate: Option<AggregateStats>,
    pub headline: Headline,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResolutionReport {
    pub product_id: String,
    pub selection: Selection,
    #[serde(flatten)]
    pub view: ResolvedView,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttributesReport {
    pub product_id: String,
    pub attributes: Vec<String>,
    pub options: Vec<AttributeValues>,
}

pub(crate) fn summary(catalog: &Catalog, policy: &StockPolicy) -> SummaryReport {
    SummaryReport {
        product_id: catalog.product_id.clone(),
        aggregate: summarize(&catalog.variants, catalog.base_price, policy),
        headline: headline(catalog, policy),
    }
}

/// Applies `picks` in order on top of an empty (or default) selection.
pub(crate) fn resolution(
    catalog: &Catalog,
    picks: &[(String, String)],
    start_from_default: bool,
    policy: &StockPolicy,
) -> ResolutionReport {
    let mut selection = if start_from_default {
        default_selection(&catalog.variants)
    } else {
        Selection::new()
    };
    for (attribute, value) in picks {
        selection.select(attribute.as_str(), value.as_str());
    }

    let view = resolve(catalog, &selection, policy);
    ResolutionReport {
        product_id: catalog.product_id.clone(),
        selection,
        view,
    }
}

pub(crate) fn attributes(catalog: &Catalog) -> AttributesReport {
    AttributesReport {
        product_id: catalog.product_id.clone(),
        attributes: attributes_of(&catalog.variants),
        options: option_values(&catalog.variants),
    }
}
