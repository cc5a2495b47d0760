//! Aggregate figures over a product's whole variant set.

use rust_decimal::Decimal;
use skusel_core::{AggregateStats, Catalog, Headline, StockPolicy, StockStatus, Variant};

/// Summarizes price range, total stock and stock buckets.
///
/// Returns `None` for an empty variant list; callers then show the product's
/// own price and quantity (see [`headline`]). Variants without their own
/// price are priced at `base_price`.
#[must_use]
pub fn summarize(
    variants: &[Variant],
    base_price: Decimal,
    policy: &StockPolicy,
) -> Option<AggregateStats> {
    let first_price = variants.first()?.effective_price(base_price);

    let mut stats = AggregateStats {
        variant_count: variants.len(),
        in_stock_count: 0,
        low_stock_count: 0,
        out_of_stock_count: 0,
        total_stock: 0,
        min_price: first_price,
        max_price: first_price,
        has_price_range: false,
    };

    for variant in variants {
        match variant.stock_status(policy) {
            StockStatus::OutOfStock => stats.out_of_stock_count += 1,
            StockStatus::LowStock => stats.low_stock_count += 1,
            StockStatus::InStock => stats.in_stock_count += 1,
        }
        stats.total_stock = stats
            .total_stock
            .saturating_add(u64::from(variant.quantity));

        let price = variant.effective_price(base_price);
        stats.min_price = stats.min_price.min(price);
        stats.max_price = stats.max_price.max(price);
    }

    stats.has_price_range = stats.min_price != stats.max_price;
    Some(stats)
}

/// Price and stock figures for the product header or card.
///
/// Uses the variant aggregate when there are variants, otherwise the
/// product's own base price and quantity.
#[must_use]
pub fn headline(catalog: &Catalog, policy: &StockPolicy) -> Headline {
    match summarize(&catalog.variants, catalog.base_price, policy) {
        Some(stats) => {
            let stock_status = if stats.in_stock_count > 0 {
                StockStatus::InStock
            } else if stats.low_stock_count > 0 {
                StockStatus::LowStock
            } else {
                StockStatus::OutOfStock
            };
            Headline {
                min_price: stats.min_price,
                max_price: stats.max_price,
                has_price_range: stats.has_price_range,
                total_stock: stats.total_stock,
                stock_status,
                from_variants: true,
            }
        }
        None => Headline {
            min_price: catalog.base_price,
            max_price: catalog.base_price,
            has_price_range: false,
            total_stock: u64::from(catalog.base_quantity),
            stock_status: policy.classify(catalog.base_quantity),
            from_variants: false,
        },
    }
}
