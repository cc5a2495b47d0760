use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default upper bound (inclusive) of the low-stock bucket.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Thresholds used to bucket stock levels for badges and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPolicy {
    /// Quantities in `1..=low_stock_threshold` count as low stock.
    pub low_stock_threshold: u32,
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StockPolicy {
    #[must_use]
    pub fn new(low_stock_threshold: u32) -> Self {
        Self {
            low_stock_threshold,
        }
    }

    /// Buckets a quantity. Every quantity falls into exactly one bucket.
    #[must_use]
    pub fn classify(&self, quantity: u32) -> StockStatus {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Badge text shown next to a variant or product.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Figures computed over a product's whole variant set.
///
/// `in_stock_count + low_stock_count + out_of_stock_count == variant_count`
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub variant_count: usize,
    /// Variants above the low-stock threshold.
    pub in_stock_count: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub total_stock: u64,
    pub min_price: Decimal,
    pub max_price: Decimal,
    /// `true` when `min_price != max_price`.
    pub has_price_range: bool,
}

/// The price and stock figures a product card or detail header shows.
///
/// Built from the variant aggregate when the product has variants, otherwise
/// from the product's own price and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub has_price_range: bool,
    pub total_stock: u64,
    pub stock_status: StockStatus,
    pub from_variants: bool,
}
