mod coerce;
pub mod error;
pub mod load;
pub mod normalize;
pub mod resolve;
pub mod saved;
pub mod summarize;
pub mod types;

pub use error::CatalogError;
pub use load::{load_catalog, parse_catalog_json, parse_catalog_yaml};
pub use normalize::{normalize_catalog, normalize_variants};
pub use resolve::{
    attributes_of, can_update, default_selection, duplicate_combinations, match_variant,
    option_values, reachable_values, resolve, AttributeValues,
};
pub use saved::{
    decode_saved_variant, line_price, line_stock, line_total, step_quantity, QuantityStep,
    SavedVariant,
};
pub use summarize::{headline, summarize};
pub use types::{RawCatalog, RawVariant};
