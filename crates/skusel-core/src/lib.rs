//! Domain types and configuration for product variant selection.
//!
//! Everything here is a plain value: catalogs and selections are supplied by
//! the caller, and the resolver crate computes fresh views from them.

mod app_config;
mod catalog;
mod config;
mod stats;
mod view;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{Catalog, Combination, PriceSource, Selection, Variant};
pub use config::{build_app_config, load_app_config, load_app_config_from_env};
pub use stats::{AggregateStats, Headline, StockPolicy, StockStatus, DEFAULT_LOW_STOCK_THRESHOLD};
pub use view::{AttributeOptions, OptionState, ResolvedView};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
