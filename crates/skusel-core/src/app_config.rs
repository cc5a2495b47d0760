use crate::stats::StockPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Upper bound (inclusive) of the low-stock bucket.
    pub low_stock_threshold: u32,
}

impl AppConfig {
    #[must_use]
    pub fn stock_policy(&self) -> StockPolicy {
        StockPolicy::new(self.low_stock_threshold)
    }
}
