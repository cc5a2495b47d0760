use thiserror::Error;

/// Failure to read a catalog snapshot file.
///
/// Only whole-file problems surface here. Malformed fields inside an
/// otherwise readable snapshot are defaulted during normalization.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON catalog {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML catalog {context}: {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Why a combination field could not be decoded.
///
/// Never escapes the crate as a failure: the normalizer logs it and falls
/// back to an empty combination.
#[derive(Debug, Error)]
pub(crate) enum CombinationError {
    #[error("combination string is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("combination is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}
