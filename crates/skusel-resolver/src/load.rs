use std::path::Path;

use skusel_core::Catalog;

use crate::error::CatalogError;
use crate::normalize::normalize_catalog;
use crate::types::RawCatalog;

/// Parses a JSON catalog snapshot without normalizing it.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] if the text is not valid JSON or its
/// top-level shape is not a catalog object.
pub fn parse_catalog_json(text: &str) -> Result<RawCatalog, CatalogError> {
    serde_json::from_str(text).map_err(|source| CatalogError::Json {
        context: "snapshot".to_string(),
        source,
    })
}

/// Parses a YAML catalog snapshot without normalizing it.
///
/// # Errors
///
/// Returns [`CatalogError::Yaml`] if the text is not valid YAML or its
/// top-level shape is not a catalog object.
pub fn parse_catalog_yaml(text: &str) -> Result<RawCatalog, CatalogError> {
    serde_yaml::from_str(text).map_err(|source| CatalogError::Yaml {
        context: "snapshot".to_string(),
        source,
    })
}

/// Reads and normalizes a catalog snapshot file.
///
/// `.yaml` / `.yml` files are read as YAML, everything else as JSON.
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read or parsed. Malformed
/// fields inside a parseable file are defaulted, not reported.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path_str.clone(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let raw = if is_yaml {
        serde_yaml::from_str(&content).map_err(|source| CatalogError::Yaml {
            context: path_str,
            source,
        })?
    } else {
        serde_json::from_str(&content).map_err(|source| CatalogError::Json {
            context: path_str,
            source,
        })?
    };

    tracing::debug!(path = %path.display(), "loaded catalog snapshot");
    Ok(normalize_catalog(raw))
}
