use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data::builtin_catalogs;
use crate::model::{Catalog, CatalogConfig, CatalogError, Mode, PerMode, RawEntity};

/// On-disk catalog layout: a list of `[[entries]]` tables
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<RawEntity>,
}

/// Parse catalog TOML and validate every entry.
pub fn parse_catalog(text: &str, path: &Path) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(text).map_err(|e| CatalogError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Catalog::from_raw(file.entries)
}

pub fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_catalog(&text, path)
}

/// Built-in catalogs with any configured file overriding its mode.
pub fn load_catalogs(config: &CatalogConfig) -> Result<PerMode<Catalog>, CatalogError> {
    let mut catalogs = builtin_catalogs();
    for (mode, file) in [
        (Mode::Bus, &config.routes_file),
        (Mode::Rail, &config.rail_file),
    ] {
        if let Some(path) = file {
            let catalog = read_catalog(path)?;
            tracing::info!(%mode, path = %path.display(), entries = catalog.len(), "loaded catalog file");
            *catalogs.get_mut(mode) = catalog;
        }
    }
    Ok(catalogs)
}
