//! Catalog configuration loading from catalog.toml
//!
//! The shop's standard sheet goods, hardware and labor rates can be listed in a
//! TOML file and seeded into the database on startup. Entries use the same input
//! shapes as the record store's create operations.

use crate::core::{hardware::HardwareInput, labor::LaborInput, material::MaterialInput};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default catalog file, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// Sheet materials to seed
    #[serde(default)]
    pub materials: Vec<MaterialInput>,
    /// Hardware items to seed
    #[serde(default)]
    pub hardware: Vec<HardwareInput>,
    /// Labor rates to seed
    #[serde(default)]
    pub labor: Vec<LaborInput>,
}

/// Path of the catalog file, from `CATALOG_CONFIG` or [`DEFAULT_CATALOG_PATH`].
#[must_use]
pub fn catalog_path() -> PathBuf {
    std::env::var("CATALOG_CONFIG").map_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from)
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path.as_ref().display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.as_ref().display()),
    })
}

/// Like [`load_catalog`], but a missing file is not an error.
pub fn load_catalog_if_present<P: AsRef<Path>>(path: P) -> Result<Option<CatalogConfig>> {
    if !path.as_ref().exists() {
        tracing::debug!("No catalog file at {}", path.as_ref().display());
        return Ok(None);
    }
    load_catalog(path).map(Some)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::hardware::UnitType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [[materials]]
            name = "3/4 Maple Ply"
            description = "Prefinished maple plywood"
            thickness = 0.75
            width = 48
            length = 96
            sheet_cost = 96.50
            waste_factor = 1.2
            markup = 0.25

            [[hardware]]
            name = "Soft-close hinge"
            cost_per = 4.25
            unit_type = "pair"
            markup = 0.3

            [[labor]]
            item_name = "Assemble base cabinet"
            minutes = 45
            units = "cabinet"
        "#;

        let config: CatalogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.materials.len(), 1);
        assert_eq!(config.materials[0].name, "3/4 Maple Ply");
        assert_eq!(config.materials[0].width, dec!(48));
        assert_eq!(config.materials[0].sheet_cost, dec!(96.50));
        assert_eq!(config.materials[0].markup, dec!(0.25));

        assert_eq!(config.hardware[0].unit_type, UnitType::Pair);
        assert_eq!(config.hardware[0].cost_per, dec!(4.25));

        assert_eq!(config.labor[0].minutes, 45);
    }

    #[test]
    fn test_sections_are_optional() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert!(config.materials.is_empty());
        assert!(config.hardware.is_empty());
        assert!(config.labor.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let loaded = load_catalog_if_present("definitely/not/here/catalog.toml").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let result: std::result::Result<CatalogConfig, _> = toml::from_str("[[materials]]\nname = 3");
        assert!(result.is_err());

        let err = load_catalog("definitely/not/here/catalog.toml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
