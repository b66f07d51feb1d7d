//! Catalog seeding - Loads the shop's standard catalog from configuration.
//!
//! Seeding is idempotent: entries are matched by name and existing records are
//! left untouched, so prices edited in the application are never overwritten.

use crate::{
    config::catalog::CatalogConfig,
    core::{hardware, labor, material},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};

/// How many catalog entries a seeding run inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Materials inserted
    pub materials: usize,
    /// Hardware items inserted
    pub hardware: usize,
    /// Labor rates inserted
    pub labor: usize,
}

/// Inserts every catalog entry whose name is not already present.
#[instrument(skip_all)]
pub async fn seed_catalog(db: &DatabaseConnection, catalog: &CatalogConfig) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for entry in &catalog.materials {
        if material::get_material_by_name(db, &entry.name).await?.is_some() {
            debug!("Material '{}' already present", entry.name);
            continue;
        }
        material::create_material(db, entry.clone()).await?;
        summary.materials += 1;
    }

    for entry in &catalog.hardware {
        if hardware::get_hardware_by_name(db, &entry.name).await?.is_some() {
            debug!("Hardware '{}' already present", entry.name);
            continue;
        }
        hardware::create_hardware(db, entry.clone()).await?;
        summary.hardware += 1;
    }

    for entry in &catalog.labor {
        if labor::get_labor_by_item_name(db, &entry.item_name).await?.is_some() {
            debug!("Labor '{}' already present", entry.item_name);
            continue;
        }
        labor::create_labor(db, entry.clone()).await?;
        summary.labor += 1;
    }

    info!(
        materials = summary.materials,
        hardware = summary.hardware,
        labor = summary.labor,
        "Catalog seeded"
    );
    Ok(summary)
}
