//! Material entity - Sheet goods in the shop's catalog.
//!
//! Materials are referenced by specifications (interior and exterior case material)
//! and by drawers, but never owned by them. Deleting a material clears those
//! references instead of removing the records that point at it.
//!
//! Sheet dimensions are stored in inches; `sheet_cost` is the price of one full sheet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Material database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    /// Unique identifier for the material
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Catalog name (e.g., "3/4 Maple Ply")
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Sheet thickness in inches
    pub thickness: Decimal,
    /// Sheet width in inches
    pub width: Decimal,
    /// Sheet length in inches
    pub length: Decimal,
    /// Cost of one full sheet
    pub sheet_cost: Decimal,
    /// Expected waste as a multiplier; stored for reference, not used by case pricing
    pub waste_factor: Decimal,
    /// Markup applied on top of the raw per-square-foot cost (0.25 = 25%)
    pub markup: Decimal,
    /// When the pricing data was last touched
    pub date_updated: DateTime,
}

/// Defines relationships between Material and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Drawers built from this material
    #[sea_orm(has_many = "super::drawer::Entity")]
    Drawers,
}

impl Related<super::drawer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drawers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
