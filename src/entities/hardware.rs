//! Hardware entity - Hinges, slides, pulls and other purchased parts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a hardware item is sold
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Sold individually
    #[default]
    #[sea_orm(string_value = "each")]
    Each,
    /// Sold in pairs (e.g., drawer slides)
    #[sea_orm(string_value = "pair")]
    Pair,
    /// Sold as a set
    #[sea_orm(string_value = "set")]
    Set,
}

/// Hardware database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hardware")]
pub struct Model {
    /// Unique identifier for the hardware item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Catalog name (e.g., "Soft-close hinge")
    pub name: String,
    /// Cost per unit
    pub cost_per: Decimal,
    /// How the item is sold
    pub unit_type: UnitType,
    /// Markup over cost (e.g. 0.3 for 30%)
    pub markup: Decimal,
}

/// Hardware has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
