//! Drawer entity - A drawer box inside a cabinet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Drawer database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drawers")]
pub struct Model {
    /// Unique identifier for the drawer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Cabinet the drawer is built into
    pub cabinet_id: i64,
    /// Drawer box height in inches
    pub height: Decimal,
    /// Box material, `None` if unset or deleted from the catalog
    pub material_id: Option<i64>,
}

/// Defines relationships between Drawer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each drawer belongs to one cabinet
    #[sea_orm(
        belongs_to = "super::cabinet::Entity",
        from = "Column::CabinetId",
        to = "super::cabinet::Column::Id",
        on_delete = "Cascade"
    )]
    Cabinet,
    /// Box material; cleared when the material is deleted
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::MaterialId",
        to = "super::material::Column::Id",
        on_delete = "SetNull"
    )]
    Material,
}

impl Related<super::cabinet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cabinet.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
