//! Cabinet entity - A single cabinet box within a project room.
//!
//! Dimensions are in inches. The five `finished_*` flags mark which surfaces are
//! visible and must be built from the specification's exterior material; see
//! [`crate::core::pricing`] for how they affect the material cost.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cabinet database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cabinets")]
pub struct Model {
    /// Unique identifier for the cabinet
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project the cabinet belongs to
    pub project_id: i64,
    /// Specification the cabinet is built to, `None` if unset or deleted
    pub specification_id: Option<i64>,
    /// Room the cabinet is installed in
    pub room_id: i64,
    /// Sequential number within the project, as printed on shop drawings
    pub cabinet_number: i32,
    /// Overall width in inches
    pub width: Decimal,
    /// Overall height in inches
    pub height: Decimal,
    /// Overall depth in inches
    pub depth: Decimal,
    /// Door count; not used by pricing
    pub number_of_doors: i32,
    /// Adjustable shelves inside the box
    pub number_of_shelves: i32,
    /// Whole interior (sides, top, bottom, back, shelves) uses exterior material
    pub finished_interior: bool,
    /// Left side is visible
    pub finished_left_end: bool,
    /// Right side is visible
    pub finished_right_end: bool,
    /// Top is visible
    pub finished_top: bool,
    /// Bottom is visible
    pub finished_bottom: bool,
}

/// Defines relationships between Cabinet and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each cabinet belongs to one project
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
    /// Each cabinet sits in one room
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_delete = "Cascade"
    )]
    Room,
    /// Specification the cabinet is built to; cleared when the specification is deleted
    #[sea_orm(
        belongs_to = "super::specification::Entity",
        from = "Column::SpecificationId",
        to = "super::specification::Column::Id",
        on_delete = "SetNull"
    )]
    Specification,
    /// One cabinet has many drawers
    #[sea_orm(has_many = "super::drawer::Entity")]
    Drawers,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl Related<super::drawer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drawers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
