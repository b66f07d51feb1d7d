//! Specification entity - The bundle of material, construction and finish choices
//! applied to cabinets in a project.
//!
//! The interior and exterior materials are optional references into the catalog.
//! A specification can exist without them (for example after a catalog material is
//! deleted), but cabinets using it cannot be priced until both are set again.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Case construction style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Construction {
    /// Full-overlay box with no face frame
    #[default]
    #[sea_orm(string_value = "Frameless")]
    Frameless,
    /// Face frame with overlay doors
    #[sea_orm(string_value = "Faceframe Overlay")]
    FaceframeOverlay,
    /// Face frame with inset doors
    #[sea_orm(string_value = "Faceframe Inset")]
    FaceframeInset,
}

/// Door and drawer-front catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Catalog {
    /// Laminate slab doors
    #[default]
    #[sea_orm(string_value = "Laminate")]
    Laminate,
    /// Solid wood slab doors
    #[sea_orm(string_value = "Wood Slab")]
    WoodSlab,
    /// Five-piece frame and panel wood doors
    #[sea_orm(string_value = "Wood 5-Piece")]
    WoodFivePiece,
    /// Thermofoil-wrapped doors
    #[sea_orm(string_value = "Thermofoil")]
    Thermofoil,
}

/// Finishing work applied to the cabinets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FinishLevel {
    /// No finish applied
    #[default]
    #[sea_orm(string_value = "Unfinished")]
    Unfinished,
    /// Sanded and prepped for finishing on site
    #[sea_orm(string_value = "Sand & Prep Only")]
    SandAndPrepOnly,
    /// Clear coat
    #[sea_orm(string_value = "Clear")]
    Clear,
    /// Stain
    #[sea_orm(string_value = "Stain")]
    Stain,
    /// Stain and glaze
    #[sea_orm(string_value = "Stain & Glaze")]
    StainAndGlaze,
    /// Stain and distress
    #[sea_orm(string_value = "Stain & Distress")]
    StainAndDistress,
    /// Stain, glaze and distress
    #[sea_orm(string_value = "Stain, Glaze & Distress")]
    StainGlazeAndDistress,
    /// Paint
    #[sea_orm(string_value = "Paint")]
    Paint,
    /// Paint and glaze
    #[sea_orm(string_value = "Paint & Glaze")]
    PaintAndGlaze,
    /// Paint and distress
    #[sea_orm(string_value = "Paint & Distress")]
    PaintAndDistress,
    /// Paint, glaze and distress
    #[sea_orm(string_value = "Paint, Glaze & Distress")]
    PaintGlazeAndDistress,
}

/// Specification database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "specifications")]
pub struct Model {
    /// Unique identifier for the specification
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project this specification belongs to
    pub project_id: i64,
    /// Case interior material, `None` if unset or deleted from the catalog
    pub interior_material_id: Option<i64>,
    /// Case exterior (finished-side) material, `None` if unset or deleted from the catalog
    pub exterior_material_id: Option<i64>,
    /// Display name (e.g., "Perimeter", "Island")
    pub name: String,
    /// Case construction style
    pub construction: Construction,
    /// Door catalog
    pub catalog: Catalog,
    /// Finish applied in the shop
    pub finish_level: FinishLevel,
}

/// Defines relationships between Specification and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each specification belongs to one project
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
    /// Interior case material; cleared when the material is deleted
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::InteriorMaterialId",
        to = "super::material::Column::Id",
        on_delete = "SetNull",
        fk_name = "fk-specifications-interior_material"
    )]
    InteriorMaterial,
    /// Exterior case material; cleared when the material is deleted
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::ExteriorMaterialId",
        to = "super::material::Column::Id",
        on_delete = "SetNull",
        fk_name = "fk-specifications-exterior_material"
    )]
    ExteriorMaterial,
    /// Cabinets built to this specification
    #[sea_orm(has_many = "super::cabinet::Entity")]
    Cabinets,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::cabinet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cabinets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
