//! Project entity - A job for a customer account.
//!
//! A project owns its rooms, specifications and cabinets; deleting the project
//! removes all of them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project name (e.g., "Smith Kitchen Remodel")
    pub name: String,
    /// Owning customer account
    pub account_id: i64,
    /// Job site address
    pub physical_address: String,
    /// Person to call at the job site
    pub site_contact: String,
    /// Site contact phone number
    pub contact_phone: String,
    /// Site contact email address
    pub contact_email: String,
    /// Shop rate billed for labor on this project
    pub hourly_rate: Decimal,
}

/// Defines relationships between Project and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each project belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_delete = "Cascade"
    )]
    Account,
    /// One project has many rooms
    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
    /// One project has many specifications
    #[sea_orm(has_many = "super::specification::Entity")]
    Specifications,
    /// One project has many cabinets
    #[sea_orm(has_many = "super::cabinet::Entity")]
    Cabinets,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specifications.def()
    }
}

impl Related<super::cabinet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cabinets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
