//! Account entity - A customer account that owns projects.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer or company name
    pub name: String,
    /// Address invoices are sent to
    pub billing_address: String,
    /// Phone number for billing questions
    pub billing_phone: String,
    /// Email address invoices are sent to
    pub billing_email: String,
    /// Primary contact at the customer
    pub contact_name: String,
    /// Discount rate negotiated for this customer (e.g. 0.10 for 10%)
    pub discount: Decimal,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One account has many projects
    #[sea_orm(has_many = "super::project::Entity")]
    Projects,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
