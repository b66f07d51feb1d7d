//! Labor entity - Correlates shop tasks with the time they take, for invoicing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Labor database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "labor")]
pub struct Model {
    /// Unique identifier for the labor rate
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Task being timed (e.g., "Assemble base cabinet")
    pub item_name: String,
    /// Minutes of shop time per unit
    pub minutes: i32,
    /// What one unit is (e.g., "cabinet", "drawer")
    pub units: String,
}

/// Labor has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
