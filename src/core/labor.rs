//! Labor business logic - Shop time per task, used when invoicing.

use crate::{
    core::required_text,
    entities::{Labor, labor},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::info;

/// Editable fields of a labor entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LaborInput {
    /// Task being timed
    pub item_name: String,
    /// Minutes per unit, zero or more
    pub minutes: i32,
    /// What one unit is
    pub units: String,
}

fn validate(input: &LaborInput) -> Result<String> {
    let item_name = required_text("Labor item name", &input.item_name)?;
    if input.minutes < 0 {
        return Err(Error::Validation {
            message: format!("Labor minutes cannot be negative (got {})", input.minutes),
        });
    }
    Ok(item_name)
}

/// Retrieves all labor entries, ordered alphabetically by item name.
pub async fn list_labor(db: &DatabaseConnection) -> Result<Vec<labor::Model>> {
    Labor::find()
        .order_by_asc(labor::Column::ItemName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a labor rate by its unique ID.
pub async fn get_labor_by_id(db: &DatabaseConnection, labor_id: i64) -> Result<Option<labor::Model>> {
    Labor::find_by_id(labor_id).one(db).await.map_err(Into::into)
}

/// Finds a labor entry by exact item name.
pub async fn get_labor_by_item_name(
    db: &DatabaseConnection,
    item_name: &str,
) -> Result<Option<labor::Model>> {
    Labor::find()
        .filter(labor::Column::ItemName.eq(item_name.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a labor entry.
///
/// # Errors
/// Returns an error if the item name is blank, minutes are negative, or the insert fails.
pub async fn create_labor(db: &DatabaseConnection, input: LaborInput) -> Result<labor::Model> {
    let labor = labor::ActiveModel {
        item_name: Set(validate(&input)?),
        minutes: Set(input.minutes),
        units: Set(input.units.trim().to_string()),
        ..Default::default()
    };

    let created = labor.insert(db).await?;
    info!(labor_id = created.id, "Labor entry created");
    Ok(created)
}

/// Replaces the editable fields of a labor rate.
///
/// # Errors
/// Returns an error if validation fails or the labor rate does not exist.
pub async fn update_labor(
    db: &DatabaseConnection,
    labor_id: i64,
    input: LaborInput,
) -> Result<labor::Model> {
    let item_name = validate(&input)?;

    let mut labor: labor::ActiveModel = get_labor_by_id(db, labor_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Labor",
            id: labor_id,
        })?
        .into();
    labor.item_name = Set(item_name);
    labor.minutes = Set(input.minutes);
    labor.units = Set(input.units.trim().to_string());

    labor.update(db).await.map_err(Into::into)
}

/// Removes a labor rate. Returns the deleted record.
pub async fn delete_labor(db: &DatabaseConnection, labor_id: i64) -> Result<labor::Model> {
    let labor = get_labor_by_id(db, labor_id).await?.ok_or(Error::NotFound {
        entity: "Labor",
        id: labor_id,
    })?;
    Labor::delete_by_id(labor_id).exec(db).await?;
    Ok(labor)
}
