//! Hardware business logic - Purchased parts in the shop catalog.

use crate::{
    core::required_text,
    entities::{Hardware, hardware},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::info;

/// Editable fields of a hardware item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HardwareInput {
    /// Catalog name
    pub name: String,
    /// Cost per unit
    pub cost_per: Decimal,
    /// How the item is sold, `each` when omitted
    #[serde(default)]
    pub unit_type: hardware::UnitType,
    /// Markup over cost
    pub markup: Decimal,
}

/// Retrieves all hardware, ordered alphabetically by name.
pub async fn list_hardware(db: &DatabaseConnection) -> Result<Vec<hardware::Model>> {
    Hardware::find()
        .order_by_asc(hardware::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a hardware item by its unique ID.
pub async fn get_hardware_by_id(
    db: &DatabaseConnection,
    hardware_id: i64,
) -> Result<Option<hardware::Model>> {
    Hardware::find_by_id(hardware_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a hardware item by exact name.
pub async fn get_hardware_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<hardware::Model>> {
    Hardware::find()
        .filter(hardware::Column::Name.eq(name.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a hardware item to the catalog.
pub async fn create_hardware(
    db: &DatabaseConnection,
    input: HardwareInput,
) -> Result<hardware::Model> {
    let hardware = hardware::ActiveModel {
        name: Set(required_text("Hardware name", &input.name)?),
        cost_per: Set(input.cost_per),
        unit_type: Set(input.unit_type),
        markup: Set(input.markup),
        ..Default::default()
    };

    let created = hardware.insert(db).await?;
    info!(hardware_id = created.id, "Hardware created");
    Ok(created)
}

/// Replaces the editable fields of a hardware item.
pub async fn update_hardware(
    db: &DatabaseConnection,
    hardware_id: i64,
    input: HardwareInput,
) -> Result<hardware::Model> {
    let name = required_text("Hardware name", &input.name)?;

    let mut hardware: hardware::ActiveModel = get_hardware_by_id(db, hardware_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Hardware",
            id: hardware_id,
        })?
        .into();

    hardware.name = Set(name);
    hardware.cost_per = Set(input.cost_per);
    hardware.unit_type = Set(input.unit_type);
    hardware.markup = Set(input.markup);

    hardware.update(db).await.map_err(Into::into)
}

/// Removes a hardware item. Nothing references hardware, so nothing else changes.
pub async fn delete_hardware(db: &DatabaseConnection, hardware_id: i64) -> Result<hardware::Model> {
    let hardware = get_hardware_by_id(db, hardware_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Hardware",
            id: hardware_id,
        })?;
    Hardware::delete_by_id(hardware_id).exec(db).await?;
    info!(hardware_id, "Hardware deleted");
    Ok(hardware)
}
