//! Cabinet business logic - Cabinet boxes within project rooms, and their prices.
//!
//! Cabinets are numbered sequentially within their project. A cabinet's room and
//! specification must belong to the same project as the cabinet itself.
//!
//! Prices are never stored: [`price_cabinet`] resolves the cabinet's specification
//! materials and runs [`pricing::price`] on every call.

use crate::{
    core::{pricing, project::require_project, room::get_room_by_id, specification},
    entities::{Cabinet, Drawer, cabinet, drawer},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Editable fields of a cabinet, as on the cabinet form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CabinetInput {
    /// Specification from the same project, if chosen
    pub specification_id: Option<i64>,
    /// Width in inches
    pub width: Decimal,
    /// Height in inches
    pub height: Decimal,
    /// Depth in inches
    pub depth: Decimal,
    /// Door count
    pub number_of_doors: i32,
    /// Shelf count
    pub number_of_shelves: i32,
    /// Build the whole interior from exterior material
    #[serde(default)]
    pub finished_interior: bool,
    /// Left side is visible
    #[serde(default)]
    pub finished_left_end: bool,
    /// Right side is visible
    #[serde(default)]
    pub finished_right_end: bool,
    /// Top is visible
    #[serde(default)]
    pub finished_top: bool,
    /// Bottom is visible
    #[serde(default)]
    pub finished_bottom: bool,
}

/// Only specifications of the cabinet's own project may be chosen.
async fn ensure_specification_in_project<C>(
    db: &C,
    project_id: i64,
    specification_id: Option<i64>,
) -> Result<()>
where
    C: ConnectionTrait,
{
    let Some(specification_id) = specification_id else {
        return Ok(());
    };

    let spec = specification::get_specification_by_id(db, specification_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Specification",
            id: specification_id,
        })?;

    if spec.project_id != project_id {
        return Err(Error::Validation {
            message: format!(
                "Specification '{}' belongs to project {}, not project {project_id}",
                spec.name, spec.project_id
            ),
        });
    }
    Ok(())
}

async fn next_cabinet_number<C>(db: &C, project_id: i64) -> Result<i32>
where
    C: ConnectionTrait,
{
    let last = Cabinet::find()
        .filter(cabinet::Column::ProjectId.eq(project_id))
        .order_by_desc(cabinet::Column::CabinetNumber)
        .one(db)
        .await?;

    Ok(last.map_or(1, |cabinet| cabinet.cabinet_number + 1))
}

/// Finds a cabinet by its unique ID.
pub async fn get_cabinet_by_id<C>(db: &C, cabinet_id: i64) -> Result<Option<cabinet::Model>>
where
    C: ConnectionTrait,
{
    Cabinet::find_by_id(cabinet_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the cabinets of a project in cabinet-number order.
pub async fn list_cabinets_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<cabinet::Model>> {
    Cabinet::find()
        .filter(cabinet::Column::ProjectId.eq(project_id))
        .order_by_asc(cabinet::Column::CabinetNumber)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the cabinets in one room in cabinet-number order.
pub async fn list_cabinets_for_room(
    db: &DatabaseConnection,
    room_id: i64,
) -> Result<Vec<cabinet::Model>> {
    Cabinet::find()
        .filter(cabinet::Column::RoomId.eq(room_id))
        .order_by_asc(cabinet::Column::CabinetNumber)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a cabinet in a project room and assigns it the next cabinet number.
///
/// # Errors
/// Returns an error if:
/// - The project, room or specification does not exist
/// - The room or specification belongs to a different project
/// - The database insert fails
#[instrument(skip(db, input))]
pub async fn create_cabinet(
    db: &DatabaseConnection,
    project_id: i64,
    room_id: i64,
    input: CabinetInput,
) -> Result<cabinet::Model> {
    let txn = db.begin().await?;

    require_project(&txn, project_id).await?;
    let room = get_room_by_id(&txn, room_id).await?.ok_or(Error::NotFound {
        entity: "Room",
        id: room_id,
    })?;
    if room.project_id != project_id {
        return Err(Error::Validation {
            message: format!(
                "Room '{}' belongs to project {}, not project {project_id}",
                room.name, room.project_id
            ),
        });
    }
    ensure_specification_in_project(&txn, project_id, input.specification_id).await?;

    let cabinet_number = next_cabinet_number(&txn, project_id).await?;
    let cabinet = cabinet::ActiveModel {
        project_id: Set(project_id),
        specification_id: Set(input.specification_id),
        room_id: Set(room_id),
        cabinet_number: Set(cabinet_number),
        width: Set(input.width),
        height: Set(input.height),
        depth: Set(input.depth),
        number_of_doors: Set(input.number_of_doors),
        number_of_shelves: Set(input.number_of_shelves),
        finished_interior: Set(input.finished_interior),
        finished_left_end: Set(input.finished_left_end),
        finished_right_end: Set(input.finished_right_end),
        finished_top: Set(input.finished_top),
        finished_bottom: Set(input.finished_bottom),
        ..Default::default()
    };

    let created = cabinet.insert(&txn).await?;
    txn.commit().await?;

    info!(
        cabinet_id = created.id,
        cabinet_number, project_id, room_id, "Cabinet created"
    );
    Ok(created)
}

/// Replaces the form fields of a cabinet. Project, room and cabinet number stay as they are.
#[instrument(skip(db, input))]
pub async fn update_cabinet(
    db: &DatabaseConnection,
    cabinet_id: i64,
    input: CabinetInput,
) -> Result<cabinet::Model> {
    let existing = get_cabinet_by_id(db, cabinet_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Cabinet",
            id: cabinet_id,
        })?;
    ensure_specification_in_project(db, existing.project_id, input.specification_id).await?;

    let mut cabinet: cabinet::ActiveModel = existing.into();
    cabinet.specification_id = Set(input.specification_id);
    cabinet.width = Set(input.width);
    cabinet.height = Set(input.height);
    cabinet.depth = Set(input.depth);
    cabinet.number_of_doors = Set(input.number_of_doors);
    cabinet.number_of_shelves = Set(input.number_of_shelves);
    cabinet.finished_interior = Set(input.finished_interior);
    cabinet.finished_left_end = Set(input.finished_left_end);
    cabinet.finished_right_end = Set(input.finished_right_end);
    cabinet.finished_top = Set(input.finished_top);
    cabinet.finished_bottom = Set(input.finished_bottom);

    cabinet.update(db).await.map_err(Into::into)
}

/// Deletes a cabinet and its drawers. Returns the deleted cabinet.
#[instrument(skip(db))]
pub async fn delete_cabinet(db: &DatabaseConnection, cabinet_id: i64) -> Result<cabinet::Model> {
    let txn = db.begin().await?;

    let cabinet = get_cabinet_by_id(&txn, cabinet_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Cabinet",
            id: cabinet_id,
        })?;

    Drawer::delete_many()
        .filter(drawer::Column::CabinetId.eq(cabinet_id))
        .exec(&txn)
        .await?;
    Cabinet::delete_by_id(cabinet_id).exec(&txn).await?;
    txn.commit().await?;

    info!(cabinet_id, "Cabinet deleted");
    Ok(cabinet)
}

/// Resolves the specification materials of an already-loaded cabinet.
///
/// # Errors
/// [`Error::MissingSpecification`] if the cabinet has no specification.
pub async fn materials_for<C>(db: &C, cabinet: &cabinet::Model) -> Result<pricing::SpecificationMaterials>
where
    C: ConnectionTrait,
{
    let specification_id = cabinet.specification_id.ok_or(Error::MissingSpecification {
        cabinet_id: cabinet.id,
    })?;
    specification::load_materials(db, specification_id).await
}

/// Prices an already-loaded cabinet against its specification's current materials.
pub async fn price_cabinet_model<C>(db: &C, cabinet: &cabinet::Model) -> Result<Decimal>
where
    C: ConnectionTrait,
{
    let materials = materials_for(db, cabinet).await?;
    let price = pricing::price(cabinet, &materials)?;
    debug!(cabinet_id = cabinet.id, %price, "Cabinet priced");
    Ok(price)
}

/// Material cost of a stored cabinet.
///
/// # Errors
/// Returns an error if:
/// - The cabinet does not exist
/// - The cabinet has no specification
/// - The specification is missing its interior or exterior material
/// - A material has a zero sheet width or length
pub async fn price_cabinet(db: &DatabaseConnection, cabinet_id: i64) -> Result<Decimal> {
    let cabinet = get_cabinet_by_id(db, cabinet_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Cabinet",
            id: cabinet_id,
        })?;
    price_cabinet_model(db, &cabinet).await
}
