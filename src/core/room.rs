//! Room business logic - Named areas of a project that hold cabinets.

use crate::{
    core::{project::require_project, required_text},
    entities::{Cabinet, Drawer, Room, cabinet, drawer, room},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Retrieves the rooms of a project, ordered alphabetically by name.
pub async fn list_rooms_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<room::Model>> {
    Room::find()
        .filter(room::Column::ProjectId.eq(project_id))
        .order_by_asc(room::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a room by its unique ID.
pub async fn get_room_by_id<C>(db: &C, room_id: i64) -> Result<Option<room::Model>>
where
    C: ConnectionTrait,
{
    Room::find_by_id(room_id).one(db).await.map_err(Into::into)
}

/// Adds a room to an existing project.
#[instrument(skip(db))]
pub async fn create_room(db: &DatabaseConnection, project_id: i64, name: &str) -> Result<room::Model> {
    let name = required_text("Room name", name)?;
    require_project(db, project_id).await?;

    let room = room::ActiveModel {
        name: Set(name),
        project_id: Set(project_id),
        ..Default::default()
    };

    let created = room.insert(db).await?;
    info!(room_id = created.id, project_id, "Room created");
    Ok(created)
}

/// Renames a room.
pub async fn rename_room(db: &DatabaseConnection, room_id: i64, name: &str) -> Result<room::Model> {
    let name = required_text("Room name", name)?;

    let mut room: room::ActiveModel = get_room_by_id(db, room_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Room",
            id: room_id,
        })?
        .into();
    room.name = Set(name);

    room.update(db).await.map_err(Into::into)
}

/// Number of drawers across every cabinet in the room.
pub async fn drawer_count<C>(db: &C, room_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    Drawer::find()
        .inner_join(Cabinet)
        .filter(cabinet::Column::RoomId.eq(room_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Deletes a room along with the cabinets in it and their drawers.
/// Returns the deleted room.
#[instrument(skip(db))]
pub async fn delete_room(db: &DatabaseConnection, room_id: i64) -> Result<room::Model> {
    let txn = db.begin().await?;

    let room = get_room_by_id(&txn, room_id).await?.ok_or(Error::NotFound {
        entity: "Room",
        id: room_id,
    })?;

    let cabinet_ids: Vec<i64> = Cabinet::find()
        .select_only()
        .column(cabinet::Column::Id)
        .filter(cabinet::Column::RoomId.eq(room_id))
        .into_tuple()
        .all(&txn)
        .await?;

    Drawer::delete_many()
        .filter(drawer::Column::CabinetId.is_in(cabinet_ids.clone()))
        .exec(&txn)
        .await?;
    Cabinet::delete_many()
        .filter(cabinet::Column::Id.is_in(cabinet_ids.clone()))
        .exec(&txn)
        .await?;
    Room::delete_by_id(room_id).exec(&txn).await?;
    txn.commit().await?;

    info!(room_id, cabinets = cabinet_ids.len(), "Room deleted");
    Ok(room)
}
