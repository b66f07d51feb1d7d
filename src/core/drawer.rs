//! Drawer business logic - Drawer boxes inside a cabinet.
//!
//! Drawers are edited as a set per cabinet: [`replace_drawers`] applies the rows of a
//! drawer formset (keep and edit, delete, add) in one transaction.

use crate::{
    core::{cabinet::get_cabinet_by_id, material::get_material_by_id},
    entities::{Drawer, drawer},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// One row of a drawer formset submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerChange {
    /// Keep an existing drawer with these values
    Update {
        id: i64,
        height: Decimal,
        material_id: Option<i64>,
    },
    /// Remove an existing drawer
    Delete { id: i64 },
    /// Add a new drawer
    Add {
        height: Decimal,
        material_id: Option<i64>,
    },
}

async fn ensure_cabinet_exists<C>(db: &C, cabinet_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    match get_cabinet_by_id(db, cabinet_id).await? {
        Some(_) => Ok(()),
        None => Err(Error::NotFound {
            entity: "Cabinet",
            id: cabinet_id,
        }),
    }
}

async fn ensure_material_exists<C>(db: &C, material_id: Option<i64>) -> Result<()>
where
    C: ConnectionTrait,
{
    let Some(id) = material_id else {
        return Ok(());
    };
    match get_material_by_id(db, id).await? {
        Some(_) => Ok(()),
        None => Err(Error::NotFound {
            entity: "Material",
            id,
        }),
    }
}

/// Loads a drawer and checks that it belongs to the given cabinet.
async fn owned_drawer<C>(db: &C, cabinet_id: i64, drawer_id: i64) -> Result<drawer::Model>
where
    C: ConnectionTrait,
{
    let drawer = get_drawer_by_id(db, drawer_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Drawer",
            id: drawer_id,
        })?;

    if drawer.cabinet_id != cabinet_id {
        return Err(Error::Validation {
            message: format!("Drawer {drawer_id} does not belong to cabinet {cabinet_id}"),
        });
    }
    Ok(drawer)
}

async fn insert_drawer<C>(
    db: &C,
    cabinet_id: i64,
    height: Decimal,
    material_id: Option<i64>,
) -> Result<drawer::Model>
where
    C: ConnectionTrait,
{
    ensure_material_exists(db, material_id).await?;

    let drawer = drawer::ActiveModel {
        cabinet_id: Set(cabinet_id),
        height: Set(height),
        material_id: Set(material_id),
        ..Default::default()
    };
    drawer.insert(db).await.map_err(Into::into)
}

/// Finds a drawer by its unique ID.
pub async fn get_drawer_by_id<C>(db: &C, drawer_id: i64) -> Result<Option<drawer::Model>>
where
    C: ConnectionTrait,
{
    Drawer::find_by_id(drawer_id).one(db).await.map_err(Into::into)
}

/// Retrieves the drawers of a cabinet in creation order.
pub async fn list_drawers_for_cabinet<C>(db: &C, cabinet_id: i64) -> Result<Vec<drawer::Model>>
where
    C: ConnectionTrait,
{
    Drawer::find()
        .filter(drawer::Column::CabinetId.eq(cabinet_id))
        .order_by_asc(drawer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Number of drawers in a cabinet.
pub async fn count_for_cabinet<C>(db: &C, cabinet_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    Drawer::find()
        .filter(drawer::Column::CabinetId.eq(cabinet_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Adds a drawer to a cabinet.
///
/// # Errors
/// Returns an error if the cabinet or the referenced material does not exist.
#[instrument(skip(db))]
pub async fn create_drawer(
    db: &DatabaseConnection,
    cabinet_id: i64,
    height: Decimal,
    material_id: Option<i64>,
) -> Result<drawer::Model> {
    ensure_cabinet_exists(db, cabinet_id).await?;
    let created = insert_drawer(db, cabinet_id, height, material_id).await?;
    info!(drawer_id = created.id, cabinet_id, "Drawer created");
    Ok(created)
}

/// Changes the height and material of a drawer.
pub async fn update_drawer(
    db: &DatabaseConnection,
    drawer_id: i64,
    height: Decimal,
    material_id: Option<i64>,
) -> Result<drawer::Model> {
    ensure_material_exists(db, material_id).await?;

    let mut drawer: drawer::ActiveModel = get_drawer_by_id(db, drawer_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Drawer",
            id: drawer_id,
        })?
        .into();
    drawer.height = Set(height);
    drawer.material_id = Set(material_id);

    drawer.update(db).await.map_err(Into::into)
}

/// Removes a drawer. Returns the deleted drawer.
pub async fn delete_drawer(db: &DatabaseConnection, drawer_id: i64) -> Result<drawer::Model> {
    let drawer = get_drawer_by_id(db, drawer_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Drawer",
            id: drawer_id,
        })?;
    Drawer::delete_by_id(drawer_id).exec(db).await?;
    Ok(drawer)
}

/// Applies a drawer formset to a cabinet and returns the cabinet's drawers afterwards.
///
/// All rows are applied in one transaction; if any row refers to a drawer of another
/// cabinet or an unknown material, nothing is changed.
#[instrument(skip(db, changes), fields(rows = changes.len()))]
pub async fn replace_drawers(
    db: &DatabaseConnection,
    cabinet_id: i64,
    changes: Vec<DrawerChange>,
) -> Result<Vec<drawer::Model>> {
    let txn = db.begin().await?;
    ensure_cabinet_exists(&txn, cabinet_id).await?;

    for change in changes {
        match change {
            DrawerChange::Update {
                id,
                height,
                material_id,
            } => {
                ensure_material_exists(&txn, material_id).await?;
                let mut drawer: drawer::ActiveModel = owned_drawer(&txn, cabinet_id, id).await?.into();
                drawer.height = Set(height);
                drawer.material_id = Set(material_id);
                drawer.update(&txn).await?;
            }
            DrawerChange::Delete { id } => {
                owned_drawer(&txn, cabinet_id, id).await?;
                Drawer::delete_by_id(id).exec(&txn).await?;
            }
            DrawerChange::Add {
                height,
                material_id,
            } => {
                insert_drawer(&txn, cabinet_id, height, material_id).await?;
            }
        }
    }

    let drawers = list_drawers_for_cabinet(&txn, cabinet_id).await?;
    txn.commit().await?;

    info!(cabinet_id, drawers = drawers.len(), "Drawers replaced");
    Ok(drawers)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_create_drawer_integration() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;

        let drawer = create_drawer(db, fixture.cabinet.id, dec!(6.5), Some(fixture.interior.id)).await?;
        assert_eq!(drawer.cabinet_id, fixture.cabinet.id);
        assert_eq!(drawer.height, dec!(6.5));
        assert_eq!(drawer.material_id, Some(fixture.interior.id));
        assert_eq!(count_for_cabinet(db, fixture.cabinet.id).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_drawer_validation() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;

        let result = create_drawer(db, 500, dec!(6), None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "Cabinet", .. }
        ));

        let result = create_drawer(db, fixture.cabinet.id, dec!(6), Some(500)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "Material", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete_drawer() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;
        let drawer = create_drawer(db, fixture.cabinet.id, dec!(6), None).await?;

        let updated = update_drawer(db, drawer.id, dec!(10), Some(fixture.exterior.id)).await?;
        assert_eq!(updated.height, dec!(10));
        assert_eq!(updated.material_id, Some(fixture.exterior.id));

        delete_drawer(db, drawer.id).await?;
        assert!(get_drawer_by_id(db, drawer.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_drawers_applies_formset() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;
        let keep = create_drawer(db, fixture.cabinet.id, dec!(6), None).await?;
        let remove = create_drawer(db, fixture.cabinet.id, dec!(6), None).await?;

        let drawers = replace_drawers(
            db,
            fixture.cabinet.id,
            vec![
                DrawerChange::Update {
                    id: keep.id,
                    height: dec!(4),
                    material_id: Some(fixture.interior.id),
                },
                DrawerChange::Delete { id: remove.id },
                DrawerChange::Add {
                    height: dec!(12),
                    material_id: None,
                },
            ],
        )
        .await?;

        assert_eq!(drawers.len(), 2);
        assert_eq!(drawers[0].id, keep.id);
        assert_eq!(drawers[0].height, dec!(4));
        assert_eq!(drawers[0].material_id, Some(fixture.interior.id));
        assert_eq!(drawers[1].height, dec!(12));
        assert!(get_drawer_by_id(db, remove.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_drawers_is_all_or_nothing() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;
        let other = create_test_cabinet(db, fixture.project.id, fixture.room.id, None).await?;
        let foreign = create_drawer(db, other.id, dec!(6), None).await?;

        let result = replace_drawers(
            db,
            fixture.cabinet.id,
            vec![
                DrawerChange::Add {
                    height: dec!(5),
                    material_id: None,
                },
                DrawerChange::Delete { id: foreign.id },
            ],
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        assert_eq!(count_for_cabinet(db, fixture.cabinet.id).await?, 0);
        assert!(get_drawer_by_id(db, foreign.id).await?.is_some());

        Ok(())
    }
}
