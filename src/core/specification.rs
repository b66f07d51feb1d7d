//! Specification business logic - Material, construction and finish choices for a project.
//!
//! Specifications belong to a project and are shared by that project's cabinets.
//! Deleting a specification leaves its cabinets in place with no specification.

use crate::{
    core::{material::get_material_by_id, pricing::SpecificationMaterials, project::require_project, required_text},
    entities::{
        Cabinet, Specification, cabinet,
        specification::{self, Catalog, Construction, FinishLevel},
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Editable fields of a specification.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SpecificationInput {
    /// Display name
    pub name: String,
    /// Case interior material
    pub interior_material_id: Option<i64>,
    /// Case exterior material
    pub exterior_material_id: Option<i64>,
    /// Frameless when omitted
    #[serde(default)]
    pub construction: Construction,
    /// Laminate when omitted
    #[serde(default)]
    pub catalog: Catalog,
    /// Unfinished when omitted
    #[serde(default)]
    pub finish_level: FinishLevel,
}

async fn ensure_material_exists<C>(db: &C, material_id: Option<i64>) -> Result<()>
where
    C: ConnectionTrait,
{
    if let Some(id) = material_id {
        if get_material_by_id(db, id).await?.is_none() {
            return Err(Error::NotFound {
                entity: "Material",
                id,
            });
        }
    }
    Ok(())
}

/// Retrieves the specifications of a project, ordered alphabetically by name.
pub async fn list_specifications_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<specification::Model>> {
    Specification::find()
        .filter(specification::Column::ProjectId.eq(project_id))
        .order_by_asc(specification::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specification by its unique ID.
pub async fn get_specification_by_id<C>(
    db: &C,
    specification_id: i64,
) -> Result<Option<specification::Model>>
where
    C: ConnectionTrait,
{
    Specification::find_by_id(specification_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a specification in an existing project.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The project or a referenced material does not exist
/// - The database insert fails
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_specification(
    db: &DatabaseConnection,
    project_id: i64,
    input: SpecificationInput,
) -> Result<specification::Model> {
    let name = required_text("Specification name", &input.name)?;
    require_project(db, project_id).await?;
    ensure_material_exists(db, input.interior_material_id).await?;
    ensure_material_exists(db, input.exterior_material_id).await?;

    let specification = specification::ActiveModel {
        project_id: Set(project_id),
        interior_material_id: Set(input.interior_material_id),
        exterior_material_id: Set(input.exterior_material_id),
        name: Set(name),
        construction: Set(input.construction),
        catalog: Set(input.catalog),
        finish_level: Set(input.finish_level),
        ..Default::default()
    };

    let created = specification.insert(db).await?;
    info!(specification_id = created.id, project_id, "Specification created");
    Ok(created)
}

/// Replaces the editable fields of a specification.
pub async fn update_specification(
    db: &DatabaseConnection,
    specification_id: i64,
    input: SpecificationInput,
) -> Result<specification::Model> {
    let name = required_text("Specification name", &input.name)?;
    ensure_material_exists(db, input.interior_material_id).await?;
    ensure_material_exists(db, input.exterior_material_id).await?;

    let mut specification: specification::ActiveModel =
        get_specification_by_id(db, specification_id)
            .await?
            .ok_or(Error::NotFound {
                entity: "Specification",
                id: specification_id,
            })?
            .into();

    specification.name = Set(name);
    specification.interior_material_id = Set(input.interior_material_id);
    specification.exterior_material_id = Set(input.exterior_material_id);
    specification.construction = Set(input.construction);
    specification.catalog = Set(input.catalog);
    specification.finish_level = Set(input.finish_level);

    specification.update(db).await.map_err(Into::into)
}

/// Loads the interior and exterior materials of a specification for pricing.
///
/// A material slot is `None` when the specification has no material there, or when
/// the reference no longer resolves.
pub async fn load_materials<C>(db: &C, specification_id: i64) -> Result<SpecificationMaterials>
where
    C: ConnectionTrait,
{
    let specification = get_specification_by_id(db, specification_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Specification",
            id: specification_id,
        })?;

    let interior = match specification.interior_material_id {
        Some(id) => get_material_by_id(db, id).await?,
        None => None,
    };
    let exterior = match specification.exterior_material_id {
        Some(id) => get_material_by_id(db, id).await?,
        None => None,
    };

    Ok(SpecificationMaterials {
        specification_id,
        interior,
        exterior,
    })
}

/// Deletes a specification. Cabinets that used it keep existing without one.
/// Returns the deleted specification.
#[instrument(skip(db))]
pub async fn delete_specification(
    db: &DatabaseConnection,
    specification_id: i64,
) -> Result<specification::Model> {
    let txn = db.begin().await?;

    let specification = get_specification_by_id(&txn, specification_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Specification",
            id: specification_id,
        })?;

    let detached = Cabinet::update_many()
        .set(cabinet::ActiveModel {
            specification_id: Set(None),
            ..Default::default()
        })
        .filter(cabinet::Column::SpecificationId.eq(specification_id))
        .exec(&txn)
        .await?;

    Specification::delete_by_id(specification_id).exec(&txn).await?;
    txn.commit().await?;

    info!(
        specification_id,
        cabinets_detached = detached.rows_affected,
        "Specification deleted"
    );
    Ok(specification)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_create_specification_defaults() -> Result<()> {
        let fixture = setup_with_cabinet().await?;

        assert_eq!(fixture.specification.name, "Perimeter");
        assert_eq!(fixture.specification.construction, Construction::Frameless);
        assert_eq!(fixture.specification.catalog, Catalog::Laminate);
        assert_eq!(fixture.specification.finish_level, FinishLevel::Unfinished);
        assert_eq!(
            fixture.specification.interior_material_id,
            Some(fixture.interior.id)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_specification_unknown_material() -> Result<()> {
        let db = setup_test_db().await?;
        let account = create_test_account(&db, "Smith").await?;
        let project = create_test_project(&db, account.id, "Remodel").await?;

        let result = create_test_specification(&db, project.id, Some(77), None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Material",
                id: 77
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_specification_choices_round_trip() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;

        update_specification(
            db,
            fixture.specification.id,
            SpecificationInput {
                name: "Island".to_string(),
                interior_material_id: Some(fixture.exterior.id),
                exterior_material_id: Some(fixture.exterior.id),
                construction: Construction::FaceframeInset,
                catalog: Catalog::WoodFivePiece,
                finish_level: FinishLevel::StainGlazeAndDistress,
            },
        )
        .await?;

        let reloaded = get_specification_by_id(db, fixture.specification.id)
            .await?
            .unwrap();
        assert_eq!(reloaded.name, "Island");
        assert_eq!(reloaded.construction, Construction::FaceframeInset);
        assert_eq!(reloaded.catalog, Catalog::WoodFivePiece);
        assert_eq!(reloaded.finish_level, FinishLevel::StainGlazeAndDistress);
        assert_eq!(reloaded.interior_material_id, Some(fixture.exterior.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_load_materials() -> Result<()> {
        let fixture = setup_with_cabinet().await?;

        let materials = load_materials(&fixture.db, fixture.specification.id).await?;
        assert_eq!(materials.specification_id, fixture.specification.id);
        assert_eq!(materials.interior.map(|m| m.sheet_cost), Some(dec!(2)));
        assert_eq!(materials.exterior.map(|m| m.sheet_cost), Some(dec!(5)));

        Ok(())
    }

    #[tokio::test]
    async fn test_load_materials_with_empty_slot() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let spec =
            create_test_specification(&fixture.db, fixture.project.id, None, Some(fixture.exterior.id))
                .await?;

        let materials = load_materials(&fixture.db, spec.id).await?;
        assert!(materials.interior.is_none());
        assert!(materials.exterior.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_list_specifications_for_project() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        create_test_specification(&fixture.db, fixture.project.id, None, None).await?;

        let specs = list_specifications_for_project(&fixture.db, fixture.project.id).await?;
        assert_eq!(specs.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_specification_detaches_cabinets() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;

        delete_specification(db, fixture.specification.id).await?;

        assert!(get_specification_by_id(db, fixture.specification.id).await?.is_none());
        let cabinet = Cabinet::find_by_id(fixture.cabinet.id).one(db).await?.unwrap();
        assert_eq!(cabinet.specification_id, None);

        let result = crate::core::cabinet::price_cabinet(db, fixture.cabinet.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingSpecification { cabinet_id } if cabinet_id == fixture.cabinet.id
        ));

        Ok(())
    }
}
