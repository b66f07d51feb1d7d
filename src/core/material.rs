//! Material business logic - Handles the sheet-goods catalog.
//!
//! Materials are shared catalog entries. Specifications and drawers point at them,
//! so deleting a material clears those references rather than deleting the records
//! that use it. Sheet dimensions are validated here so that a zero width or length
//! never reaches the pricing engine.

use crate::{
    core::required_text,
    entities::{Drawer, Material, Specification, drawer, material, specification},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Editable fields of a material, as entered on the catalog form or in catalog.toml.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MaterialInput {
    /// Catalog name
    pub name: String,
    /// Free-form notes, empty when omitted
    #[serde(default)]
    pub description: String,
    /// Thickness in inches
    pub thickness: Decimal,
    /// Sheet width in inches, non-zero
    pub width: Decimal,
    /// Sheet length in inches, non-zero
    pub length: Decimal,
    /// Purchase price of one sheet
    pub sheet_cost: Decimal,
    /// Recorded waste allowance
    pub waste_factor: Decimal,
    /// Markup over cost (e.g. 0.25 for 25%)
    pub markup: Decimal,
}

fn validate(input: &MaterialInput) -> Result<String> {
    let name = required_text("Material name", &input.name)?;

    if input.width.is_zero() || input.length.is_zero() {
        return Err(Error::InvalidMaterialDimensions {
            name,
            width: input.width,
            length: input.length,
        });
    }

    Ok(name)
}

/// Retrieves every material in the catalog, ordered alphabetically by name.
pub async fn list_materials(db: &DatabaseConnection) -> Result<Vec<material::Model>> {
    Material::find()
        .order_by_asc(material::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a material by its unique ID.
pub async fn get_material_by_id<C>(db: &C, material_id: i64) -> Result<Option<material::Model>>
where
    C: ConnectionTrait,
{
    Material::find_by_id(material_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a material by exact name.
pub async fn get_material_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<material::Model>> {
    Material::find()
        .filter(material::Column::Name.eq(name.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a material to the catalog.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The sheet width or length is zero
/// - The database insert fails
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_material(
    db: &DatabaseConnection,
    input: MaterialInput,
) -> Result<material::Model> {
    let name = validate(&input)?;

    let material = material::ActiveModel {
        name: Set(name),
        description: Set(input.description.trim().to_string()),
        thickness: Set(input.thickness),
        width: Set(input.width),
        length: Set(input.length),
        sheet_cost: Set(input.sheet_cost),
        waste_factor: Set(input.waste_factor),
        markup: Set(input.markup),
        date_updated: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    let created = material.insert(db).await?;
    info!(material_id = created.id, "Material created");
    Ok(created)
}

/// Replaces the editable fields of a material and refreshes `date_updated`.
///
/// # Errors
/// Returns an error if validation fails, the material does not exist, or the update fails.
#[instrument(skip(db, input))]
pub async fn update_material(
    db: &DatabaseConnection,
    material_id: i64,
    input: MaterialInput,
) -> Result<material::Model> {
    let name = validate(&input)?;

    let mut material: material::ActiveModel = get_material_by_id(db, material_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Material",
            id: material_id,
        })?
        .into();

    material.name = Set(name);
    material.description = Set(input.description.trim().to_string());
    material.thickness = Set(input.thickness);
    material.width = Set(input.width);
    material.length = Set(input.length);
    material.sheet_cost = Set(input.sheet_cost);
    material.waste_factor = Set(input.waste_factor);
    material.markup = Set(input.markup);
    material.date_updated = Set(chrono::Utc::now().naive_utc());

    material.update(db).await.map_err(Into::into)
}

/// Removes a material from the catalog.
///
/// Specifications using it as interior or exterior material, and drawers built from
/// it, keep existing with that reference cleared. Returns the deleted material.
#[instrument(skip(db))]
pub async fn delete_material(db: &DatabaseConnection, material_id: i64) -> Result<material::Model> {
    let txn = db.begin().await?;

    let material = get_material_by_id(&txn, material_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "Material",
            id: material_id,
        })?;

    Specification::update_many()
        .set(specification::ActiveModel {
            interior_material_id: Set(None),
            ..Default::default()
        })
        .filter(specification::Column::InteriorMaterialId.eq(material_id))
        .exec(&txn)
        .await?;

    Specification::update_many()
        .set(specification::ActiveModel {
            exterior_material_id: Set(None),
            ..Default::default()
        })
        .filter(specification::Column::ExteriorMaterialId.eq(material_id))
        .exec(&txn)
        .await?;

    Drawer::update_many()
        .set(drawer::ActiveModel {
            material_id: Set(None),
            ..Default::default()
        })
        .filter(drawer::Column::MaterialId.eq(material_id))
        .exec(&txn)
        .await?;

    Material::delete_by_id(material_id).exec(&txn).await?;
    txn.commit().await?;

    info!(material_id, "Material deleted; references cleared");
    Ok(material)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_create_material_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let material = create_material(&db, maple_ply_input()).await?;

        assert_eq!(material.name, "3/4 Maple Ply");
        assert_eq!(material.width, dec!(24));
        assert_eq!(material.length, dec!(96));
        assert_eq!(material.sheet_cost, dec!(60));
        assert_eq!(material.markup, dec!(0.25));

        let found = get_material_by_name(&db, "3/4 Maple Ply").await?;
        assert_eq!(found.map(|m| m.id), Some(material.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_material_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_material(
            &db,
            MaterialInput {
                name: "   ".to_string(),
                ..maple_ply_input()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = create_material(
            &db,
            MaterialInput {
                width: dec!(0),
                ..maple_ply_input()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidMaterialDimensions { .. }
        ));

        let result = create_material(
            &db,
            MaterialInput {
                length: dec!(0),
                ..maple_ply_input()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidMaterialDimensions { .. }
        ));

        assert!(list_materials(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_stored_material_prices_like_entered_one() -> Result<()> {
        let db = setup_test_db().await?;
        let material = create_material(&db, maple_ply_input()).await?;

        let reloaded = get_material_by_id(&db, material.id).await?.unwrap();
        assert_eq!(crate::core::pricing::sq_ft_cost(&reloaded)?, dec!(4.6875));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_material_integration() -> Result<()> {
        let db = setup_test_db().await?;
        let material = create_material(&db, maple_ply_input()).await?;

        let updated = update_material(
            &db,
            material.id,
            MaterialInput {
                sheet_cost: dec!(80),
                ..maple_ply_input()
            },
        )
        .await?;

        assert_eq!(updated.id, material.id);
        assert_eq!(updated.sheet_cost, dec!(80));
        assert!(updated.date_updated >= material.date_updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_material_rejects_zero_dimensions() -> Result<()> {
        let db = setup_test_db().await?;
        let material = create_material(&db, maple_ply_input()).await?;

        let result = update_material(
            &db,
            material.id,
            MaterialInput {
                width: dec!(0),
                ..maple_ply_input()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidMaterialDimensions { .. }
        ));

        let result = update_material(
            &db,
            material.id,
            MaterialInput {
                length: dec!(0),
                sheet_cost: dec!(80),
                ..maple_ply_input()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidMaterialDimensions { .. }
        ));

        let stored = get_material_by_id(&db, material.id).await?.unwrap();
        assert_eq!(stored.width, dec!(24));
        assert_eq!(stored.length, dec!(96));
        assert_eq!(stored.sheet_cost, dec!(60));
        assert_eq!(stored.date_updated, material.date_updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_material_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let result = update_material(&db, 999, maple_ply_input()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Material",
                id: 999
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_materials_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_material(&db, "White Melamine", dec!(2), dec!(0)).await?;
        create_test_material(&db, "Alder Ply", dec!(5), dec!(0)).await?;

        let names: Vec<String> = list_materials(&db)
            .await?
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Alder Ply", "White Melamine"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_material_clears_references() -> Result<()> {
        let fixture = setup_with_cabinet().await?;
        let db = &fixture.db;
        let drawer =
            crate::core::drawer::create_drawer(db, fixture.cabinet.id, dec!(6), Some(fixture.interior.id))
                .await?;

        let deleted = delete_material(db, fixture.interior.id).await?;
        assert_eq!(deleted.id, fixture.interior.id);
        assert!(get_material_by_id(db, fixture.interior.id).await?.is_none());

        let spec = Specification::find_by_id(fixture.specification.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(spec.interior_material_id, None);
        assert_eq!(spec.exterior_material_id, Some(fixture.exterior.id));

        let drawer = Drawer::find_by_id(drawer.id).one(db).await?.unwrap();
        assert_eq!(drawer.material_id, None);

        // The cabinet survives but can no longer be priced
        let result = crate::core::cabinet::price_cabinet(db, fixture.cabinet.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingMaterial {
                role: "interior",
                ..
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_material_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let result = delete_material(&db, 42).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));
        Ok(())
    }
}
