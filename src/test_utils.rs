//! Shared test utilities for the cabinet estimator.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{
        account::{self, AccountInput},
        cabinet::{self, CabinetInput},
        material::{self, MaterialInput},
        project::{self, ProjectInput},
        room,
        specification::{self, SpecificationInput},
    },
    entities,
    errors::Result,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A material record that has not been stored, for pure pricing tests.
#[must_use]
pub fn sample_material(
    width: Decimal,
    length: Decimal,
    sheet_cost: Decimal,
    markup: Decimal,
) -> entities::material::Model {
    entities::material::Model {
        id: 1,
        name: "Sample Sheet".to_string(),
        description: String::new(),
        thickness: dec!(0.75),
        width,
        length,
        sheet_cost,
        waste_factor: dec!(1.1),
        markup,
        date_updated: chrono::Utc::now().naive_utc(),
    }
}

/// A 30" x 30" x 12" cabinet with one shelf and no finished surfaces, not stored.
#[must_use]
pub fn sample_cabinet() -> entities::cabinet::Model {
    entities::cabinet::Model {
        id: 1,
        project_id: 1,
        specification_id: Some(1),
        room_id: 1,
        cabinet_number: 1,
        width: dec!(30),
        height: dec!(30),
        depth: dec!(12),
        number_of_doors: 2,
        number_of_shelves: 1,
        finished_interior: false,
        finished_left_end: false,
        finished_right_end: false,
        finished_top: false,
        finished_bottom: false,
    }
}

/// Catalog form input for a 24" x 96" sheet at $60 with 25% markup ($4.6875 / sq ft).
#[must_use]
pub fn maple_ply_input() -> MaterialInput {
    MaterialInput {
        name: "3/4 Maple Ply".to_string(),
        description: "Prefinished maple plywood".to_string(),
        thickness: dec!(0.75),
        width: dec!(24),
        length: dec!(96),
        sheet_cost: dec!(60),
        waste_factor: dec!(1.1),
        markup: dec!(0.25),
    }
}

/// Creates a material on a 12" x 12" sheet, so its square-foot cost is
/// `sheet_cost * (1 + markup)`.
pub async fn create_test_material(
    db: &DatabaseConnection,
    name: &str,
    sheet_cost: Decimal,
    markup: Decimal,
) -> Result<entities::material::Model> {
    material::create_material(
        db,
        MaterialInput {
            name: name.to_string(),
            description: String::new(),
            thickness: dec!(0.75),
            width: dec!(12),
            length: dec!(12),
            sheet_cost,
            waste_factor: dec!(1.1),
            markup,
        },
    )
    .await
}

/// Account form input with placeholder contact details.
#[must_use]
pub fn account_input(name: &str) -> AccountInput {
    AccountInput {
        name: name.to_string(),
        billing_address: "1 Main St".to_string(),
        billing_phone: "555-0100".to_string(),
        billing_email: "billing@example.com".to_string(),
        contact_name: "Pat Doe".to_string(),
        discount: dec!(0.125),
    }
}

/// Creates a test account with placeholder contact details.
pub async fn create_test_account(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::account::Model> {
    account::create_account(db, account_input(name)).await
}

/// Project form input with placeholder site details.
#[must_use]
pub fn project_input(name: &str) -> ProjectInput {
    ProjectInput {
        name: name.to_string(),
        physical_address: "22 Job Site Rd".to_string(),
        site_contact: "Sam Site".to_string(),
        contact_phone: "555-0101".to_string(),
        contact_email: "site@example.com".to_string(),
        hourly_rate: dec!(65),
    }
}

/// Creates a test project under the given account.
pub async fn create_test_project(
    db: &DatabaseConnection,
    account_id: i64,
    name: &str,
) -> Result<entities::project::Model> {
    project::create_project(db, account_id, project_input(name)).await
}

/// Creates a test room in the given project.
pub async fn create_test_room(
    db: &DatabaseConnection,
    project_id: i64,
    name: &str,
) -> Result<entities::room::Model> {
    room::create_room(db, project_id, name).await
}

/// Creates a specification with default construction, catalog and finish choices.
pub async fn create_test_specification(
    db: &DatabaseConnection,
    project_id: i64,
    interior_material_id: Option<i64>,
    exterior_material_id: Option<i64>,
) -> Result<entities::specification::Model> {
    specification::create_specification(
        db,
        project_id,
        SpecificationInput {
            name: "Perimeter".to_string(),
            interior_material_id,
            exterior_material_id,
            construction: entities::specification::Construction::default(),
            catalog: entities::specification::Catalog::default(),
            finish_level: entities::specification::FinishLevel::default(),
        },
    )
    .await
}

/// Form input for the same box as [`sample_cabinet`].
#[must_use]
pub fn cabinet_input(specification_id: Option<i64>) -> CabinetInput {
    CabinetInput {
        specification_id,
        width: dec!(30),
        height: dec!(30),
        depth: dec!(12),
        number_of_doors: 2,
        number_of_shelves: 1,
        finished_interior: false,
        finished_left_end: false,
        finished_right_end: false,
        finished_top: false,
        finished_bottom: false,
    }
}

/// Creates a 30" x 30" x 12" cabinet with one shelf and no finished surfaces.
pub async fn create_test_cabinet(
    db: &DatabaseConnection,
    project_id: i64,
    room_id: i64,
    specification_id: Option<i64>,
) -> Result<entities::cabinet::Model> {
    cabinet::create_cabinet(db, project_id, room_id, cabinet_input(specification_id)).await
}

/// A fully wired record tree: account → project → room + specification → cabinet.
pub struct CabinetFixture {
    /// In-memory database holding the records
    pub db: DatabaseConnection,
    /// "Smith Residence"
    pub account: entities::account::Model,
    /// "Kitchen Remodel"
    pub project: entities::project::Model,
    /// "Kitchen"
    pub room: entities::room::Model,
    /// $2.00 / sq ft
    pub interior: entities::material::Model,
    /// $5.00 / sq ft
    pub exterior: entities::material::Model,
    /// Uses `interior` and `exterior`
    pub specification: entities::specification::Model,
    /// Prices at $45.00
    pub cabinet: entities::cabinet::Model,
}

/// Sets up a complete record tree with one priceable cabinet.
pub async fn setup_with_cabinet() -> Result<CabinetFixture> {
    let db = setup_test_db().await?;
    let account = create_test_account(&db, "Smith Residence").await?;
    let project = create_test_project(&db, account.id, "Kitchen Remodel").await?;
    let room = create_test_room(&db, project.id, "Kitchen").await?;
    let interior = create_test_material(&db, "White Melamine", dec!(2), dec!(0)).await?;
    let exterior = create_test_material(&db, "Walnut Ply", dec!(5), dec!(0)).await?;
    let specification =
        create_test_specification(&db, project.id, Some(interior.id), Some(exterior.id)).await?;
    let cabinet = create_test_cabinet(&db, project.id, room.id, Some(specification.id)).await?;

    Ok(CabinetFixture {
        db,
        account,
        project,
        room,
        interior,
        exterior,
        specification,
        cabinet,
    })
}
