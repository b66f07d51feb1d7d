//! Database configuration module for the cabinet estimator.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the foreign keys (cascade and set-null rules included) always match the Rust models.

use crate::entities::{
    Account, Cabinet, Drawer, Hardware, Labor, Material, Project, Room, Specification,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the estimator database when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/cabinets.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by [`database_url`].
///
/// The directory holding a `SQLite` file is created if needed.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let url = database_url();
    if let Some(path) = url.strip_prefix("sqlite://") {
        let file = path.split('?').next().unwrap_or(path);
        if let Some(parent) = Path::new(file).parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }
    debug!("Connecting to database at {url}");
    Database::connect(&url).await.map_err(Into::into)
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates every table of the record store if it does not already exist.
///
/// Catalog tables come first, then the ownership hierarchy from accounts down to drawers.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, Account).await?;
    create_table(db, &schema, Material).await?;
    create_table(db, &schema, Hardware).await?;
    create_table(db, &schema, Labor).await?;
    create_table(db, &schema, Project).await?;
    create_table(db, &schema, Room).await?;
    create_table(db, &schema, Specification).await?;
    create_table(db, &schema, Cabinet).await?;
    create_table(db, &schema, Drawer).await?;

    info!("Database tables ensured");
    Ok(())
}
