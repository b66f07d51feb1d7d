/// Database configuration and connection management
pub mod database;

/// Catalog seed configuration loading from catalog.toml
pub mod catalog;
