//! Core business logic - framework-agnostic record store operations and cabinet pricing.
//!
//! Every record-store function takes a `SeaORM` connection and returns [`crate::errors::Result`].
//! Pricing itself lives in [`pricing`] and never touches the database.

pub mod account;
pub mod cabinet;
pub mod drawer;
pub mod hardware;
pub mod labor;
pub mod material;
pub mod pricing;
pub mod project;
pub mod report;
pub mod room;
pub mod seed;
pub mod specification;

use crate::errors::{Error, Result};

/// Trims a required text field, rejecting empty or whitespace-only values.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: format!("{field} cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}
