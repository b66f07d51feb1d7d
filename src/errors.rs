//! Unified error type for the estimator.
//!
//! Store failures, validation problems and pricing precondition violations all
//! surface through [`Error`], so callers can propagate with `?` from the record
//! store straight through the pricing engine.

use rust_decimal::Decimal;
use thiserror::Error;

/// Every failure the estimator can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Input rejected before it reached the database
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the problem
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A record looked up by id does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of record (e.g. "Cabinet")
        entity: &'static str,
        /// Identifier that was requested
        id: i64,
    },

    /// A material sheet with a zero width or length cannot yield a per-square-foot cost
    #[error("Material '{name}' has invalid sheet dimensions {width} x {length}")]
    InvalidMaterialDimensions {
        /// Material name
        name: String,
        /// Sheet width in inches
        width: Decimal,
        /// Sheet length in inches
        length: Decimal,
    },

    /// The cabinet has no specification, so there are no materials to price with
    #[error("Cabinet {cabinet_id} has no specification")]
    MissingSpecification {
        /// Cabinet that could not be priced
        cabinet_id: i64,
    },

    /// The specification is missing its interior or exterior material
    #[error("Specification {specification_id} is missing its {role} material")]
    MissingMaterial {
        /// Specification that is incomplete
        specification_id: i64,
        /// Which material slot is empty ("interior" or "exterior")
        role: &'static str,
    },

    /// A cost came out larger than a `Decimal` can hold
    #[error("Cost of {item} is too large to calculate")]
    CostOverflow {
        /// What was being priced (e.g. "cabinet 4")
        item: String,
    },

    /// I/O failure outside the database (config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
