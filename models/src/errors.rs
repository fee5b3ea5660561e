// models/src/errors.rs

pub use thiserror::Error;

use crate::tables::Table;

/// Top-level error for record operations, shared by the datastore client and
/// the HTTP layer.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{} not found", .table.entity_name())]
    NotFound { table: Table, id: u64 },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    StorageError(String), // Statement failed, constraint violation, driver error
    #[error("Database connection error: {0}")]
    ConnectionError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Malformed row: {0}")]
    MalformedRow(String), // A stored row could not be mapped back to its entity
    #[error("An internal error occurred: {0}")]
    InternalError(String),
}

impl RecordError {
    pub fn not_found(table: Table, id: u64) -> Self {
        RecordError::NotFound { table, id }
    }
}

/// A field failed its constraint on an inbound payload.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A value is outside the range or set its field allows.
    #[error("field '{field}' must be {constraint}")]
    ConstraintViolated {
        field: &'static str,
        constraint: &'static str,
    },
    /// An integer field received a number with a fractional part.
    #[error("field '{0}' must be an integer")]
    NotAnInteger(&'static str),
    /// A float field received NaN or infinity.
    #[error("field '{0}' must be a finite number")]
    NotFinite(&'static str),
    #[error("gender must be 'male', 'female', 0 or 1, got {0}")]
    InvalidGender(String),
    /// A partial update carried no recognised, non-null field.
    #[error("nothing to update: supply at least one field")]
    NothingToUpdate,
}

/// A type alias for a `Result` that returns a `RecordError` on failure.
pub type RecordResult<T> = Result<T, RecordError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
