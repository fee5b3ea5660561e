// models/src/lib.rs

//! Entities, wire payloads, validation and the error taxonomy shared by the
//! datastore client and the REST layer.

pub mod errors;
pub mod medical;
pub mod properties;
pub mod tables;
pub mod validation;

pub use errors::{RecordError, RecordResult, ValidationError, ValidationResult};
pub use properties::{FieldValue, FromRecord, Record, ToRecord};
pub use tables::Table;
