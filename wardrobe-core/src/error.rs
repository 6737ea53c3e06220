//! Error types and result types for catalog operations.
//!
//! This module provides the error taxonomy shared by the schema layer and the
//! store adapter. Use [`CatalogResult<T>`] as the return type for fallible
//! operations.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// The rule a field violated during validation.
///
/// Reported alongside the field name in [`CatalogError::Validation`] so that
/// callers can tell a missing field from a malformed one without parsing
/// message strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field was absent from the input mapping.
    MissingField,
    /// The field was present but held a value of the wrong type.
    WrongType {
        /// The type the schema expected, e.g. `"string"` or `"number"`.
        expected: &'static str,
    },
    /// The field had the right type but an unacceptable value.
    Constraint(&'static str),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingField => write!(f, "required field is missing"),
            Violation::WrongType { expected } => write!(f, "expected a {expected}"),
            Violation::Constraint(rule) => write!(f, "{rule}"),
        }
    }
}

/// Represents all possible errors that can occur when validating entities or
/// interacting with the catalog store.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The input mapping failed schema validation. Always a client-input
    /// problem; never worth retrying.
    #[error("invalid field `{field}`: {violation}")]
    Validation {
        /// The offending field.
        field: &'static str,
        /// The rule it violated.
        violation: Violation,
    },
    /// No live store connection exists. Fatal to the operation; surfaced as a
    /// service-unavailable condition by callers.
    #[error("document store unavailable")]
    StoreUnavailable,
    /// The store failed to carry out an operation despite a live
    /// connection. Not retried here; retry policy, if any, belongs to the
    /// caller.
    #[error("persistence error: {0}")]
    Persistence(String),
    /// Serialization/deserialization error when converting between document
    /// formats (BSON, JSON).
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Error during store initialization or connection setup.
    #[error("initialization error: {0}")]
    Initialization(String),
}

impl CatalogError {
    /// Shorthand used by the schema layer to report a failing field.
    pub fn validation(field: &'static str, violation: Violation) -> Self {
        CatalogError::Validation { field, violation }
    }
}

/// A specialized `Result` type for catalog operations.
///
/// This type alias is used throughout the crate to indicate operations that
/// may fail with a [`CatalogError`].
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<BsonError> for CatalogError {
    fn from(err: BsonError) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for CatalogError {
    fn from(err: SerdeJsonError) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}
