//! Core traits and helpers for entity validation and serialization.
//!
//! This module defines the contract every stored entity type must implement:
//! it names the backing collection and validates a raw field mapping into a
//! typed value. Validation is explicit rather than structural: each schema
//! walks its fields by hand, so every type coercion happens at this boundary
//! and the rest of the system only ever sees validated entities.
//!
//! # Example
//!
//! ```ignore
//! use wardrobe::prelude::*;
//! use wardrobe::entity;
//! use bson::Document;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Customer {
//!     pub name: String,
//! }
//!
//! impl Entity for Customer {
//!     fn collection_name() -> &'static str {
//!         "customer"
//!     }
//!
//!     fn validate(document: &Document) -> CatalogResult<Self> {
//!         Ok(Self {
//!             name: entity::require_non_empty_str(document, "name")?,
//!         })
//!     }
//! }
//! ```

use bson::{Bson, Document, ser::serialize_to_bson};
use serde::Serialize;
use serde_json::{Value, to_value};

use crate::error::{CatalogError, CatalogResult, Violation};

/// Core trait for typed catalog entities.
///
/// Entities are transient, validated value objects: the store owns all
/// persisted state, and the storage identifier is not part of any entity.
/// Validation is total: every field is checked, in declaration order, so the
/// first reported failure is deterministic for identical input. Fields not
/// named by the schema are ignored.
pub trait Entity: Serialize + Send + Sync + Clone + 'static {
    /// Returns the name of the collection this entity is stored in.
    ///
    /// This should be a static, lowercase identifier (e.g., "product").
    /// The collection is created automatically on first insert.
    fn collection_name() -> &'static str;

    /// Validates a raw field mapping into a typed entity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the offending field and
    /// the violated rule: a missing required field, a wrong-typed value, or
    /// a value constraint such as a negative price.
    fn validate(document: &Document) -> CatalogResult<Self>;
}

/// Extension trait providing serialization utilities for entities.
///
/// Automatically implemented for all [`Entity`] types.
pub trait EntityExt: Entity {
    /// Serializes this entity to a BSON field mapping for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or does not produce a mapping.
    fn to_document(&self) -> CatalogResult<Document>;

    /// Serializes this entity to a JSON value for the transport boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> CatalogResult<Value>;
}

impl<E: Entity> EntityExt for E {
    fn to_document(&self) -> CatalogResult<Document> {
        match serialize_to_bson(self)? {
            Bson::Document(document) => Ok(document),
            _ => Err(CatalogError::Serialization(
                "entity did not serialize to a document".to_string(),
            )),
        }
    }

    fn to_json(&self) -> CatalogResult<Value> {
        Ok(to_value(self)?)
    }
}

/// Extracts a required string field.
pub fn require_str(document: &Document, field: &'static str) -> CatalogResult<String> {
    match document.get(field) {
        None => Err(CatalogError::validation(field, Violation::MissingField)),
        Some(Bson::String(value)) => Ok(value.clone()),
        Some(_) => Err(CatalogError::validation(
            field,
            Violation::WrongType { expected: "string" },
        )),
    }
}

/// Extracts a required string field that must contain non-whitespace text.
pub fn require_non_empty_str(document: &Document, field: &'static str) -> CatalogResult<String> {
    let value = require_str(document, field)?;

    if value.trim().is_empty() {
        return Err(CatalogError::validation(
            field,
            Violation::Constraint("must not be empty"),
        ));
    }

    Ok(value)
}

/// Extracts a required numeric field, widening BSON integers to `f64`.
///
/// `Double`, `Int32`, and `Int64` are accepted; anything else, including
/// numeric strings, is a type error.
pub fn require_number(document: &Document, field: &'static str) -> CatalogResult<f64> {
    match document.get(field) {
        None => Err(CatalogError::validation(field, Violation::MissingField)),
        Some(Bson::Double(value)) => Ok(*value),
        Some(Bson::Int32(value)) => Ok(*value as f64),
        Some(Bson::Int64(value)) => Ok(*value as f64),
        Some(_) => Err(CatalogError::validation(
            field,
            Violation::WrongType { expected: "number" },
        )),
    }
}

/// Extracts a required numeric field that must be zero or greater.
pub fn require_non_negative_number(
    document: &Document,
    field: &'static str,
) -> CatalogResult<f64> {
    let value = require_number(document, field)?;

    if value < 0.0 {
        return Err(CatalogError::validation(
            field,
            Violation::Constraint("must not be negative"),
        ));
    }

    Ok(value)
}

/// Extracts a required integer field. Doubles are rejected, fractional or not.
pub fn require_integer(document: &Document, field: &'static str) -> CatalogResult<i64> {
    match document.get(field) {
        None => Err(CatalogError::validation(field, Violation::MissingField)),
        Some(Bson::Int32(value)) => Ok(*value as i64),
        Some(Bson::Int64(value)) => Ok(*value),
        Some(_) => Err(CatalogError::validation(
            field,
            Violation::WrongType { expected: "integer" },
        )),
    }
}

/// Extracts a required boolean field.
pub fn require_bool(document: &Document, field: &'static str) -> CatalogResult<bool> {
    match document.get(field) {
        None => Err(CatalogError::validation(field, Violation::MissingField)),
        Some(Bson::Boolean(value)) => Ok(*value),
        Some(_) => Err(CatalogError::validation(
            field,
            Violation::WrongType { expected: "boolean" },
        )),
    }
}

/// Extracts a required array-of-strings field, preserving element order.
pub fn require_str_array(document: &Document, field: &'static str) -> CatalogResult<Vec<String>> {
    let items = require_array(document, field)?;

    items
        .iter()
        .map(|item| match item {
            Bson::String(value) => Ok(value.clone()),
            _ => Err(CatalogError::validation(
                field,
                Violation::Constraint("every element must be a string"),
            )),
        })
        .collect()
}

/// Extracts a required array field, preserving element order.
pub fn require_array<'a>(
    document: &'a Document,
    field: &'static str,
) -> CatalogResult<&'a Vec<Bson>> {
    match document.get(field) {
        None => Err(CatalogError::validation(field, Violation::MissingField)),
        Some(Bson::Array(items)) => Ok(items),
        Some(_) => Err(CatalogError::validation(
            field,
            Violation::WrongType { expected: "array" },
        )),
    }
}
