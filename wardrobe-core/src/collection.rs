//! Collection handles for catalog store operations.
//!
//! A collection handle borrows the store's backend and scopes operations to
//! one named collection. Two flavors exist:
//!
//! - [`Collection`] - untyped, works with raw BSON field mappings
//! - [`TypedCollection`] - validates entities on the way out and serializes
//!   them on the way in
//!
//! The untyped handle returns documents exactly as the store holds them,
//! `_id` included. The typed handle strips `_id` before validation, since
//! the storage identifier is not part of any entity.

use bson::{Document, Uuid};
use std::marker::PhantomData;
use tracing::debug;

use crate::{
    backend::StoreBackend,
    entity::{Entity, EntityExt},
    error::CatalogResult,
    filter::Filter,
};

/// An untyped collection handle working with raw BSON field mappings.
#[derive(Debug)]
pub struct Collection<'a, B: StoreBackend> {
    name: String,
    backend: &'a B,
}

impl<'a, B: StoreBackend> Collection<'a, B> {
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self { name, backend }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Persists one document and returns the store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`](crate::error::CatalogError) if the insert
    /// fails.
    pub async fn insert(&self, document: Document) -> CatalogResult<Uuid> {
        let id = self
            .backend
            .insert_document(document, &self.name)
            .await?;

        debug!(collection = %self.name, id = %id, "inserted document");

        Ok(id)
    }

    /// Retrieves raw documents matching an equality filter, `_id` included.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`](crate::error::CatalogError) if the query
    /// fails. No matches is an empty vec, not an error.
    pub async fn find(&self, filter: Filter, limit: Option<usize>) -> CatalogResult<Vec<Document>> {
        self.backend
            .find_documents(filter, limit, &self.name)
            .await
    }
}

/// A typed collection handle for a specific entity type.
///
/// Entities are serialized through [`EntityExt`] on create and re-validated
/// through [`Entity::validate`] on every read, so callers only ever see
/// documents that satisfy the schema.
#[derive(Debug)]
pub struct TypedCollection<'a, B: StoreBackend, E: Entity> {
    name: String,
    backend: &'a B,
    _marker: PhantomData<E>,
}

impl<'a, B: StoreBackend, E: Entity> TypedCollection<'a, B, E> {
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self { name, backend, _marker: PhantomData }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Persists one entity and returns the store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`](crate::error::CatalogError) if
    /// serialization or the insert fails.
    pub async fn create(&self, entity: &E) -> CatalogResult<Uuid> {
        let id = self
            .backend
            .insert_document(entity.to_document()?, &self.name)
            .await?;

        debug!(collection = %self.name, id = %id, "created entity");

        Ok(id)
    }

    /// Retrieves entities matching an equality filter.
    ///
    /// Each stored document has its `_id` stripped and is validated into the
    /// entity type before being returned.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`](crate::error::CatalogError) if the query
    /// fails or a stored document no longer satisfies the schema.
    pub async fn find(&self, filter: Filter, limit: Option<usize>) -> CatalogResult<Vec<E>> {
        self.backend
            .find_documents(filter, limit, &self.name)
            .await?
            .into_iter()
            .map(|mut document| {
                document.remove("_id");
                E::validate(&document)
            })
            .collect()
    }
}
