//! Storage backend abstraction for the catalog store.
//!
//! This module defines the trait that abstracts over concrete document
//! stores, allowing the catalog to run against an in-memory store in tests
//! and a persistent store in production.
//!
//! The contract is deliberately small: documents are created once and listed
//! by equality filter. There is no update, delete, or keyed lookup; the
//! entity-specific logic lives entirely in the schema layer above.
//!
//! # Traits
//!
//! - [`StoreBackend`]: the core trait for storage backends
//! - [`StoreBackendBuilder`]: factory trait for creating backend instances

use async_trait::async_trait;
use bson::{Document, Uuid};
use std::fmt::Debug;

use crate::{error::CatalogResult, filter::Filter};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access
/// from multiple async tasks. The exact concurrency model is
/// implementation-specific.
///
/// # Error Handling
///
/// Operations return [`CatalogResult<T>`]; implementers should document
/// which error variants each operation may return. A failed insert is a
/// [`CatalogError::Persistence`](crate::error::CatalogError::Persistence);
/// an empty query result is not an error.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Persists one new document into a collection and returns the
    /// identifier the store assigned to it.
    ///
    /// The collection is created automatically if it does not exist. The
    /// stored document carries the assigned identifier under `_id`; the
    /// caller never supplies one.
    ///
    /// # Arguments
    ///
    /// * `document` - The field mapping to persist
    /// * `collection` - The name of the collection to insert into
    async fn insert_document(
        &self,
        document: Document,
        collection: &str,
    ) -> CatalogResult<Uuid>;

    /// Retrieves documents matching an equality filter.
    ///
    /// Results come back in the store's natural order (insertion order
    /// unless the store defines otherwise), optionally capped at `limit`.
    /// An empty filter matches every document. A collection that does not
    /// exist, or a filter nothing matches, yields an empty vec, never an
    /// error. Returned documents include the `_id` field.
    ///
    /// # Arguments
    ///
    /// * `filter` - The equality [`Filter`] to match documents against
    /// * `limit` - Maximum number of documents to return
    /// * `collection` - The name of the collection to query
    async fn find_documents(
        &self,
        filter: Filter,
        limit: Option<usize>,
        collection: &str,
    ) -> CatalogResult<Vec<Document>>;

    /// Lists the names of all collections in the store.
    async fn collection_names(&self) -> CatalogResult<Vec<String>>;

    /// Returns a human-readable name for the backing store, such as the
    /// database name. Used for diagnostic reporting.
    fn name(&self) -> String;

    /// Cleanly shuts down the backend, releasing external resources.
    ///
    /// The default implementation is a no-op; backends holding connections
    /// should override this.
    async fn shutdown(self) -> CatalogResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    async fn insert_document(
        &self,
        document: Document,
        collection: &str,
    ) -> CatalogResult<Uuid> {
        (*self)
            .insert_document(document, collection)
            .await
    }

    async fn find_documents(
        &self,
        filter: Filter,
        limit: Option<usize>,
        collection: &str,
    ) -> CatalogResult<Vec<Document>> {
        (*self)
            .find_documents(filter, limit, collection)
            .await
    }

    async fn collection_names(&self) -> CatalogResult<Vec<String>> {
        (*self).collection_names().await
    }

    fn name(&self) -> String {
        (*self).name()
    }
}

/// Factory trait for constructing backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> CatalogResult<Self::Backend>;
}
