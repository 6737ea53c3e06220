//! In-memory storage implementation for the catalog store.
//!
//! This module provides a simple backend that keeps whole collections in
//! memory behind an async-aware read-write lock. Documents within a
//! collection are held in insertion order, which is the natural order the
//! query contract promises.

use async_trait::async_trait;
use bson::{Document, Uuid};
use mea::rwlock::RwLock;
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

use wardrobe_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::CatalogResult,
    filter::Filter,
};

use crate::matcher;

type CollectionVec = Vec<Document>;
type StoreMap = HashMap<String, CollectionVec>;

/// Thread-safe in-memory catalog backend.
///
/// `MemoryStore` is cloneable and uses an `Arc`-wrapped internal state, so
/// clones share the same underlying data across async tasks. Queries scan
/// the whole collection; fine for development and tests, which is what this
/// backend is for.
///
/// # Example
///
/// ```ignore
/// use wardrobe_memory::MemoryStore;
/// use wardrobe_core::{backend::StoreBackend, filter::Filter};
/// use bson::doc;
///
/// # async fn example() -> wardrobe_core::error::CatalogResult<()> {
/// let store = MemoryStore::new();
/// let id = store.insert_document(doc! { "title": "Hoodie" }, "product").await?;
/// let docs = store.find_documents(Filter::new(), None, "product").await?;
/// assert_eq!(docs.len(), 1);
/// # Ok(()) }
/// ```
#[derive(Default, Clone, Debug)]
pub struct MemoryStore {
    /// The main storage map: collection name -> documents in insertion order.
    store: Arc<RwLock<StoreMap>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory catalog backend.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing a `MemoryStore`.
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }
}

#[async_trait]
impl StoreBackend for MemoryStore {
    async fn insert_document(
        &self,
        document: Document,
        collection: &str,
    ) -> CatalogResult<Uuid> {
        let id = Uuid::new();

        let mut stored = document;
        stored.insert("_id", id);

        let mut store = self.store.write().await;
        store
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        debug!(collection, id = %id, "stored document in memory");

        Ok(id)
    }

    async fn find_documents(
        &self,
        filter: Filter,
        limit: Option<usize>,
        collection: &str,
    ) -> CatalogResult<Vec<Document>> {
        let store = self.store.read().await;
        let documents = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        Ok(documents
            .iter()
            .filter(|document| matcher::matches(document, &filter))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn collection_names(&self) -> CatalogResult<Vec<String>> {
        Ok(self
            .store
            .read()
            .await
            .keys()
            .cloned()
            .collect())
    }

    fn name(&self) -> String {
        "memory".to_string()
    }
}

/// Builder for constructing [`MemoryStore`] instances.
///
/// Currently a no-op builder; it exists so the memory backend plugs into the
/// same [`StoreBackendBuilder`] seam as persistent backends.
#[derive(Default)]
pub struct MemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for MemoryStoreBuilder {
    type Backend = MemoryStore;

    /// Builds and returns a new [`MemoryStore`] instance. Always succeeds.
    async fn build(self) -> CatalogResult<Self::Backend> {
        Ok(MemoryStore::new())
    }
}
