//! The catalog store handle.
//!
//! [`CatalogStore`] is the single explicitly-constructed resource the rest of
//! the system talks to. It is acquired once at process start and shared; it
//! either holds a live backend or is explicitly disconnected. Operations on
//! a disconnected handle fail with
//! [`CatalogError::StoreUnavailable`](crate::error::CatalogError::StoreUnavailable)
//! immediately, with no retry or fallback, so a shell can surface the
//! condition as service-unavailable.
//!
//! # Example
//!
//! ```ignore
//! use wardrobe::{prelude::*, memory::MemoryStore};
//!
//! let store = CatalogStore::connect(MemoryStore::new());
//! let products = store.typed::<Product>()?;
//! let tops = products.find(Filter::new().eq("category", "Tops"), None).await?;
//! ```

use tracing::warn;

use crate::{
    backend::StoreBackend,
    collection::{Collection, TypedCollection},
    entity::Entity,
    error::{CatalogError, CatalogResult},
};

/// A catalog store handle bound to a specific backend implementation.
///
/// The handle owns the backend for the life of the process. A handle built
/// with [`CatalogStore::disconnected`] models the no-connection state
/// explicitly, so the failure mode is constructible and testable in
/// isolation.
#[derive(Debug)]
pub struct CatalogStore<B: StoreBackend> {
    backend: Option<B>,
}

impl<B: StoreBackend> CatalogStore<B> {
    /// Creates a store handle over a live backend.
    pub fn connect(backend: B) -> Self {
        Self { backend: Some(backend) }
    }

    /// Creates a store handle with no backend.
    ///
    /// Every operation on it fails with
    /// [`CatalogError::StoreUnavailable`](crate::error::CatalogError::StoreUnavailable).
    pub fn disconnected() -> Self {
        Self { backend: None }
    }

    /// Reports whether a live backend is attached.
    pub fn available(&self) -> bool {
        self.backend.is_some()
    }

    /// Returns the backing store's name, if connected.
    pub fn name(&self) -> Option<String> {
        self.backend
            .as_ref()
            .map(StoreBackend::name)
    }

    /// Lists the names of all collections in the store.
    ///
    /// # Errors
    ///
    /// Fails with `StoreUnavailable` when disconnected.
    pub async fn collection_names(&self) -> CatalogResult<Vec<String>> {
        self.backend()?.collection_names().await
    }

    /// Gets an untyped handle for the named collection.
    ///
    /// # Errors
    ///
    /// Fails with `StoreUnavailable` when disconnected.
    pub fn collection(&self, name: &str) -> CatalogResult<Collection<'_, B>> {
        Ok(Collection::new(name.to_string(), self.backend()?))
    }

    /// Gets a typed handle for the entity's collection.
    ///
    /// The collection name is taken from [`Entity::collection_name`].
    ///
    /// # Errors
    ///
    /// Fails with `StoreUnavailable` when disconnected.
    pub fn typed<E: Entity>(&self) -> CatalogResult<TypedCollection<'_, B, E>> {
        Ok(TypedCollection::new(
            E::collection_name().to_string(),
            self.backend()?,
        ))
    }

    /// Shuts down the store and releases backend resources.
    ///
    /// This consumes the handle. Shutting down a disconnected handle is a
    /// no-op.
    pub async fn shutdown(self) -> CatalogResult<()> {
        match self.backend {
            Some(backend) => backend.shutdown().await,
            None => Ok(()),
        }
    }

    fn backend(&self) -> CatalogResult<&B> {
        self.backend.as_ref().ok_or_else(|| {
            warn!("catalog operation attempted without a store connection");
            CatalogError::StoreUnavailable
        })
    }
}
