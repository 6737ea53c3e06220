//! Main wardrobe crate providing the catalog core behind a single facade.
//!
//! This crate is the primary entry point for users of the wardrobe catalog.
//! It re-exports the core types from the sub-crates and provides access to
//! the available storage backends.
//!
//! # Features
//!
//! - **Typed catalog entities** - `Product` and `Order` schemas with
//!   explicit, field-by-field validation
//! - **Generic store adapter** - Create and equality-filtered listing
//!   against any backend, with an explicit disconnected state
//! - **Idempotent seeding** - One-shot sample-data bootstrap guarded by an
//!   existence check
//! - **Multiple backends** - In-memory for development and tests, MongoDB
//!   for production (behind the `mongodb` feature)
//!
//! # Quick Start
//!
//! ```ignore
//! use wardrobe::{prelude::*, memory::MemoryStore};
//! use bson::doc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a store handle over an in-memory backend
//!     let store = CatalogStore::connect(MemoryStore::new());
//!
//!     // Seed the catalog with the sample products, once
//!     let outcome = seed(&store, sample_products()).await?;
//!     println!("seeded: {} ({} products)", outcome.seeded, outcome.count);
//!
//!     // Validate a raw field mapping into a Product and persist it
//!     let product = Product::validate(&doc! {
//!         "title": "Classic Tee",
//!         "description": "Premium cotton tee for everyday comfort.",
//!         "price": 24.99,
//!         "category": "Tops",
//!         "in_stock": true,
//!         "images": [],
//!         "sizes": ["S", "M", "L"],
//!         "featured": true,
//!     })?;
//!     let id = store.typed::<Product>()?.create(&product).await?;
//!     println!("created product {id}");
//!
//!     // List featured tops
//!     let featured = store
//!         .typed::<Product>()?
//!         .find(
//!             Filter::new()
//!                 .maybe_eq("category", Some("Tops"))
//!                 .maybe_eq("featured", Some(true)),
//!             None,
//!         )
//!         .await?;
//!     println!("{} featured tops", featured.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Diagnostics
//!
//! The store handle exposes its connectivity state for health reporting:
//! [`CatalogStore::available`](wardrobe_core::store::CatalogStore::available),
//! [`CatalogStore::name`](wardrobe_core::store::CatalogStore::name), and
//! [`CatalogStore::collection_names`](wardrobe_core::store::CatalogStore::collection_names).
//! A handle built with `CatalogStore::disconnected()` reports unavailable
//! and fails every operation with `CatalogError::StoreUnavailable`.
//!
//! # Backends
//!
//! - [`memory`] - Fast in-memory storage for development and testing
//! - [`mongodb`] - Persistent MongoDB backend (requires the `mongodb`
//!   feature)

pub mod prelude;

pub use wardrobe_core::{backend, collection, entity, error, filter, order, product, seed, store};

// Re-export BSON types for convenience
pub use bson;

/// In-memory storage backend implementations.
pub mod memory {
    pub use wardrobe_memory::{MemoryStore, MemoryStoreBuilder};
}

/// MongoDB storage backend implementations.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use wardrobe_mongodb::{MongoStore, MongoStoreBuilder};
}
