//! In-memory catalog backend for wardrobe.
//!
//! This crate provides a thread-safe, in-memory implementation of the
//! `StoreBackend` trait. It keeps documents in insertion order behind an
//! async-aware read-write lock and is intended for development and testing.
//!
//! # Quick Start
//!
//! ```ignore
//! use wardrobe::{prelude::*, memory::MemoryStore};
//! use bson::doc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CatalogStore::connect(MemoryStore::new());
//!
//!     let product = Product::validate(&doc! {
//!         "title": "Hoodie",
//!         "description": "Cozy fleece-lined hoodie.",
//!         "price": 54.0,
//!         "category": "Outerwear",
//!         "in_stock": true,
//!         "images": [],
//!         "sizes": ["S", "M", "L"],
//!         "featured": false,
//!     })?;
//!
//!     let id = store.typed::<Product>()?.create(&product).await?;
//!     println!("created {id}");
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as wardrobe_memory;

pub mod store;

mod matcher;

pub use store::{MemoryStore, MemoryStoreBuilder};
