//! MongoDB catalog backend for wardrobe.
//!
//! This crate provides a MongoDB-based implementation of the `StoreBackend`
//! trait, the persistent store the catalog runs against in production.
//!
//! To use this backend, include the `mongodb` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wardrobe = { version = "x.y.z", features = ["mongodb"] }
//! ```
//!
//! # Connection
//!
//! The builder takes a MongoDB connection string and database name, or reads
//! them from the `DATABASE_URL` and `DATABASE_NAME` environment variables.
//!
//! # Example
//!
//! ```ignore
//! use wardrobe::{prelude::*, mongodb::MongoStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = MongoStore::builder("mongodb://localhost:27017", "wardrobe")
//!         .build()
//!         .await?;
//!     let store = CatalogStore::connect(backend);
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as wardrobe_mongodb;

pub mod store;

mod query;

pub use store::{MongoStore, MongoStoreBuilder};
