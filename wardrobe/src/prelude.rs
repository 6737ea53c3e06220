//! Convenient re-exports of commonly used types from wardrobe.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use wardrobe::prelude::*;
//! ```
//!
//! This provides access to:
//! - The Product and Order schemas
//! - The catalog store handle and collection interfaces
//! - Equality filter construction
//! - Store backends and builders
//! - Seeding and error types

pub use wardrobe_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    collection::{Collection, TypedCollection},
    entity::{Entity, EntityExt},
    error::{CatalogError, CatalogResult, Violation},
    filter::Filter,
    order::{Order, OrderItem},
    product::Product,
    seed::{SeedOutcome, sample_products, seed},
    store::CatalogStore,
};
