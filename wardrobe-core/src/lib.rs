//! The core of the wardrobe catalog: a typed data-access and validation
//! layer over schema-less document stores.
//!
//! This crate provides:
//!
//! - **Entity contract** ([`entity`]) - Validation and serialization traits
//!   for typed entities
//! - **Product and Order schemas** ([`product`], [`order`]) - The catalog's
//!   domain entities and their validation rules
//! - **Equality filters** ([`filter`]) - Query predicates built from
//!   optional request parameters
//! - **Store backend abstraction** ([`backend`]) - Trait for implementing
//!   storage backends
//! - **Catalog store** ([`store`]) - The shared store handle with an
//!   explicit disconnected state
//! - **Collections interface** ([`collection`]) - Typed and untyped
//!   per-collection operations
//! - **Seeding** ([`seed`]) - Idempotent sample-data bootstrap
//! - **Error handling** ([`error`]) - The catalog error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use wardrobe_core::{entity::Entity, product::Product};
//! use bson::doc;
//!
//! let product = Product::validate(&doc! {
//!     "title": "Classic Tee",
//!     "description": "Premium cotton tee.",
//!     "price": 24.99,
//!     "category": "Tops",
//!     "in_stock": true,
//!     "images": [],
//!     "sizes": ["S", "M"],
//!     "featured": true,
//! })?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as wardrobe_core;

pub mod backend;
pub mod collection;
pub mod entity;
pub mod error;
pub mod filter;
pub mod order;
pub mod product;
pub mod seed;
pub mod store;
