//! # storefront-catalog: Catalog Service Access
//!
//! Product details and stock levels come from a remote catalog. This crate
//! puts that service behind the [`CatalogService`] trait so the cart store
//! never sees HTTP.
//!
//! ## Endpoints
//! ```text
//! GET {base}/products        -> [ { id, title, price, image } ]
//! GET {base}/products/{id}   -> { id, title, price, image }
//! GET {base}/stock/{id}      -> { id, amount }
//! ```
//!
//! ## Modules
//!
//! - [`service`] - The `CatalogService` trait
//! - [`http`] - reqwest-backed client
//! - [`memory`] - In-memory catalog and the `db.json` seed format
//! - [`server`] - axum server exposing any catalog over the endpoints above
//! - [`config`] - Client configuration
//! - [`error`] - Catalog error types

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod server;
pub mod service;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use http::HttpCatalog;
pub use memory::{CatalogSeed, InMemoryCatalog};
pub use server::{CatalogHandle, CatalogServer};
pub use service::CatalogService;
