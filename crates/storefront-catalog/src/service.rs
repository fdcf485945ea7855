//! # Catalog Service Trait
//!
//! The read-only view of the inventory service the cart depends on.

use async_trait::async_trait;
use storefront_core::{Product, ProductId, Stock};

use crate::error::CatalogResult;

/// Read access to products and stock levels.
///
/// Lookups are independent: a product can exist without a stock record and
/// vice versa. A missing record is reported as [`CatalogError::NotFound`].
///
/// [`CatalogError::NotFound`]: crate::error::CatalogError::NotFound
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetches product details by id.
    async fn product(&self, id: ProductId) -> CatalogResult<Product>;

    /// Fetches the available stock for a product.
    async fn stock(&self, id: ProductId) -> CatalogResult<Stock>;

    /// Lists every product in the catalog.
    async fn products(&self) -> CatalogResult<Vec<Product>>;
}
