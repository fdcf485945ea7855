//! # In-Memory Catalog
//!
//! A catalog held in process memory. It backs the local catalog server and
//! the cart tests.
//!
//! ## Seed Format
//! The server reads the same `db.json` layout a json-server mock uses:
//! ```json
//! {
//!   "products": [ { "id": 1, "title": "...", "price": 179.9, "image": "..." } ],
//!   "stock":    [ { "id": 1, "amount": 3 } ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_core::{Product, ProductId, Stock};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::service::CatalogService;

// =============================================================================
// Seed
// =============================================================================

/// Initial catalog contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub stock: Vec<Stock>,
}

impl CatalogSeed {
    /// Reads a seed from a `db.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::SeedFailed(format!("{}: {}", path.display(), e)))?;
        let seed: CatalogSeed = serde_json::from_str(&contents)
            .map_err(|e| CatalogError::SeedFailed(format!("{}: {}", path.display(), e)))?;

        info!(
            ?path,
            products = seed.products.len(),
            stock = seed.stock.len(),
            "Catalog seed loaded"
        );
        Ok(seed)
    }
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// Catalog backed by two ordered maps.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<BTreeMap<ProductId, Product>>,
    stock: RwLock<BTreeMap<ProductId, Stock>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from a seed. Later entries win on duplicate ids.
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let products = seed.products.into_iter().map(|p| (p.id, p)).collect();
        let stock = seed.stock.into_iter().map(|s| (s.id, s)).collect();
        InMemoryCatalog {
            products: RwLock::new(products),
            stock: RwLock::new(stock),
        }
    }

    /// Inserts or replaces a product.
    pub async fn upsert_product(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }

    /// Sets the available amount for a product.
    pub async fn set_stock(&self, id: ProductId, amount: u32) {
        self.stock.write().await.insert(id, Stock { id, amount });
    }

    /// Drops the stock record for a product.
    pub async fn remove_stock(&self, id: ProductId) {
        self.stock.write().await.remove(&id);
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn product(&self, id: ProductId) -> CatalogResult<Product> {
        debug!(product_id = %id, "In-memory product lookup");
        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Product", id))
    }

    async fn stock(&self, id: ProductId) -> CatalogResult<Stock> {
        debug!(product_id = %id, "In-memory stock lookup");
        self.stock
            .read()
            .await
            .get(&id)
            .copied()
            .ok_or_else(|| CatalogError::not_found("Stock", id))
    }

    async fn products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }
}
