//! # HTTP Catalog Client
//!
//! Talks to the catalog service over HTTP with reqwest.
//!
//! ## Status Mapping
//! ```text
//! 2xx + valid JSON ──► Ok(T)
//! 2xx + bad JSON   ──► CatalogError::Decode
//! 404              ──► CatalogError::NotFound
//! other status     ──► CatalogError::Http { status, url }
//! no response      ──► CatalogError::Request
//! ```
//! No retries: a failed lookup is reported once to the caller.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use storefront_core::{Product, ProductId, Stock};
use tracing::{debug, warn};
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::service::CatalogService;

/// reqwest-backed catalog client.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Builds a client from configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;

        Ok(HttpCatalog { client, base_url })
    }

    /// Returns the resolved base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> CatalogResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str, id: &str) -> CatalogResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "Catalog request");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::not_found(resource, id));
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn product(&self, id: ProductId) -> CatalogResult<Product> {
        let key = id.to_string();
        self.get_json(&format!("products/{}", id), "Product", &key).await
    }

    async fn stock(&self, id: ProductId) -> CatalogResult<Stock> {
        let key = id.to_string();
        self.get_json(&format!("stock/{}", id), "Stock", &key).await
    }

    async fn products(&self) -> CatalogResult<Vec<Product>> {
        self.get_json("products", "Products", "*").await
    }
}
