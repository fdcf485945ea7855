//! # Local Catalog Server
//!
//! Serves any [`CatalogService`] over the catalog HTTP endpoints, so the
//! storefront can run against a `db.json` file instead of a real backend.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /health          → "OK"                                           │
//! │  GET /products        → 200 [Product]                                  │
//! │  GET /products/{id}   → 200 Product | 404 {}                           │
//! │  GET /stock/{id}      → 200 Stock   | 404 {}                           │
//! │                                                                         │
//! │  Any other catalog failure → 502 { "error": "..." }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use storefront_core::ProductId;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::service::CatalogService;

type SharedCatalog = Arc<dyn CatalogService>;

/// HTTP server exposing a catalog.
pub struct CatalogServer {
    catalog: SharedCatalog,
}

/// Handle to a running catalog server.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    local_addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
}

impl CatalogHandle {
    /// Returns the address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and lets in-flight requests finish.
    pub async fn shutdown(&self) -> CatalogResult<()> {
        self.shutdown_tx
            .send(())
            .await
            .map_err(|_| CatalogError::ServerFailed("Catalog server already stopped".into()))
    }
}

impl CatalogServer {
    /// Creates a server for `catalog`.
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        CatalogServer { catalog }
    }

    /// Builds the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/products", get(list_products_handler))
            .route("/products/{id}", get(product_handler))
            .route("/stock/{id}", get(stock_handler))
            .with_state(self.catalog.clone())
    }

    /// Binds `addr` and serves in the background.
    ///
    /// Pass port 0 to let the OS pick; the chosen address is on the handle.
    pub async fn start(self, addr: SocketAddr) -> CatalogResult<CatalogHandle> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let app = self.router();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CatalogError::ServerFailed(format!("Failed to bind to {}: {}", addr, e)))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| CatalogError::ServerFailed(e.to_string()))?;

        info!(addr = %local_addr, "Catalog server started");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_rx.recv().await;
                    info!("Catalog server shutting down");
                })
                .await
                .ok();
        });

        Ok(CatalogHandle {
            local_addr,
            shutdown_tx,
        })
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn health_handler() -> impl IntoResponse {
    "OK"
}

async fn list_products_handler(State(catalog): State<SharedCatalog>) -> Response {
    match catalog.products().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => error_response(e),
    }
}

async fn product_handler(State(catalog): State<SharedCatalog>, Path(id): Path<ProductId>) -> Response {
    debug!(product_id = %id, "Serving product");
    match catalog.product(id).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => error_response(e),
    }
}

async fn stock_handler(State(catalog): State<SharedCatalog>, Path(id): Path<ProductId>) -> Response {
    debug!(product_id = %id, "Serving stock");
    match catalog.stock(id).await {
        Ok(stock) => Json(stock).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: CatalogError) -> Response {
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, Json(json!({}))).into_response();
    }
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}
