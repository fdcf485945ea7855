//! # Storefront Library
//!
//! Cart state for a storefront: a persisted cart of catalog products whose
//! amounts are always checked against the catalog's stock.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (wiring, tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore: the cart operations
//! │   ├── notifier.rs ◄─── User-facing notifications
//! │   └── config.rs   ◄─── AppConfig (TOML + env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── CLI parsing and dispatch
//! │   ├── cart.rs     ◄─── cart show/add/remove/update
//! │   └── catalog.rs  ◄─── products, serve
//! └── error.rs        ◄─── CartError, AppError
//! ```
//!
//! ## Embedding
//! ```rust,ignore
//! let config = AppConfig::load(None)?;
//! let notifier = Arc::new(BroadcastNotifier::default());
//! let store = build_cart_store(&config, notifier.clone())?;
//!
//! let mut cart_rx = store.subscribe();
//! store.add_product(1).await.ok();
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use storefront_catalog::HttpCatalog;
use storefront_storage::{CartRepository, FileStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppResult;
use state::{AppConfig, CartStore, Notifier};

/// Builds a [`CartStore`] from configuration.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Catalog client ── HttpCatalog over catalog.base_url                │
/// │  2. Storage ───────── FileStore in storage.dir (or platform data dir)  │
/// │  3. Repository ────── slot named storage.cart_key                      │
/// │  4. CartStore ─────── loads the stored cart, empty if none or invalid  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn build_cart_store(config: &AppConfig, notifier: Arc<dyn Notifier>) -> AppResult<CartStore> {
    let catalog = HttpCatalog::new(&config.catalog)?;
    let data_dir = config.data_dir()?;
    info!(catalog = %catalog.base_url(), ?data_dir, "Wiring cart store");

    let repository = CartRepository::new(
        Arc::new(FileStore::new(data_dir)),
        config.storage.cart_key.clone(),
    );
    Ok(CartStore::new(Arc::new(catalog), repository, notifier))
}

/// Initializes the tracing subscriber. Logs go to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: warnings, plus info from storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,storefront=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
