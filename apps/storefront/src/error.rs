//! # Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  CartStore operation                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CatalogError ──┐                                                      │
//! │  CoreError ─────┼──► CartError ──► Notifier ("Error adding product")   │
//! │  StorageError ──┘        │                                              │
//! │                          └──────► returned to caller (already shown)   │
//! │                                                                         │
//! │  Startup / CLI wiring failures ──► AppError ──► main (anyhow)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_catalog::CatalogError;
use storefront_core::{CoreError, ProductId};
use storefront_storage::StorageError;
use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Why a cart operation did not change the cart.
///
/// By the time a caller sees one of these the user has already been
/// notified; the value is there for logging and tests.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product has no line in the cart.
    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    /// The requested amount meets or exceeds the available stock.
    #[error("Requested {requested} of product {product_id}, only {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        available: u32,
        requested: u32,
    },

    /// A catalog lookup failed.
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    /// The new cart could not be written; memory was left untouched.
    #[error("Failed to persist cart: {0}")]
    Storage(#[from] StorageError),

    /// Input or catalog data broke a cart rule.
    #[error("Invalid cart data: {0}")]
    Invalid(CoreError),
}

impl From<CoreError> for CartError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotInCart(product_id) => CartError::NotInCart { product_id },
            CoreError::InsufficientStock {
                product_id,
                available,
                requested,
            } => CartError::OutOfStock {
                product_id,
                available,
                requested,
            },
            other => CartError::Invalid(other),
        }
    }
}

impl From<storefront_core::ValidationError> for CartError {
    fn from(err: storefront_core::ValidationError) -> Self {
        CartError::Invalid(CoreError::Validation(err))
    }
}

impl CartError {
    /// Returns true for the out-of-stock case.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

/// Result type for cart operations.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// App Error
// =============================================================================

/// Startup and wiring errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config file could not be written.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// No platform data directory and none configured.
    #[error("Could not determine a data directory; set storage.dir or STOREFRONT_DATA_DIR")]
    NoDataDir,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::ConfigSaveFailed(err.to_string())
    }
}

/// Result type for app wiring.
pub type AppResult<T> = Result<T, AppError>;
