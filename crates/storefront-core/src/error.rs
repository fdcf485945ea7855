//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-storage  └── StorageError  - local slot failures           │
//! │  storefront-catalog  └── CatalogError  - HTTP / decode failures        │
//! │                                                                         │
//! │  apps/storefront     └── CartError     - what the notifier reports     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → Notification          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
///
/// These never reach the user verbatim; the cart store maps each one to a
/// fixed toast message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The product has no line item in the cart.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added
    /// - Updating the amount of a product that was never added
    #[error("Product {0} is not in the cart")]
    ProductNotInCart(ProductId),

    /// The requested amount would meet or exceed what is in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "+" on a cart line (amount 5)
    ///      │
    ///      ▼
    /// Check stock: available=5
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 1, available: 5, requested: 6 }
    ///      │
    ///      ▼
    /// Toast: "Requested quantity out of stock"
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: u32,
        requested: u32,
    },

    /// Two line items share one product id.
    #[error("Product {0} appears more than once in the cart")]
    DuplicateLineItem(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a price that is not a finite number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
