//! # storefront-core: Pure Cart Logic for the Storefront
//!
//! This crate holds the cart rules as pure functions with zero I/O
//! dependencies. Fetching stock, writing local storage and showing toasts all
//! happen in the layers above.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Cart Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI consumers                                 │   │
//! │  │    Header badge ──► Product grid ──► Cart page                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    CartStore (apps/storefront)                  │   │
//! │  │    add_product, remove_product, update_product_amount           │   │
//! │  └──────────┬──────────────────┬───────────────────┬───────────────┘   │
//! │             │                  │                   │                    │
//! │  ┌──────────▼───────┐ ┌────────▼─────────┐ ┌───────▼──────────────┐    │
//! │  │ ★ storefront-core│ │ storefront-      │ │ storefront-catalog   │    │
//! │  │   (THIS CRATE)   │ │ storage          │ │ products + stock     │    │
//! │  │ Cart, LineItem,  │ │ local key-value  │ │ over HTTP            │    │
//! │  │ Money, rules     │ │ slot             │ │                      │    │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog and cart types (Product, Stock, LineItem)
//! - [`cart`] - The ordered cart and its stock-limited mutations
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Product, Stock};
//!
//! let product = Product {
//!     id: 1,
//!     title: "Running shoe".to_string(),
//!     price: 10.0,
//!     image_url: "https://example.com/shoe.jpg".to_string(),
//! };
//! let stock = Stock { id: 1, amount: 2 };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, &stock).unwrap();
//! cart.add_item(&product, &stock).unwrap();
//!
//! // A third unit would exceed the two in stock.
//! assert!(cart.add_item(&product, &stock).is_err());
//! assert_eq!(cart.total().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Local storage key the cart is persisted under.
///
/// The whole cart lives in this one slot; every successful mutation
/// overwrites it with the full JSON array of line items.
pub const DEFAULT_CART_KEY: &str = "@storefront:cart";
