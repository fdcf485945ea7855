//! # storefront-storage: Durable Local Storage for the Cart
//!
//! The cart survives restarts by living in one key-value slot on the device,
//! the same way a browser front-end keeps it in local storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Persistence Flow                            │
//! │                                                                         │
//! │  CartStore (startup)             CartStore (after each mutation)        │
//! │       │ load()                        │ save(&new_cart)                 │
//! │       ▼                               ▼                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-storage (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐        ┌───────────────────────────────┐  │   │
//! │  │   │ CartRepository │───────►│ dyn KeyValueStore             │  │   │
//! │  │   │ JSON + checks  │        │  ├── FileStore  (one file/key) │  │   │
//! │  │   └────────────────┘        │  └── MemoryStore (tests)       │  │   │
//! │  │                             └───────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/storefront/_storefront_cart.json                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The key-value slot trait and its implementations
//! - [`repository`] - Loading and saving the cart under its key
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_storage::{CartRepository, FileStore};
//!
//! let store = Arc::new(FileStore::new("/var/lib/storefront"));
//! let repo = CartRepository::new(store, storefront_core::DEFAULT_CART_KEY);
//!
//! let cart = repo.load();
//! repo.save(&cart)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use repository::CartRepository;
pub use store::file::FileStore;
pub use store::memory::MemoryStore;
pub use store::KeyValueStore;
