//! # Cart Repository
//!
//! Reads and writes the cart under its storage key.
//!
//! ## Startup Load
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    load()                                               │
//! │                                                                         │
//! │  slot empty ─────────────────────────────────► Cart::new()              │
//! │  slot unreadable ─────────────── warn! ──────► Cart::new()              │
//! │  not JSON / wrong shape ──────── warn! ──────► Cart::new()              │
//! │  duplicate ids / amount 0 ────── warn! ──────► Cart::new()              │
//! │  valid ──────────────────────────────────────► stored cart              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Bad content is not overwritten at load time; the next successful mutation
//! replaces it.

use std::sync::Arc;

use storefront_core::{Cart, LineItem};
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};
use crate::store::KeyValueStore;

/// Repository for the persisted cart.
#[derive(Clone)]
pub struct CartRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for CartRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartRepository")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl CartRepository {
    /// Creates a repository over `store`, using `key` as the cart slot.
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        CartRepository {
            store,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads and validates the stored cart.
    ///
    /// ## Returns
    /// * `Ok(Some(cart))` - a valid cart was stored
    /// * `Ok(None)` - nothing stored yet
    /// * `Err(StorageError::Corrupt)` - stored content is not a valid cart
    pub fn try_load(&self) -> StorageResult<Option<Cart>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        let items: Vec<LineItem> =
            serde_json::from_str(&raw).map_err(|e| self.corrupt(e))?;
        let cart = Cart::from_items(items).map_err(|e| self.corrupt(e))?;

        Ok(Some(cart))
    }

    /// Loads the stored cart, falling back to an empty cart.
    pub fn load(&self) -> Cart {
        match self.try_load() {
            Ok(Some(cart)) => {
                debug!(key = %self.key, items = cart.len(), "Cart loaded from storage");
                cart
            }
            Ok(None) => {
                debug!(key = %self.key, "No stored cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding stored cart");
                Cart::new()
            }
        }
    }

    /// Overwrites the slot with the full cart.
    pub fn save(&self, cart: &Cart) -> StorageResult<()> {
        let json = serde_json::to_string(cart)?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, items = cart.len(), "Cart saved");
        Ok(())
    }

    fn corrupt(&self, reason: impl ToString) -> StorageError {
        StorageError::Corrupt {
            key: self.key.clone(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::file::FileStore;
    use crate::store::memory::MemoryStore;
    use storefront_core::{Product, Stock, DEFAULT_CART_KEY};

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let product = Product {
            id: 1,
            title: "Sneaker".to_string(),
            price: 139.9,
            image_url: "https://example.com/1.jpg".to_string(),
        };
        cart.add_item(&product, &Stock { id: 1, amount: 3 }).unwrap();
        cart
    }

    #[test]
    fn test_empty_slot_loads_empty_cart() {
        let repo = CartRepository::new(Arc::new(MemoryStore::new()), DEFAULT_CART_KEY);
        assert_eq!(repo.try_load().unwrap(), None);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_saved_content_equals_serialized_cart() {
        let store = Arc::new(MemoryStore::new());
        let repo = CartRepository::new(store.clone(), DEFAULT_CART_KEY);
        let cart = sample_cart();

        repo.save(&cart).unwrap();

        let raw = store.get(DEFAULT_CART_KEY).unwrap().unwrap();
        assert_eq!(raw, serde_json::to_string(&cart).unwrap());
        assert_eq!(repo.load(), cart);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let store = Arc::new(MemoryStore::with_value(DEFAULT_CART_KEY, "{not json"));
        let repo = CartRepository::new(store, DEFAULT_CART_KEY);

        assert!(matches!(repo.try_load(), Err(StorageError::Corrupt { .. })));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let store = Arc::new(MemoryStore::with_value(DEFAULT_CART_KEY, r#"{"items":[]}"#));
        let repo = CartRepository::new(store, DEFAULT_CART_KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_duplicate_ids_fall_back() {
        let item = r#"{"id":1,"title":"A","price":1.0,"imageUrl":"x","amount":1}"#;
        let store = Arc::new(MemoryStore::with_value(
            DEFAULT_CART_KEY,
            format!("[{},{}]", item, item),
        ));
        let repo = CartRepository::new(store, DEFAULT_CART_KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let cart = sample_cart();

        {
            let repo = CartRepository::new(Arc::new(FileStore::new(dir.path())), DEFAULT_CART_KEY);
            repo.save(&cart).unwrap();
        }

        let repo = CartRepository::new(Arc::new(FileStore::new(dir.path())), DEFAULT_CART_KEY);
        assert_eq!(repo.load(), cart);
    }
}
