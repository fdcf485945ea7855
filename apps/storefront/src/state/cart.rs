//! # Cart Store
//!
//! Owns the live cart, keeps it in sync with storage, and checks every
//! change against the catalog's stock.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  add_product(id) ──────────┐                                            │
//! │  remove_product(id) ───────┼──► lock ──► compute next cart              │
//! │  update_product_amount() ──┘              │                             │
//! │                                           ▼                             │
//! │                             catalog checks (product / stock)            │
//! │                                           │                             │
//! │                          ┌────────────────┴────────────────┐            │
//! │                          ▼                                 ▼            │
//! │                   rule violated                      next cart valid    │
//! │                   or lookup failed                           │          │
//! │                          │                       save to storage        │
//! │                          ▼                                 │            │
//! │                  Notifier::notify()            publish on watch channel │
//! │                  cart unchanged                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//! One async mutex serializes every mutation from the first cart read until
//! the new cart is published, so concurrent calls never lose updates. A cart
//! is published only after storage accepted it: a failed write leaves both
//! memory and storage at the previous cart.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_catalog::CatalogService;
use storefront_core::validation::validate_amount;
use storefront_core::{Cart, ProductId};
use storefront_storage::CartRepository;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::error::{CartError, CartResult};
use crate::state::notifier::{messages, Notification, Notifier};

/// Request to set a line's amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    /// Target amount. Values of zero or below are ignored.
    pub amount: i64,
}

/// The cart and the operations allowed on it.
pub struct CartStore {
    catalog: Arc<dyn CatalogService>,
    repository: CartRepository,
    notifier: Arc<dyn Notifier>,
    state_tx: watch::Sender<Cart>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("repository", &self.repository)
            .field("items", &self.state_tx.borrow().len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Creates the store, seeding the cart from storage.
    ///
    /// A missing or unreadable stored cart starts the store empty.
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        repository: CartRepository,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = repository.load();
        info!(key = repository.key(), items = cart.len(), "Cart store ready");

        let (state_tx, _) = watch::channel(cart);
        CartStore {
            catalog,
            repository,
            notifier,
            state_tx,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns a snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.state_tx.borrow().clone()
    }

    /// Subscribes to cart changes. The receiver starts at the current cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state_tx.subscribe()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// A product not yet in the cart is appended with amount 1; otherwise its
    /// amount grows by one. Either way the result must stay within stock.
    ///
    /// ## Notifications
    /// - out of stock: "Requested quantity out of stock" then "Error adding product"
    /// - any other failure: "Error adding product"
    pub async fn add_product(&self, product_id: ProductId) -> CartResult<()> {
        let _guard = self.write_lock.lock().await;
        debug!(product_id, "Adding product to cart");

        let result = self.try_add(product_id).await;
        if let Err(e) = &result {
            warn!(product_id, error = %e, "Add to cart failed");
            if e.is_out_of_stock() {
                self.notify(messages::OUT_OF_STOCK);
            }
            self.notify(messages::ADD_FAILED);
        }
        result
    }

    /// Removes a product's line.
    ///
    /// ## Notifications
    /// - product not in cart or save failed: "Error removing product"
    pub async fn remove_product(&self, product_id: ProductId) -> CartResult<()> {
        let _guard = self.write_lock.lock().await;
        debug!(product_id, "Removing product from cart");

        let result = self.try_remove(product_id);
        if let Err(e) = &result {
            warn!(product_id, error = %e, "Remove from cart failed");
            self.notify(messages::REMOVE_FAILED);
        }
        result
    }

    /// Sets a line's amount, bounded by stock.
    ///
    /// An amount of zero or below does nothing: no catalog call, no
    /// notification, no change. A product without a line in the cart is
    /// also left alone once its stock was fetched.
    ///
    /// ## Notifications
    /// - out of stock: "Requested quantity out of stock"
    /// - any other failure: "Error updating product quantity"
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> CartResult<()> {
        let UpdateProductAmount { product_id, amount } = request;
        if amount <= 0 {
            debug!(product_id, amount, "Ignoring non-positive amount");
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;
        debug!(product_id, amount, "Updating product amount");

        let result = self.try_update(product_id, amount).await;
        if let Err(e) = &result {
            warn!(product_id, amount, error = %e, "Amount update failed");
            if e.is_out_of_stock() {
                self.notify(messages::OUT_OF_STOCK);
            } else {
                self.notify(messages::UPDATE_FAILED);
            }
        }
        result
    }

    // =========================================================================
    // Internals (callers hold write_lock)
    // =========================================================================

    async fn try_add(&self, product_id: ProductId) -> CartResult<()> {
        let (product, stock) = tokio::try_join!(
            self.catalog.product(product_id),
            self.catalog.stock(product_id)
        )?;

        let mut next = self.cart();
        next.add_item(&product, &stock)?;
        self.commit(next)
    }

    fn try_remove(&self, product_id: ProductId) -> CartResult<()> {
        let mut next = self.cart();
        next.remove_item(product_id)?;
        self.commit(next)
    }

    async fn try_update(&self, product_id: ProductId, amount: i64) -> CartResult<()> {
        let amount = validate_amount(amount)?;
        let stock = self.catalog.stock(product_id).await?;

        let mut next = self.cart();
        if !next.set_amount(product_id, amount, &stock)? {
            debug!(product_id, "Product not in cart, nothing to update");
            return Ok(());
        }
        self.commit(next)
    }

    /// Saves `next`, then makes it the live cart.
    fn commit(&self, next: Cart) -> CartResult<()> {
        self.repository.save(&next)?;
        self.state_tx.send_replace(next);
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.notifier.notify(Notification::new(message));
    }
}
