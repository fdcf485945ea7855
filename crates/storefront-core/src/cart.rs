//! # Cart
//!
//! The ordered list of line items and its stock-limited mutations.
//!
//! ## Mutations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutations                                       │
//! │                                                                         │
//! │  add_item(product, stock)                                              │
//! │    ├── already in cart, amount < stock ──► amount += 1                 │
//! │    ├── already in cart, amount ≥ stock ──► InsufficientStock           │
//! │    ├── new, stock ≥ 1 ─────────────────► push (amount 1)               │
//! │    └── new, stock = 0 ─────────────────► InsufficientStock             │
//! │                                                                         │
//! │  set_amount(id, amount, stock)                                         │
//! │    ├── not in cart ────────────────────► Ok(false), nothing changes    │
//! │    ├── amount < stock ─────────────────► amount = n                    │
//! │    └── amount ≥ stock ─────────────────► InsufficientStock             │
//! │                                                                         │
//! │  remove_item(id)                                                       │
//! │    ├── not in cart ────────────────────► ProductNotInCart              │
//! │    └── in cart ────────────────────────► retain others (order kept)    │
//! │                                                                         │
//! │  Every error leaves the cart untouched.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the asymmetry: adding one unit may reach the stock amount exactly,
//! while setting an explicit amount must stay strictly below it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, Product, ProductId, Stock};
use crate::validation::{validate_line_item, validate_product};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases its amount)
/// - Every amount is at least 1
/// - Insertion order is the order products were first added
///
/// Serializes as a bare JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from stored line items, checking every invariant.
    pub fn from_items(items: Vec<LineItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_line_item(item)?;
            if !seen.insert(item.id) {
                return Err(CoreError::DuplicateLineItem(item.id));
            }
        }
        Ok(Cart { items })
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the line item for a product, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Checks whether a product has a line in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Adds one unit of a product, bounded by its stock.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: amount increases by 1
    /// - If not: appended as a new line with amount 1
    pub fn add_item(&mut self, product: &Product, stock: &Stock) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            if item.amount >= stock.amount {
                return Err(CoreError::InsufficientStock {
                    product_id: product.id,
                    available: stock.amount,
                    requested: item.amount.saturating_add(1),
                });
            }
            item.amount += 1;
            return Ok(());
        }

        if stock.amount < 1 {
            return Err(CoreError::InsufficientStock {
                product_id: product.id,
                available: stock.amount,
                requested: 1,
            });
        }

        validate_product(product)?;
        self.items.push(LineItem::from_product(product));
        Ok(())
    }

    /// Sets the amount of a line already in the cart.
    ///
    /// The requested amount must stay strictly below the stock amount.
    /// Returns `false` when no line matches `product_id`; the cart is left
    /// as it was and no stock check applies.
    pub fn set_amount(&mut self, product_id: ProductId, amount: u32, stock: &Stock) -> CoreResult<bool> {
        let Some(item) = self.items.iter_mut().find(|i| i.id == product_id) else {
            return Ok(false);
        };

        if amount >= stock.amount {
            return Err(CoreError::InsufficientStock {
                product_id,
                available: stock.amount,
                requested: amount,
            });
        }

        item.amount = amount;
        Ok(true)
    }

    /// Removes a line from the cart, returning it.
    pub fn remove_item(&mut self, product_id: ProductId) -> CoreResult<LineItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == product_id)
            .ok_or(CoreError::ProductNotInCart(product_id))?;

        Ok(self.items.remove(index))
    }

    /// Returns the number of distinct line items (header badge).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.amount)).sum()
    }

    /// Maps each product id to its amount in the cart (product grid badges).
    pub fn amounts_by_id(&self) -> BTreeMap<ProductId, u32> {
        self.items.iter().map(|i| (i.id, i.amount)).collect()
    }

    /// Sums the line subtotals.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            image_url: format!("https://example.com/{}.jpg", id),
        }
    }

    fn stock(id: ProductId, amount: u32) -> Stock {
        Stock { id, amount }
    }

    #[test]
    fn test_add_distinct_products_keeps_order() {
        let mut cart = Cart::new();
        for id in [3, 1, 2] {
            cart.add_item(&product(id, 10.0), &stock(id, 5)).unwrap();
        }

        let ids: Vec<_> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(cart.items().iter().all(|i| i.amount == 1));
    }

    #[test]
    fn test_add_same_product_until_stock() {
        let mut cart = Cart::new();
        let p = product(1, 10.0);
        let s = stock(1, 5);

        for _ in 0..5 {
            cart.add_item(&p, &s).unwrap();
        }
        assert_eq!(cart.get(1).map(|i| i.amount), Some(5));

        let before = cart.clone();
        let err = cart.add_item(&p, &s).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                product_id: 1,
                available: 5,
                requested: 6
            }
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_with_zero_stock_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_item(&product(1, 10.0), &stock(1, 0)).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { requested: 1, .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_amount_strictly_below_stock() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 10.0), &stock(1, 5)).unwrap();

        assert!(cart.set_amount(1, 4, &stock(1, 5)).unwrap());
        assert_eq!(cart.get(1).map(|i| i.amount), Some(4));

        let err = cart.set_amount(1, 5, &stock(1, 5)).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { requested: 5, .. }));
        assert_eq!(cart.get(1).map(|i| i.amount), Some(4));
    }

    #[test]
    fn test_set_amount_missing_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 10.0), &stock(1, 5)).unwrap();
        let before = cart.clone();

        assert_eq!(cart.set_amount(9, 2, &stock(9, 5)), Ok(false));
        // No stock check for a line that does not exist.
        assert_eq!(cart.set_amount(9, 7, &stock(9, 5)), Ok(false));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_accepts_catalog_data_as_is() {
        let mut cart = Cart::new();
        let untitled = Product {
            id: 3,
            title: String::new(),
            price: 5.0,
            image_url: String::new(),
        };
        cart.add_item(&untitled, &stock(3, 5)).unwrap();
        cart.add_item(&product(4, -2.5), &stock(4, 5)).unwrap();

        assert_eq!(cart.get(3).map(|i| i.title.as_str()), Some(""));
        assert_eq!(cart.total().cents(), 500 - 250);

        // Still loadable after a save.
        let back = Cart::from_items(cart.items().to_vec()).unwrap();
        assert_eq!(back, cart);

        let err = cart.add_item(&product(5, f64::NAN), &stock(5, 5)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_remove_item_preserves_order() {
        let mut cart = Cart::new();
        for id in [1, 2, 3] {
            cart.add_item(&product(id, 10.0), &stock(id, 5)).unwrap();
        }

        let removed = cart.remove_item(2).unwrap();
        assert_eq!(removed.id, 2);

        let ids: Vec<_> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(cart.remove_item(2), Err(CoreError::ProductNotInCart(2)));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 179.9), &stock(1, 5)).unwrap();
        cart.add_item(&product(1, 179.9), &stock(1, 5)).unwrap();
        cart.add_item(&product(2, 139.9), &stock(2, 5)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total().cents(), 17990 * 2 + 13990);

        let amounts = cart.amounts_by_id();
        assert_eq!(amounts.get(&1), Some(&2));
        assert_eq!(amounts.get(&2), Some(&1));
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 10.0), &stock(1, 5)).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));

        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_from_items_rejects_bad_data() {
        let item = LineItem::from_product(&product(1, 10.0));

        let dup = Cart::from_items(vec![item.clone(), item.clone()]);
        assert_eq!(dup, Err(CoreError::DuplicateLineItem(1)));

        let mut zero = item;
        zero.amount = 0;
        assert!(matches!(
            Cart::from_items(vec![zero]),
            Err(CoreError::Validation(_))
        ));
    }
}
