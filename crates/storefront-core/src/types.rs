//! # Domain Types
//!
//! Catalog and cart types shared by every layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Stock      │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  title          │   │  amount         │   │  title, price   │       │
//! │  │  price          │   │  (available)    │   │  imageUrl       │       │
//! │  │  imageUrl       │   └─────────────────┘   │  amount (≥ 1)   │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  Product ──(amount: 1)──► LineItem      Stock bounds LineItem.amount   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All types serialize with camelCase field names. The catalog service sends
//! the image as `image`; it is accepted as an alias and always written back as
//! `imageUrl`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Catalog product identifier.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A product as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name shown on the product card and cart line.
    pub title: String,

    /// Unit price in major currency units, as sent by the catalog.
    pub price: f64,

    /// Product image location.
    #[serde(alias = "image")]
    pub image_url: String,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_price(self.price)
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Available quantity of a product, fetched per id and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart with its quantity.
///
/// ## Design Notes
/// The product fields are a snapshot taken when the product was first added.
/// Later catalog changes do not touch lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(alias = "image")]
    pub image_url: String,
    /// Quantity in cart, always at least 1.
    pub amount: u32,
}

impl LineItem {
    /// Creates a line item for a freshly added product (amount 1).
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            amount: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_price(self.price)
    }

    /// Calculates the line subtotal (unit price × amount).
    pub fn subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> Product {
        Product {
            id: 1,
            title: "Tênis de Caminhada".to_string(),
            price: 179.9,
            image_url: "https://example.com/1.jpg".to_string(),
        }
    }

    #[test]
    fn test_line_item_from_product() {
        let item = LineItem::from_product(&shoe());
        assert_eq!(item.id, 1);
        assert_eq!(item.amount, 1);
        assert_eq!(item.title, "Tênis de Caminhada");
    }

    #[test]
    fn test_line_item_subtotal() {
        let mut item = LineItem::from_product(&shoe());
        item.amount = 3;
        assert_eq!(item.subtotal().cents(), 53970);
    }

    #[test]
    fn test_catalog_image_alias() {
        let json = r#"{"id":2,"title":"Boot","price":99.5,"image":"https://example.com/2.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url, "https://example.com/2.jpg");

        let written = serde_json::to_string(&LineItem::from_product(&product)).unwrap();
        assert!(written.contains(r#""imageUrl":"https://example.com/2.jpg""#));
        assert!(written.contains(r#""amount":1"#));
    }
}
