//! # Validation Module
//!
//! Input validation for cart operations and for data read back from storage
//! or the catalog.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  UI input (amount field, +/- buttons)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore: amount ≤ 0 is dropped silently before any lookup           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: amount range, price format, line-item shape              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cart: stock limit, uniqueness by product id                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{LineItem, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested cart amount and narrows it to `u32`.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit in `u32`
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_amount;
///
/// assert_eq!(validate_amount(3).unwrap(), 3);
/// assert!(validate_amount(0).is_err());
/// assert!(validate_amount(-2).is_err());
/// ```
pub fn validate_amount(amount: i64) -> ValidationResult<u32> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    u32::try_from(amount).map_err(|_| ValidationError::OutOfRange {
        field: "amount".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

/// Validates a catalog price.
///
/// Any finite number is accepted; the catalog owns pricing.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a product before it becomes a cart line.
///
/// The catalog is trusted for titles and images; only a price that cannot
/// be turned into [`Money`](crate::money::Money) is refused.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_price(product.price)
}

/// Validates a line item read back from storage.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    if item.amount == 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    validate_price(item.price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(1), Ok(1));
        assert_eq!(validate_amount(999), Ok(999));

        assert!(validate_amount(0).is_err());
        assert!(validate_amount(-1).is_err());
        assert!(matches!(
            validate_amount(i64::from(u32::MAX) + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(179.9).is_ok());
        assert!(validate_price(-1.0).is_ok());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_product() {
        let mut product = Product {
            id: 1,
            title: "Sneaker".to_string(),
            price: 10.0,
            image_url: String::new(),
        };
        assert!(validate_product(&product).is_ok());

        product.title = String::new();
        assert!(validate_product(&product).is_ok());

        product.price = f64::NAN;
        assert!(matches!(
            validate_product(&product),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_line_item() {
        let mut item = LineItem {
            id: 1,
            title: "Sneaker".to_string(),
            price: 10.0,
            image_url: String::new(),
            amount: 1,
        };
        assert!(validate_line_item(&item).is_ok());

        item.amount = 0;
        assert!(validate_line_item(&item).is_err());
    }
}
