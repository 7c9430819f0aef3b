//! # Validation Module
//!
//! Input validation for cart operations and catalog records.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Layer 1: UI quantity input                                             │
//! │  └── Sends whatever the user typed (may be 0 or negative)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CartStore::update_product_amount                              │
//! │  └── validate_amount() ← rejects before any network call                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog adapter                                               │
//! │  └── validate_product_name() / validate_price() on every payload        │
//! │                                                                         │
//! │  Layer 4: Cart::from_items (hydration)                                  │
//! │  └── validate_amount() on every persisted line item                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a line item amount.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use rocketshoes_core::validation::validate_amount;
///
/// assert!(validate_amount(1).is_ok());
/// assert!(validate_amount(0).is_err());
/// assert!(validate_amount(-3).is_err());
/// ```
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
            value: amount,
        });
    }

    Ok(())
}

/// Validates a catalog price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
            value: price.cents(),
        });
    }

    Ok(())
}

/// Validates a product display name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
