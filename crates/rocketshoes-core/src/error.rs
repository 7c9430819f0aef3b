//! # Error Types
//!
//! Error types for rocketshoes-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rocketshoes-core errors (this file)                                    │
//! │  ├── CoreError        - Cart rule violations                            │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  rocketshoes-storage  └── StorageError  - Slot read/write failures      │
//! │  rocketshoes-api      └── ApiError      - Catalog / stock failures      │
//! │                                                                         │
//! │  storefront app       └── CartError     - Mapped to a Notification      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → Notification → UI      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The product has no line item in the cart.
    ///
    /// ## When This Occurs
    /// - An increment races with a removal of the same product
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(ProductId),

    /// Two line items share a product id.
    ///
    /// ## When This Occurs
    /// - A persisted slot was edited by hand or written by an older build
    #[error("Duplicate line item for product {0}")]
    DuplicateLineItem(ProductId),

    /// Incrementing the amount would overflow.
    #[error("Amount overflow for product {0}")]
    AmountOverflow(ProductId),

    /// A money sum or product overflowed.
    #[error("Arithmetic overflow in money calculation")]
    MoneyOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: i64 },

    /// Invalid format (e.g. a non-finite price).
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
