//! # Cart Error Type
//!
//! Internal error type of the cart store and its mapping to notifications.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Cart Store                         │
//! │                                                                         │
//! │  try_add_product / try_update / try_remove                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Stock says no? ──────── CartError::OutOfStock ─────┐                   │
//! │  amount <= 0? ────────── CartError::InvalidAmount ──┤                   │
//! │  ApiError? ───────────── CartError::Catalog/Stock ──┤                   │
//! │  StorageError? ───────── CartError::Storage ────────┤                   │
//! │                                                     ▼                   │
//! │                         CartError::notification(Operation)              │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                         Notifier::notify ──► UI     (details → logs)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocketshoes_api::ApiError;
use rocketshoes_core::{CoreError, ProductId};
use rocketshoes_storage::StorageError;
use thiserror::Error;

use crate::notify::Notification;

/// Why a cart operation did not apply.
#[derive(Debug, Error)]
pub enum CartError {
    /// Stock check rejected the request.
    #[error("Product {0} is out of stock")]
    OutOfStock(ProductId),

    /// Requested amount is zero or negative.
    #[error("Invalid amount {amount} for product {product_id}")]
    InvalidAmount { product_id: ProductId, amount: i64 },

    /// Product details could not be fetched.
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[source] ApiError),

    /// Stock level could not be fetched.
    #[error("Stock lookup failed: {0}")]
    Stock(#[source] ApiError),

    /// The new cart could not be persisted.
    #[error("Failed to persist cart: {0}")]
    Storage(#[from] StorageError),

    /// A cart rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for cart store internals.
pub type CartResult<T> = Result<T, CartError>;

/// The public store operation an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Remove,
}

impl CartError {
    /// Maps the error to the notification shown for `operation`.
    ///
    /// ## Mapping
    /// ```text
    /// OutOfStock                  → OutOfStock
    /// InvalidAmount / Validation  → InvalidAmount
    /// anything else               → AddFailed / UpdateFailed / RemoveFailed
    /// ```
    pub fn notification(&self, operation: Operation) -> Notification {
        match self {
            CartError::OutOfStock(_) => Notification::OutOfStock,
            CartError::InvalidAmount { .. } | CartError::Core(CoreError::Validation(_)) => {
                Notification::InvalidAmount
            }
            _ => match operation {
                Operation::Add => Notification::AddFailed,
                Operation::Update => Notification::UpdateFailed,
                Operation::Remove => Notification::RemoveFailed,
            },
        }
    }

    /// True for expected rejections; false for faults worth an `error!`.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CartError::OutOfStock(_) | CartError::InvalidAmount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocketshoes_core::ValidationError;

    fn storage_error() -> CartError {
        CartError::Storage(StorageError::io(
            "@RocketShoes:cart",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        ))
    }

    #[test]
    fn test_rejections_keep_their_notification() {
        let id = ProductId::new(1);
        for op in [Operation::Add, Operation::Update, Operation::Remove] {
            assert_eq!(
                CartError::OutOfStock(id).notification(op),
                Notification::OutOfStock
            );
        }

        let err = CartError::InvalidAmount {
            product_id: id,
            amount: 0,
        };
        assert_eq!(err.notification(Operation::Update), Notification::InvalidAmount);
        assert!(err.is_rejection());
    }

    #[test]
    fn test_faults_map_to_generic_failure() {
        assert_eq!(
            storage_error().notification(Operation::Add),
            Notification::AddFailed
        );
        assert_eq!(
            storage_error().notification(Operation::Update),
            Notification::UpdateFailed
        );
        assert_eq!(
            storage_error().notification(Operation::Remove),
            Notification::RemoveFailed
        );

        let catalog = CartError::Catalog(ApiError::NotFound {
            resource: "product",
            id: ProductId::new(9),
        });
        assert_eq!(catalog.notification(Operation::Add), Notification::AddFailed);
        assert!(!catalog.is_rejection());
    }

    #[test]
    fn test_core_validation_is_invalid_amount() {
        let err = CartError::from(CoreError::from(ValidationError::MustBePositive {
            field: "amount".to_string(),
            value: -1,
        }));
        assert_eq!(err.notification(Operation::Update), Notification::InvalidAmount);
    }
}
