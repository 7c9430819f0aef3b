//! # Storage Error Types
//!
//! Error types for slot reads and writes.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds the slot key as context              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError (storefront) ← Mapped to a generic failure notification      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Slot operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    ///
    /// ## When This Occurs
    /// - Data directory missing and not creatable
    /// - File permissions issue
    /// - Disk full
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the cart to JSON failed.
    #[error("Failed to serialize '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The slot holds data that is not a valid cart.
    ///
    /// ## When This Occurs
    /// - Slot edited by hand
    /// - Truncated write from an earlier crash
    /// - Duplicate ids or zero amounts in the persisted array
    #[error("Slot '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

impl StorageError {
    /// Creates an Io error for the given slot key.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a Corrupt error for the given slot key.
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_key() {
        let err = StorageError::corrupt("@RocketShoes:cart", "expected array");
        assert_eq!(
            err.to_string(),
            "Slot '@RocketShoes:cart' is corrupt: expected array"
        );

        let err = StorageError::io(
            "cart",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("Storage I/O failed for 'cart'"));
    }
}
