//! # API Error Types
//!
//! Error types for catalog and stock lookups.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidUrl     │  │  Http           │  │  Decode                 │ │
//! │  │                 │  │  Status         │  │                         │ │
//! │  │                 │  │  NotFound       │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocketshoes_core::{ProductId, ValidationError};
use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend lookup failures.
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Base URL could not be parsed or joined.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error: {status} from {url}")]
    Status { status: u16, url: String },

    /// Backend answered 404 for the requested record.
    #[error("{resource} {id} not found")]
    NotFound {
        resource: &'static str,
        id: ProductId,
    },

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Body was not the expected shape or failed validation.
    #[error("Failed to decode {resource}: {reason}")]
    Decode {
        resource: &'static str,
        reason: String,
    },
}

impl ApiError {
    pub fn decode(resource: &'static str, reason: impl ToString) -> Self {
        ApiError::Decode {
            resource,
            reason: reason.to_string(),
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::decode("product", err)
    }
}
