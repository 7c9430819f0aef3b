//! # Ports
//!
//! Async traits the cart store depends on. `ApiClient` implements both;
//! tests substitute in-memory fakes.

use async_trait::async_trait;
use rocketshoes_core::{Product, ProductId, Stock};

use crate::error::ApiResult;

/// Looks up product details for a new line item.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product(&self, id: ProductId) -> ApiResult<Product>;
}

/// Reports available inventory. Results are never cached.
#[async_trait]
pub trait StockChecker: Send + Sync {
    async fn stock(&self, id: ProductId) -> ApiResult<Stock>;
}
