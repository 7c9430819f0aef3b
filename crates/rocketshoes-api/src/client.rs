//! # HTTP Client
//!
//! `reqwest` implementation of [`ProductCatalog`] and [`StockChecker`].
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base_url = http://localhost:3333/                                      │
//! │                                                                         │
//! │  ProductCatalog::product(1) ──► GET {base}/products/1                   │
//! │  StockChecker::stock(1) ──────► GET {base}/stock/1                      │
//! │                                                                         │
//! │  200 → decode body      404 → NotFound      other → Status              │
//! │  A body for another product id is a Decode error.                       │
//! │  Every request carries the configured timeout; there are no retries.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use rocketshoes_core::{Product, ProductId, Stock};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::dto::{check_id, ProductDto, StockDto};
use crate::error::{ApiError, ApiResult};
use crate::ports::{ProductCatalog, StockChecker};

// =============================================================================
// Configuration
// =============================================================================

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend connection settings.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use rocketshoes_api::ApiConfig;
///
/// let config = ApiConfig::new("http://localhost:3333")
///     .unwrap()
///     .timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url.as_str(), "http://localhost:3333/");
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, always ending in `/` so relative joins append.
    pub base_url: Url,

    /// Per-request timeout.
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let mut url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{} cannot be a base", base_url)));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(ApiConfig {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Client
// =============================================================================

/// Backend client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{resource}/{id}`
    pub fn endpoint(&self, resource: &str, id: ProductId) -> ApiResult<Url> {
        Ok(self.base_url.join(&format!("{}/{}", resource, id))?)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        id: ProductId,
    ) -> ApiResult<T> {
        let url = self.endpoint(path, id)?;
        debug!(url = %url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { resource, id });
        }
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Backend returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::decode(resource, e))
    }
}

#[async_trait]
impl ProductCatalog for ApiClient {
    async fn product(&self, id: ProductId) -> ApiResult<Product> {
        let dto: ProductDto = self.fetch("product", "products", id).await?;
        check_id("product", id, dto.id)?;
        Product::try_from(dto)
    }
}

#[async_trait]
impl StockChecker for ApiClient {
    async fn stock(&self, id: ProductId) -> ApiResult<Stock> {
        let dto: StockDto = self.fetch("stock", "stock", id).await?;
        check_id("stock", id, dto.id)?;
        Stock::try_from(dto)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
