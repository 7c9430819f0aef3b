//! # rocketshoes-api: Backend Adapters for RocketShoes
//!
//! Product details and stock levels come from the storefront backend. This
//! crate defines the two ports the cart store consumes and a `reqwest`
//! client that implements them.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CartStore::add_product(id)                                             │
//! │       │                                                                 │
//! │       ├──► StockChecker::stock(id)      GET /stock/{id}                 │
//! │       │         └── StockDto ──► Stock                                  │
//! │       │                                                                 │
//! │       └──► ProductCatalog::product(id)  GET /products/{id}              │
//! │                 └── ProductDto ──► Product (price → cents, validated)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ports`] - `ProductCatalog` and `StockChecker` traits
//! - [`client`] - `ApiClient` and `ApiConfig`
//! - [`dto`] - Wire payloads
//! - [`error`] - API error types

pub mod client;
pub mod dto;
pub mod error;
pub mod ports;

pub use client::{ApiClient, ApiConfig, DEFAULT_TIMEOUT};
pub use dto::check_id;
pub use error::{ApiError, ApiResult};
pub use ports::{ProductCatalog, StockChecker};
