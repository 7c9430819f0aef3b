//! # rocketshoes-core: Pure Cart Logic for RocketShoes
//!
//! This crate holds the cart value, its line items, and the money math used
//! to total them. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     RocketShoes Storefront                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront (CartStore + CLI)                    │   │
//! │  │   add_product, remove_product, update_product_amount            │   │
//! │  └──────────────┬──────────────────────┬───────────────────────────┘   │
//! │                 │                      │                                │
//! │  ┌──────────────▼──────────┐  ┌────────▼────────────────────────────┐  │
//! │  │  rocketshoes-storage    │  │  rocketshoes-api                    │  │
//! │  │  persisted cart slot    │  │  catalog + stock over HTTP          │  │
//! │  └──────────────┬──────────┘  └────────┬────────────────────────────┘  │
//! │                 │                      │                                │
//! │  ┌──────────────▼──────────────────────▼───────────────────────────┐   │
//! │  │               ★ rocketshoes-core (THIS CRATE) ★                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  amount   │  │   │
//! │  │   │   Stock   │  │           │  │ LineItem  │  │  price    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Stock, and the quantity update request
//! - [`money`] - Integer-cent money type
//! - [`cart`] - Immutable cart value and line items
//! - [`error`] - Domain error types
//! - [`validation`] - Amount, price, and name checks
//!
//! ## Example Usage
//!
//! ```rust
//! use rocketshoes_core::{Cart, Money, Product, ProductId};
//!
//! let product = Product {
//!     id: ProductId::new(1),
//!     name: "Tênis de Caminhada Leve Confortável".to_string(),
//!     price: Money::from_cents(17990),
//!     image_url: "https://example.com/tenis.jpg".to_string(),
//! };
//!
//! let cart = Cart::new().with_product_added(&product).unwrap();
//! let cart = cart.with_product_added(&product).unwrap();
//!
//! assert_eq!(cart.get(product.id).unwrap().amount, 2);
//! assert_eq!(cart.subtotal().unwrap().cents(), 35980);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Amount given to a product the first time it is added to the cart.
pub const NEW_ITEM_AMOUNT: i64 = 1;
