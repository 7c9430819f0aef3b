//! # Domain Types
//!
//! Types shared by the cart, the catalog adapter, and the UI.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐    │
//! │  │    Product      │   │     Stock       │   │ UpdateProductAmount │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │    │
//! │  │  id             │   │  id             │   │  product_id         │    │
//! │  │  name           │   │  amount (>= 0)  │   │  amount             │    │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────────┘    │
//! │  │  image_url      │                                                    │
//! │  └────────┬────────┘                                                    │
//! │           │ LineItem::from_product (amount = 1)                         │
//! │           ▼                                                             │
//! │  ┌─────────────────┐                                                    │
//! │  │    LineItem     │  (cart.rs)                                         │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog identifier of a product. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Product image shown next to the line item.
    pub image_url: String,
}

// =============================================================================
// Stock
// =============================================================================

/// Available inventory for a product, fetched per request and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stock {
    pub id: ProductId,

    /// Units available. Zero means out of stock.
    pub amount: i64,
}

impl Stock {
    #[inline]
    pub const fn new(id: ProductId, amount: i64) -> Self {
        Stock { id, amount }
    }

    /// True when anything at all is available.
    #[inline]
    pub const fn is_available(&self) -> bool {
        self.amount != 0
    }

    /// True when at least `requested` units are available.
    #[inline]
    pub const fn covers(&self, requested: i64) -> bool {
        self.amount >= requested
    }
}

// =============================================================================
// Update Request
// =============================================================================

/// Request to set a line item's amount, as issued by the quantity input.
///
/// `amount` is signed on purpose: the UI may send zero or negative values,
/// which are rejected by the store with an invalid-quantity notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
