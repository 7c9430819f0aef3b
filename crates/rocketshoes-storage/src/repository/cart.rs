//! # Cart Repository
//!
//! Reads and writes the cart slot.
//!
//! ## Slot Format
//! A JSON array of line items, in cart order:
//! ```text
//! [
//!   {"id":1,"name":"Tênis ...","price":17990,"imageUrl":"https://...","amount":2},
//!   {"id":3,"name":"Tênis ...","price":13990,"imageUrl":"https://...","amount":1}
//! ]
//! ```
//! The whole array is rewritten on every save.

use std::fmt;
use std::sync::Arc;

use rocketshoes_core::Cart;
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};
use crate::store::KeyValueStore;

/// Repository for the persisted cart.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use rocketshoes_core::Cart;
/// use rocketshoes_storage::{CartRepository, MemoryStore};
///
/// let repo = CartRepository::new(Arc::new(MemoryStore::new()), "@RocketShoes:cart");
/// repo.save(&Cart::new()).unwrap();
/// assert!(repo.load().unwrap().is_empty());
/// ```
#[derive(Clone)]
pub struct CartRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        CartRepository {
            store,
            key: key.into(),
        }
    }

    /// The slot key this repository reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the cart. An empty slot yields an empty cart.
    ///
    /// ## Errors
    /// - `Io` if the backing store cannot be read
    /// - `Corrupt` if the slot is not a valid line item array
    pub fn load(&self) -> StorageResult<Cart> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "Cart slot empty");
            return Ok(Cart::new());
        };

        let cart: Cart =
            serde_json::from_str(&raw).map_err(|e| StorageError::corrupt(&self.key, e))?;

        debug!(key = %self.key, items = cart.len(), "Cart loaded");
        Ok(cart)
    }

    /// Loads the cart, falling back to an empty one when the slot cannot be
    /// read or decoded. Used at startup so a bad slot never blocks the app.
    pub fn hydrate(&self) -> Cart {
        match self.load() {
            Ok(cart) => cart,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable cart slot");
                Cart::new()
            }
        }
    }

    /// Overwrites the slot with `cart`.
    pub fn save(&self, cart: &Cart) -> StorageResult<()> {
        let raw = serde_json::to_string(cart).map_err(|e| StorageError::Serialization {
            key: self.key.clone(),
            source: e,
        })?;

        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, items = cart.len(), "Cart saved");
        Ok(())
    }
}

impl fmt::Debug for CartRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartRepository")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
