//! # State Module
//!
//! Long-lived state of the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │          CartStore           │  │         StoreConfig          │    │
//! │  │                              │  │                              │    │
//! │  │  Mutex<Cart>                 │  │  api url, timeout            │    │
//! │  │  Arc<dyn ProductCatalog>     │  │  storage key, data dir       │    │
//! │  │  Arc<dyn StockChecker>       │  │  stock policy                │    │
//! │  │  CartRepository              │  │  currency formatting         │    │
//! │  │  Arc<dyn Notifier>           │  │                              │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: short Mutex sections, never held across .await           │
//! │  • StoreConfig: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
#[cfg(test)]
pub(crate) mod testing;

pub use cart::{CartStore, StockPolicy};
pub use config::{ConfigError, StoreConfig};
