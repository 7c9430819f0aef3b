//! # rocketshoes-storage: Persistent Cart Slot for RocketShoes
//!
//! This crate keeps the cart alive across restarts. It exposes a small
//! key-value port modelled on browser local storage and a repository that
//! encodes the cart into one named slot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     RocketShoes Data Flow                               │
//! │                                                                         │
//! │  CartStore::add_product (storefront)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                rocketshoes-storage (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │ KeyValueStore │    │  Repositories  │    │   Adapters   │  │   │
//! │  │   │  (store.rs)   │◄───│   (cart.rs)    │    │              │  │   │
//! │  │   │               │    │                │    │ MemoryStore  │  │   │
//! │  │   │ get/set/remove│    │ CartRepository │    │ FileStore    │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/rocketshoes/_RocketShoes_cart.json                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `KeyValueStore` port and `MemoryStore`
//! - [`file`] - Directory-backed `FileStore`
//! - [`error`] - Storage error types
//! - [`repository`] - Typed slot access (`CartRepository`)

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use repository::cart::CartRepository;
pub use store::{KeyValueStore, MemoryStore};

/// Slot key the cart is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
