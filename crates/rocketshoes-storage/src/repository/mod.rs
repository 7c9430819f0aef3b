//! # Repository Module
//!
//! Typed access to the slots held by a [`KeyValueStore`](crate::KeyValueStore).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore                                                              │
//! │       │  repo.save(&cart)                                               │
//! │       ▼                                                                 │
//! │  CartRepository ── serde_json ──► "[{...},{...}]"                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  KeyValueStore (MemoryStore / FileStore)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CartRepository`](cart::CartRepository) - The persisted cart slot

pub mod cart;
