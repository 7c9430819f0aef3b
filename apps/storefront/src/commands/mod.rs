//! # Commands Module
//!
//! Command-line entry points that drive the cart store.

pub mod cart;

pub use cart::{execute, render, CartCommand, CartView};
