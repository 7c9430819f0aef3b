//! # Cart Commands
//!
//! CLI subcommands for cart manipulation, and the view printed after each.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  rocketshoes add 1 ───────────► CartStore::add_product(1)               │
//! │  rocketshoes update 1 3 ──────► CartStore::update_product_amount(1, 3)  │
//! │  rocketshoes remove 1 ────────► CartStore::remove_product(1)            │
//! │  rocketshoes show ────────────► CartStore::cart()                       │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                              CartView { items, totals }                 │
//! │                                      │                                  │
//! │                       ┌──────────────┴──────────────┐                   │
//! │                       ▼                             ▼                   │
//! │                 render() (text)            serde_json (--json)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use clap::Subcommand;
use rocketshoes_core::{Cart, CartTotals, CoreResult, LineItem, ProductId, UpdateProductAmount};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::state::{CartStore, StoreConfig};

/// Cart subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CartCommand {
    /// Show the cart
    Show,

    /// Add one unit of a product
    Add { product_id: u32 },

    /// Remove a product from the cart
    Remove { product_id: u32 },

    /// Set the amount of a product already in the cart
    Update {
        product_id: u32,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

/// Cart snapshot with totals, as shown to the shopper.
///
/// ## Serialization
/// ```json
/// {
///   "items": [{ "id": 1, "name": "...", "price": 17990, "imageUrl": "...", "amount": 2 }],
///   "totals": { "itemCount": 1, "totalAmount": 2, "subtotal": 35980 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> CoreResult<Self> {
        Ok(CartView {
            items: cart.items().to_vec(),
            totals: cart.totals()?,
        })
    }
}

/// Runs one subcommand against the store and returns the resulting cart.
pub async fn execute(store: &CartStore, command: CartCommand) -> Cart {
    debug!(?command, "Executing cart command");

    match command {
        CartCommand::Show => store.cart(),
        CartCommand::Add { product_id } => store.add_product(ProductId::new(product_id)).await,
        CartCommand::Remove { product_id } => store.remove_product(ProductId::new(product_id)),
        CartCommand::Update { product_id, amount } => {
            store
                .update_product_amount(UpdateProductAmount {
                    product_id: ProductId::new(product_id),
                    amount,
                })
                .await
        }
    }
}

/// Renders the view as a plain-text table.
pub fn render(view: &CartView, config: &StoreConfig) -> String {
    if view.items.is_empty() {
        return "Carrinho vazio\n".to_string();
    }

    let mut out = String::new();
    for item in &view.items {
        let line_total = item
            .line_total()
            .map(|total| config.format_currency(total.cents()))
            .unwrap_or_else(|_| "-".to_string());

        let _ = writeln!(
            out,
            "{:>4}  {:<40} {:>4} x {:>14} = {:>14}",
            item.id.get(),
            item.name,
            item.amount,
            config.format_currency(item.price.cents()),
            line_total
        );
    }

    let _ = writeln!(
        out,
        "{} produto(s), {} unidade(s), subtotal {}",
        view.totals.item_count,
        view.totals.total_amount,
        config.format_currency(view.totals.subtotal.cents())
    );
    out
}
