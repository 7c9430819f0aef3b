//! # Notifications
//!
//! User-facing messages emitted by the cart store.
//!
//! The store never returns errors to its caller. Every rejected or failed
//! operation is reported once through a [`Notifier`]; the UI decides how to
//! show it (toast, banner, stderr line).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Notification       When                               Message          │
//! │  ────────────       ────                               ───────          │
//! │  OutOfStock         stock check rejected the request   fora de estoque  │
//! │  InvalidAmount      update with amount <= 0            alteração        │
//! │  AddFailed          lookup or storage fault on add     adição           │
//! │  UpdateFailed       lookup or storage fault on update  alteração        │
//! │  RemoveFailed       storage fault on remove            remoção          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use ts_rs::TS;

/// A user-facing warning.
///
/// ## Serialization
/// ```json
/// "OUT_OF_STOCK"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Notification {
    OutOfStock,
    InvalidAmount,
    AddFailed,
    UpdateFailed,
    RemoveFailed,
}

impl Notification {
    /// Message shown to the shopper.
    pub fn message(&self) -> &'static str {
        match self {
            Notification::OutOfStock => "Quantidade solicitada fora de estoque",
            Notification::InvalidAmount | Notification::UpdateFailed => {
                "Erro na alteração de quantidade do produto"
            }
            Notification::AddFailed => "Erro na adição do produto",
            Notification::RemoveFailed => "Erro na remoção do produto",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to stderr, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("! {}", notification.message());
    }
}
