//! # Cart State
//!
//! The cart store: current cart, collaborators, and the three mutations.
//!
//! ## Thread Safety
//! The cart lives in a `Mutex` that is never held across an `.await`.
//! Each mutation does its network calls first, then takes the lock once to
//! recompute the new cart from the latest snapshot, persist it, and swap it
//! in. Two overlapping adds of the same product therefore both count.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  add_product(id)                                                        │
//! │    stock(id) ──► out? ──► OutOfStock                                    │
//! │    in cart? ──── no ───► catalog.product(id)                            │
//! │    ┌─ lock ─────────────────────────────────────────────────┐           │
//! │    │ cart.with_product_added / with_incremented             │           │
//! │    │ repository.save(new) ──► fail? ──► AddFailed           │           │
//! │    │ current = new                                          │           │
//! │    └────────────────────────────────────────────────────────┘           │
//! │                                                                         │
//! │  update_product_amount({id, amount})                                    │
//! │    amount <= 0 ──► InvalidAmount                                        │
//! │    stock(id) ──► out? ──► OutOfStock                                    │
//! │    lock: with_amount ──► absent? no-op ──► save ──► swap                │
//! │                                                                         │
//! │  remove_product(id)                                                     │
//! │    lock: without ──► absent? no-op ──► save ──► swap                    │
//! │                                                                         │
//! │  Every failure: notification + log; the returned cart is unchanged.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rocketshoes_api::{check_id, ProductCatalog, StockChecker};
use rocketshoes_core::{
    Cart, CartTotals, CoreResult, ProductId, Stock, UpdateProductAmount, NEW_ITEM_AMOUNT,
};
use rocketshoes_storage::CartRepository;
use tracing::{debug, error, info, warn};

use crate::error::{CartError, CartResult, Operation};
use crate::notify::Notifier;

// =============================================================================
// Stock Policy
// =============================================================================

/// How a stock level gates a requested amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockPolicy {
    /// Any non-zero stock allows the request, whatever the amount.
    #[default]
    AnyAvailable,

    /// Stock must cover the full requested amount.
    CoverRequested,
}

impl StockPolicy {
    pub fn allows(&self, stock: &Stock, requested: i64) -> bool {
        match self {
            StockPolicy::AnyAvailable => stock.is_available(),
            StockPolicy::CoverRequested => stock.is_available() && stock.covers(requested),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Shopping cart state with stock checks and persistence.
///
/// Built once by the composition root and shared as `Arc<CartStore>`.
/// None of the public operations return an error: failures are reported
/// through the [`Notifier`] and the current cart is returned unchanged.
///
/// `commit` calls the repository synchronously while holding the cart lock.
/// With a `FileStore` that is blocking file I/O on the calling task, which
/// suits the one-shot CLI. A long-lived async host should back the store with
/// a non-blocking `KeyValueStore` or drive mutations from `spawn_blocking`.
///
/// ## Usage
/// ```rust,ignore
/// let store = CartStore::new(catalog, stock, repository, notifier)
///     .with_stock_policy(StockPolicy::CoverRequested);
///
/// let cart = store.add_product(ProductId::new(1)).await;
/// ```
pub struct CartStore {
    cart: Mutex<Cart>,
    catalog: Arc<dyn ProductCatalog>,
    stock: Arc<dyn StockChecker>,
    repository: CartRepository,
    notifier: Arc<dyn Notifier>,
    policy: StockPolicy,
}

impl CartStore {
    /// Creates the store, hydrating the cart from `repository`.
    ///
    /// A missing slot gives an empty cart. So does an unreadable one, after
    /// a warning is logged.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        stock: Arc<dyn StockChecker>,
        repository: CartRepository,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = repository.hydrate();
        info!(
            key = repository.key(),
            items = cart.len(),
            "Cart store initialized"
        );

        CartStore {
            cart: Mutex::new(cart),
            catalog,
            stock,
            repository,
            notifier,
            policy: StockPolicy::default(),
        }
    }

    /// Sets the stock policy.
    pub fn with_stock_policy(mut self, policy: StockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the current cart.
    pub fn cart(&self) -> Cart {
        self.lock().clone()
    }

    /// Returns totals for the current cart.
    pub fn totals(&self) -> CoreResult<CartTotals> {
        self.lock().totals()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Out of stock: `OutOfStock` notification, cart unchanged
    /// - Already in cart: amount + 1
    /// - Not in cart: product fetched from the catalog, appended with amount 1
    /// - Lookup or storage failure: `AddFailed` notification, cart unchanged
    pub async fn add_product(&self, product_id: ProductId) -> Cart {
        debug!(%product_id, "add_product");

        match self.try_add_product(product_id).await {
            Ok(cart) => cart,
            Err(e) => self.fail(Operation::Add, product_id, e),
        }
    }

    /// Removes a product. Absent products are ignored silently.
    pub fn remove_product(&self, product_id: ProductId) -> Cart {
        debug!(%product_id, "remove_product");

        match self.commit(|cart| Ok(cart.without(product_id))) {
            Ok(cart) => cart,
            Err(e) => self.fail(Operation::Remove, product_id, e),
        }
    }

    /// Sets a product's amount.
    ///
    /// ## Behavior
    /// - `amount <= 0`: `InvalidAmount` notification, no update
    /// - Out of stock: `OutOfStock` notification, no update
    /// - Product not in cart: no update, nothing persisted
    /// - Lookup or storage failure: `UpdateFailed` notification
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Cart {
        let UpdateProductAmount { product_id, amount } = request;
        debug!(%product_id, amount, "update_product_amount");

        match self.try_update_product_amount(product_id, amount).await {
            Ok(cart) => cart,
            Err(e) => self.fail(Operation::Update, product_id, e),
        }
    }

    async fn try_add_product(&self, product_id: ProductId) -> CartResult<Cart> {
        let current = self.lock().get(product_id).map(|item| item.amount);
        let requested = current.map_or(NEW_ITEM_AMOUNT, |amount| amount.saturating_add(1));

        if !self.has_stock(product_id, requested).await? {
            return Err(CartError::OutOfStock(product_id));
        }

        let product = match current {
            Some(_) => None,
            None => {
                let product = self
                    .catalog
                    .product(product_id)
                    .await
                    .and_then(|product| {
                        check_id("product", product_id, product.id)?;
                        Ok(product)
                    })
                    .map_err(CartError::Catalog)?;
                Some(product)
            }
        };

        self.commit(|cart| {
            let updated = match &product {
                Some(product) => cart.with_product_added(product)?,
                None => cart.with_incremented(product_id)?,
            };
            Ok(Some(updated))
        })
    }

    async fn try_update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> CartResult<Cart> {
        if amount <= 0 {
            return Err(CartError::InvalidAmount { product_id, amount });
        }

        if !self.has_stock(product_id, amount).await? {
            return Err(CartError::OutOfStock(product_id));
        }

        self.commit(|cart| Ok(cart.with_amount(product_id, amount)?))
    }

    /// Asks the stock service whether `requested` units may be held.
    async fn has_stock(&self, product_id: ProductId, requested: i64) -> CartResult<bool> {
        let stock = self
            .stock
            .stock(product_id)
            .await
            .and_then(|stock| {
                check_id("stock", product_id, stock.id)?;
                Ok(stock)
            })
            .map_err(CartError::Stock)?;

        let allowed = self.policy.allows(&stock, requested);
        debug!(
            %product_id,
            available = stock.amount,
            requested,
            allowed,
            "Stock checked"
        );
        Ok(allowed)
    }

    /// Applies `update` to the latest cart, persists the result, and
    /// publishes it. `Ok(None)` from `update` means nothing changed.
    fn commit<F>(&self, update: F) -> CartResult<Cart>
    where
        F: FnOnce(&Cart) -> CartResult<Option<Cart>>,
    {
        let mut current = self.lock();

        let Some(updated) = update(&current)? else {
            debug!("No matching line item; cart unchanged");
            return Ok(current.clone());
        };

        self.repository.save(&updated)?;
        *current = updated.clone();

        info!(
            items = updated.len(),
            total_amount = updated.total_amount(),
            "Cart updated"
        );
        Ok(updated)
    }

    fn fail(&self, operation: Operation, product_id: ProductId, err: CartError) -> Cart {
        let notification = err.notification(operation);

        if err.is_rejection() {
            warn!(?operation, %product_id, reason = %err, "Cart operation rejected");
        } else {
            error!(?operation, %product_id, error = %err, "Cart operation failed");
        }

        self.notifier.notify(notification);
        self.cart()
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &*self.lock())
            .field("repository", &self.repository)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
