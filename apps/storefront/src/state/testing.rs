//! In-memory collaborators for cart store tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rocketshoes_api::{ApiError, ApiResult, ProductCatalog, StockChecker};
use rocketshoes_core::{Cart, Money, Product, ProductId, Stock};
use rocketshoes_storage::{
    CartRepository, KeyValueStore, MemoryStore, StorageError, StorageResult, DEFAULT_STORAGE_KEY,
};

use crate::notify::{Notification, Notifier};
use crate::state::CartStore;

// =============================================================================
// Fakes
// =============================================================================

/// Catalog keyed by the requested id. The record served may carry another id.
#[derive(Default)]
pub(crate) struct FakeCatalog {
    products: Mutex<HashMap<ProductId, Product>>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub(crate) fn serve(&self, requested: u32, product: Product) {
        self.products
            .lock()
            .unwrap()
            .insert(ProductId::new(requested), product);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductCatalog for FakeCatalog {
    async fn product(&self, id: ProductId) -> ApiResult<Product> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.products
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ApiError::NotFound {
                resource: "product",
                id,
            })
    }
}

#[derive(Default)]
pub(crate) struct FakeStock {
    levels: Mutex<HashMap<ProductId, Stock>>,
    calls: AtomicUsize,
}

impl FakeStock {
    pub(crate) fn set(&self, id: u32, amount: i64) {
        let id = ProductId::new(id);
        self.levels.lock().unwrap().insert(id, Stock::new(id, amount));
    }

    /// Answers lookups for `requested` with a record for `reported`.
    pub(crate) fn misreport(&self, requested: u32, reported: u32, amount: i64) {
        self.levels.lock().unwrap().insert(
            ProductId::new(requested),
            Stock::new(ProductId::new(reported), amount),
        );
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StockChecker for FakeStock {
    async fn stock(&self, id: ProductId) -> ApiResult<Stock> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.levels
            .lock()
            .unwrap()
            .get(&id)
            .copied()
            .ok_or(ApiError::NotFound {
                resource: "stock",
                id,
            })
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// Reads from an inner store, refuses every write.
pub(crate) struct ReadOnlyStore(pub(crate) MemoryStore);

impl ReadOnlyStore {
    pub(crate) fn empty() -> Self {
        ReadOnlyStore(MemoryStore::new())
    }

    pub(crate) fn seeded(slot: &str) -> Self {
        ReadOnlyStore(MemoryStore::with_slot(DEFAULT_STORAGE_KEY, slot))
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.0.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::io(
            key,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.0.remove(key)
    }
}

// =============================================================================
// Fixture
// =============================================================================

pub(crate) fn product(id: u32, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Tênis {}", id),
        price: Money::from_cents(cents),
        image_url: format!("https://cdn.example.com/{}.jpg", id),
    }
}

pub(crate) fn id(n: u32) -> ProductId {
    ProductId::new(n)
}

pub(crate) fn amounts(cart: &Cart) -> Vec<(u32, i64)> {
    cart.items()
        .iter()
        .map(|item| (item.id.get(), item.amount))
        .collect()
}

/// Three products: 1 and 2 in stock (3 and 5 units), 3 sold out.
pub(crate) struct Fixture {
    pub(crate) catalog: Arc<FakeCatalog>,
    pub(crate) stock: Arc<FakeStock>,
    pub(crate) slot: Arc<dyn KeyValueStore>,
    pub(crate) notifier: Arc<RecordingNotifier>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self::with_slot(Arc::new(MemoryStore::new()))
    }

    pub(crate) fn with_slot(slot: Arc<dyn KeyValueStore>) -> Self {
        let catalog = FakeCatalog::default();
        for p in [product(1, 17990), product(2, 13990), product(3, 21990)] {
            catalog.serve(p.id.get(), p);
        }

        let stock = FakeStock::default();
        stock.set(1, 3);
        stock.set(2, 5);
        stock.set(3, 0);

        Fixture {
            catalog: Arc::new(catalog),
            stock: Arc::new(stock),
            slot,
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub(crate) fn store(&self) -> CartStore {
        CartStore::new(
            self.catalog.clone(),
            self.stock.clone(),
            CartRepository::new(self.slot.clone(), DEFAULT_STORAGE_KEY),
            self.notifier.clone(),
        )
    }

    pub(crate) fn persisted(&self) -> Option<String> {
        self.slot.get(DEFAULT_STORAGE_KEY).unwrap()
    }
}
