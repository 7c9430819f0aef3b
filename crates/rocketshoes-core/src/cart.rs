//! # Cart
//!
//! The cart value and its line items.
//!
//! ## Immutable Updates
//! Every mutation takes `&self` and returns a brand new `Cart`. Line items are
//! never edited through a shared reference; a changed item is rebuilt with
//! [`LineItem::with_amount`]. The store publishes the new value only after it
//! has been persisted, so a failed write leaves the previous snapshot intact.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Store Action            Cart Method                 Result             │
//! │  ────────────            ───────────                 ──────             │
//! │                                                                         │
//! │  add (new product) ────► with_product_added() ────► items + [item×1]    │
//! │                                                                         │
//! │  add (in cart) ────────► with_incremented() ──────► item.amount + 1     │
//! │                                                                         │
//! │  update amount ────────► with_amount() ───────────► item.amount = n     │
//! │                                                                         │
//! │  remove ───────────────► without() ───────────────► items - item        │
//! │                                                                         │
//! │  Absent product on update/remove → None (caller treats as no-op)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_amount;
use crate::NEW_ITEM_AMOUNT;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart with its quantity.
///
/// Product data is a snapshot taken when the product was first added; later
/// catalog price changes do not affect items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image_url: String,

    /// Quantity of this product in the cart. Always >= 1.
    pub amount: i64,
}

impl LineItem {
    /// Creates a line item with amount 1 from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            amount: NEW_ITEM_AMOUNT,
        }
    }

    /// Returns a copy of this item with a different amount.
    pub fn with_amount(&self, amount: i64) -> Self {
        LineItem {
            amount,
            ..self.clone()
        }
    }

    /// Unit price × amount.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.price
            .checked_mul(self.amount)
            .ok_or(CoreError::MoneyOverflow)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Ordered collection of line items, unique by product id.
///
/// ## Invariants
/// - No two items share an id
/// - Every amount is >= 1
/// - Order is the insertion order of each product's first add
///
/// Serialized as a bare JSON array of line items; deserialization goes
/// through [`Cart::from_items`] so a corrupt slot cannot break the invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from existing items, checking the invariants.
    pub fn from_items(items: Vec<LineItem>) -> CoreResult<Self> {
        for (index, item) in items.iter().enumerate() {
            validate_amount(item.amount)?;
            if items[..index].iter().any(|other| other.id == item.id) {
                return Err(CoreError::DuplicateLineItem(item.id));
            }
        }

        Ok(Cart { items })
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all amounts.
    pub fn total_amount(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.amount))
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |acc, item| {
            acc.checked_add(item.line_total()?)
                .ok_or(CoreError::MoneyOverflow)
        })
    }

    pub fn totals(&self) -> CoreResult<CartTotals> {
        Ok(CartTotals {
            item_count: self.len(),
            total_amount: self.total_amount(),
            subtotal: self.subtotal()?,
        })
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: its amount increases by 1
    /// - Product not in cart: appended with amount 1
    pub fn with_product_added(&self, product: &Product) -> CoreResult<Cart> {
        if self.contains(product.id) {
            return self.with_incremented(product.id);
        }

        let mut items = self.items.clone();
        items.push(LineItem::from_product(product));
        Ok(Cart { items })
    }

    /// Increments an existing item's amount by 1.
    pub fn with_incremented(&self, product_id: ProductId) -> CoreResult<Cart> {
        let updated = self.replacing(product_id, |item| {
            let amount = item
                .amount
                .checked_add(1)
                .ok_or(CoreError::AmountOverflow(product_id))?;
            Ok(item.with_amount(amount))
        })?;

        updated.ok_or(CoreError::ItemNotInCart(product_id))
    }

    /// Sets an item's amount. Returns `Ok(None)` when the product is absent.
    pub fn with_amount(&self, product_id: ProductId, amount: i64) -> CoreResult<Option<Cart>> {
        validate_amount(amount)?;
        self.replacing(product_id, |item| Ok(item.with_amount(amount)))
    }

    /// Removes an item. Returns `None` when the product is absent.
    pub fn without(&self, product_id: ProductId) -> Option<Cart> {
        if !self.contains(product_id) {
            return None;
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        Some(Cart { items })
    }

    /// Rebuilds the item list with `update` applied to the matching item.
    fn replacing<F>(&self, product_id: ProductId, update: F) -> CoreResult<Option<Cart>>
    where
        F: FnOnce(&LineItem) -> CoreResult<LineItem>,
    {
        let Some(index) = self.items.iter().position(|item| item.id == product_id) else {
            return Ok(None);
        };

        let mut items = self.items.clone();
        items[index] = update(&self.items[index])?;
        Ok(Some(Cart { items }))
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CoreError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart summary for headers and checkout panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub item_count: usize,
    /// Sum of all amounts.
    pub total_amount: i64,
    pub subtotal: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Tênis {}", id),
            price: Money::from_cents(price_cents),
            image_url: format!("https://cdn.example.com/{}.jpg", id),
        }
    }

    #[test]
    fn test_add_new_product() {
        let cart = Cart::new();
        let cart = cart.with_product_added(&test_product(1, 17990)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 1);
    }

    #[test]
    fn test_add_same_product_increments() {
        let product = test_product(1, 17990);
        let cart = Cart::new()
            .with_product_added(&product)
            .unwrap()
            .with_product_added(&product)
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(product.id).unwrap().amount, 2);
    }

    #[test]
    fn test_updates_do_not_touch_previous_snapshot() {
        let before = Cart::new().with_product_added(&test_product(1, 100)).unwrap();
        let after = before.with_incremented(ProductId::new(1)).unwrap();

        assert_eq!(before.get(ProductId::new(1)).unwrap().amount, 1);
        assert_eq!(after.get(ProductId::new(1)).unwrap().amount, 2);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let cart = Cart::new()
            .with_product_added(&test_product(3, 100))
            .unwrap()
            .with_product_added(&test_product(1, 100))
            .unwrap()
            .with_product_added(&test_product(3, 100))
            .unwrap();

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_increment_absent_product_fails() {
        let err = Cart::new().with_incremented(ProductId::new(9)).unwrap_err();
        assert_eq!(err, CoreError::ItemNotInCart(ProductId::new(9)));
    }

    #[test]
    fn test_with_amount_only_changes_target() {
        let cart = Cart::new()
            .with_product_added(&test_product(1, 100))
            .unwrap()
            .with_product_added(&test_product(2, 200))
            .unwrap();

        let updated = cart.with_amount(ProductId::new(2), 5).unwrap().unwrap();
        assert_eq!(updated.get(ProductId::new(1)).unwrap().amount, 1);
        assert_eq!(updated.get(ProductId::new(2)).unwrap().amount, 5);
    }

    #[test]
    fn test_with_amount_rejects_non_positive() {
        let cart = Cart::new().with_product_added(&test_product(1, 100)).unwrap();

        assert!(matches!(
            cart.with_amount(ProductId::new(1), 0),
            Err(CoreError::Validation(_))
        ));
        assert!(cart.with_amount(ProductId::new(1), -2).is_err());
    }

    #[test]
    fn test_with_amount_absent_is_none() {
        let cart = Cart::new().with_product_added(&test_product(1, 100)).unwrap();
        assert_eq!(cart.with_amount(ProductId::new(2), 3).unwrap(), None);
    }

    #[test]
    fn test_without() {
        let cart = Cart::new()
            .with_product_added(&test_product(1, 100))
            .unwrap()
            .with_product_added(&test_product(2, 200))
            .unwrap();

        let removed = cart.without(ProductId::new(1)).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(!removed.contains(ProductId::new(1)));

        assert!(cart.without(ProductId::new(42)).is_none());
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new()
            .with_product_added(&test_product(1, 17990))
            .unwrap()
            .with_product_added(&test_product(1, 17990))
            .unwrap()
            .with_product_added(&test_product(2, 13990))
            .unwrap();

        let totals = cart.totals().unwrap();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_amount, 3);
        assert_eq!(totals.subtotal.cents(), 2 * 17990 + 13990);
    }

    #[test]
    fn test_subtotal_overflow_is_reported() {
        let item = LineItem {
            amount: 2,
            ..LineItem::from_product(&test_product(1, i64::MAX))
        };
        let cart = Cart::from_items(vec![item]).unwrap();
        assert_eq!(cart.subtotal(), Err(CoreError::MoneyOverflow));
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let item = LineItem::from_product(&test_product(1, 100));
        let err = Cart::from_items(vec![item.clone(), item]).unwrap_err();
        assert_eq!(err, CoreError::DuplicateLineItem(ProductId::new(1)));
    }

    #[test]
    fn test_from_items_rejects_zero_amount() {
        let item = LineItem::from_product(&test_product(1, 100)).with_amount(0);
        assert!(Cart::from_items(vec![item]).is_err());
    }

    #[test]
    fn test_serializes_as_array() {
        let cart = Cart::new().with_product_added(&test_product(1, 17990)).unwrap();
        let json = serde_json::to_value(&cart).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["amount"], 1);
        assert_eq!(json[0]["imageUrl"], "https://cdn.example.com/1.jpg");
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 100, "imageUrl": "a.jpg", "amount": 1},
            {"id": 1, "name": "A", "price": 100, "imageUrl": "a.jpg", "amount": 2}
        ]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }
}
