use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, watch};

use crate::models::{CartLineItem, Product, ProductId};

/// Line items keyed by `(product id, size)`, in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    items: Vec<CartLineItem>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId, size: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.matches(product_id, size))
    }

    /// Adds one unit, merging into an existing line for the same size.
    pub fn add_item(&mut self, product: Arc<Product>, size: &str) {
        match self.items.iter_mut().find(|item| item.matches(product.id, size)) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartLineItem {
                product,
                selected_size: size.to_string(),
                quantity: 1,
            }),
        }
    }

    /// Returns whether a line item was removed.
    pub fn remove_item(&mut self, product_id: ProductId, size: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(product_id, size));
        self.items.len() != before
    }

    /// Sets the quantity of an existing line. Zero or below removes the line;
    /// a line that is not in the cart is left absent.
    ///
    /// Returns whether the ledger changed.
    pub fn set_quantity(&mut self, product_id: ProductId, size: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id, size);
        }
        let quantity = quantity.unsigned_abs();
        match self.items.iter_mut().find(|item| item.matches(product_id, size)) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn total_item_count(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.quantity))
    }

    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.line_total()))
    }
}

/// The session's single cart, owned by the application state.
///
/// Every mutation that changes the ledger bumps a revision published on a
/// watch channel, so a UI shell can redraw on notification.
#[derive(Clone)]
pub struct SharedCart {
    ledger: Arc<Mutex<CartLedger>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for SharedCart {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCart {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            ledger: Arc::new(Mutex::new(CartLedger::new())),
            revision: Arc::new(revision),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub async fn read(&self) -> MutexGuard<'_, CartLedger> {
        self.ledger.lock().await
    }

    /// Applies `op` under the lock and notifies subscribers when it reports a change.
    pub async fn update<R>(&self, op: impl FnOnce(&mut CartLedger) -> (R, bool)) -> R {
        let mut ledger = self.ledger.lock().await;
        let (result, changed) = op(&mut ledger);
        if changed {
            self.revision.send_modify(|revision| *revision += 1);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, price: u64) -> Arc<Product> {
        Arc::new(Product {
            id,
            name: format!("product {id}"),
            description: None,
            price,
            original_price: None,
            image: None,
            category: "Одежда".into(),
            age: "Взрослые".into(),
            gender: "Унисекс".into(),
            sport: "Фитнес".into(),
            sizes: vec!["M".into(), "L".into()],
            is_new: false,
            discount: None,
        })
    }

    #[test]
    fn set_quantity_on_missing_line_is_noop() {
        let mut ledger = CartLedger::new();
        assert!(!ledger.set_quantity(1, "M", 3));
        assert!(ledger.is_empty());
    }

    #[test]
    fn set_quantity_to_same_value_reports_no_change() {
        let mut ledger = CartLedger::new();
        ledger.add_item(product(1, 100), "M");
        assert!(!ledger.set_quantity(1, "M", 1));
        assert!(ledger.set_quantity(1, "M", 4));
        assert_eq!(ledger.get(1, "M").map(|item| item.quantity), Some(4));
    }

    #[test]
    fn remove_missing_line_reports_no_change() {
        let mut ledger = CartLedger::new();
        ledger.add_item(product(1, 100), "M");
        assert!(!ledger.remove_item(1, "L"));
        assert!(!ledger.remove_item(2, "M"));
        assert_eq!(ledger.items().len(), 1);
    }

    #[tokio::test]
    async fn shared_cart_notifies_only_on_change() {
        let cart = SharedCart::new();
        let mut rx = cart.subscribe();

        cart.update(|ledger| ((), ledger.remove_item(1, "M"))).await;
        assert!(!rx.has_changed().expect("sender alive"));

        cart.update(|ledger| {
            ledger.add_item(product(1, 100), "M");
            ((), true)
        })
        .await;
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(*rx.borrow_and_update(), 1);
        assert_eq!(cart.read().await.total_item_count(), 1);
    }
}
