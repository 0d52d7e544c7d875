//! Cart capability and the in-memory session cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use uuid::Uuid;

/// What the catalog needs from a shopping cart. The item collection itself
/// stays behind the implementation; only product/quantity pairs leak out.
pub trait Cart: Send + Sync {
    fn lines(&self) -> Vec<CartLine>;
    fn remove_product(&self, product_id: i32);
    fn clear(&self);

    fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

impl<C> Cart for Arc<C>
where
    C: Cart + ?Sized,
{
    fn lines(&self) -> Vec<CartLine> {
        (**self).lines()
    }

    fn remove_product(&self, product_id: i32) {
        (**self).remove_product(product_id)
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("quantity must be greater than zero, got {0}")]
    InvalidQuantity(i32),
}

/// Per-session cart held in memory.
#[derive(Debug)]
pub struct SessionCart {
    id: Uuid,
    lines: Mutex<Vec<CartLine>>,
}

impl SessionCart {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), lines: Mutex::new(vec![]) }
    }

    pub fn id(&self) -> Uuid { self.id }

    /// Adds `quantity` of a product, merging with an existing line.
    pub fn add_item(&self, product_id: i32, quantity: i32) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let mut lines = self.guard();
        match lines.iter().position(|l| l.product_id == product_id) {
            Some(i) => lines[i].quantity = lines[i].quantity.saturating_add(quantity),
            None => lines.push(CartLine { product_id, quantity }),
        }
        Ok(())
    }

    // A panic elsewhere must not make the cart look empty.
    fn guard(&self) -> MutexGuard<'_, Vec<CartLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionCart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart for SessionCart {
    fn lines(&self) -> Vec<CartLine> {
        self.guard().clone()
    }

    fn remove_product(&self, product_id: i32) {
        self.guard().retain(|l| l.product_id != product_id);
    }

    fn clear(&self) {
        self.guard().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_operations() {
        let cart = SessionCart::new();
        assert!(cart.is_empty());
        cart.add_item(1, 2).unwrap();
        cart.add_item(1, 1).unwrap();
        cart.add_item(2, 5).unwrap();
        let expected = vec![
            CartLine { product_id: 1, quantity: 3 },
            CartLine { product_id: 2, quantity: 5 },
        ];
        assert_eq!(cart.lines(), expected);
        cart.remove_product(1);
        assert_eq!(cart.lines().len(), 1);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let cart = SessionCart::new();
        assert_eq!(cart.add_item(1, 0), Err(CartError::InvalidQuantity(0)));
        assert_eq!(cart.add_item(1, -3), Err(CartError::InvalidQuantity(-3)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_saturates() {
        let cart = SessionCart::new();
        cart.add_item(1, 5).unwrap();
        cart.add_item(1, i32::MAX).unwrap();
        assert_eq!(cart.lines(), vec![CartLine { product_id: 1, quantity: i32::MAX }]);
    }

    #[test]
    fn test_poisoned_lock_keeps_lines() {
        let cart = Arc::new(SessionCart::new());
        cart.add_item(1, 5).unwrap();
        let shared = Arc::clone(&cart);
        let result = std::thread::spawn(move || {
            let _guard = shared.lines.lock();
            panic!("worker died holding the cart");
        })
        .join();
        assert!(result.is_err());
        assert!(cart.lines.is_poisoned());

        assert_eq!(cart.lines(), vec![CartLine { product_id: 1, quantity: 5 }]);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_shared_cart() {
        let cart = Arc::new(SessionCart::new());
        let shared: Arc<SessionCart> = Arc::clone(&cart);
        cart.add_item(7, 1).unwrap();
        assert!(!Cart::is_empty(&shared));
        Cart::clear(&shared);
        assert!(cart.is_empty());
    }
}
