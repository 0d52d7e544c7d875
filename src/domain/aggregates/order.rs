//! Order Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    id: i32,
    name: String,
    #[serde(default)]
    lines: Vec<OrderLine>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i32,
    pub quantity: i32,
}

impl Order {
    pub fn create(name: impl Into<String>) -> Self {
        Self { id: 0, name: name.into(), lines: vec![], created_at: Utc::now() }
    }

    pub fn id(&self) -> i32 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn lines(&self) -> &[OrderLine] { &self.lines }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

    pub fn with_id(mut self, id: i32) -> Self { self.id = id; self }

    /// Merges into an existing line for the same product.
    pub fn add_line(&mut self, product_id: i32, quantity: i32) {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(OrderLine { product_id, quantity }),
        }
    }

    pub fn references_product(&self, product_id: i32) -> bool {
        self.lines.iter().any(|l| l.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_lines() {
        let mut order = Order::create("Jane Doe");
        order.add_line(1, 2);
        order.add_line(1, 1);
        order.add_line(4, 1);
        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.lines()[0].quantity, 3); // Merged
        assert!(order.references_product(4));
        assert!(!order.references_product(2));
    }

    #[test]
    fn test_line_merge_saturates() {
        let mut order = Order::create("Jane Doe");
        order.add_line(1, 5);
        order.add_line(1, i32::MAX);
        assert_eq!(order.lines()[0].quantity, i32::MAX);
    }

    #[test]
    fn test_order_from_seed_json() {
        let raw = r#"{"name": "Jane", "lines": [{"product_id": 1, "quantity": 2}]}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id(), 0);
        assert!(order.references_product(1));
    }
}
