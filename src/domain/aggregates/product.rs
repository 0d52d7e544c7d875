//! Product records: raw form input, validated draft, stored entity, display row.

use serde::{Deserialize, Serialize};

/// Product data as submitted by the admin form. Nothing is parsed yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    /// `0` for a new product.
    pub id: i32,
    pub name: String,
    pub description: String,
    pub details: String,
    pub price: String,
    pub stock: String,
}

/// A [`ProductInput`] that passed validation, with numbers parsed.
///
/// Only [`crate::domain::validation::validate_product`] builds one, so holding
/// a `ValidProduct` is proof that price and stock are positive integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidProduct {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) details: String,
    pub(crate) price: i32,
    pub(crate) stock: i32,
}

impl ValidProduct {
    pub fn id(&self) -> i32 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> i32 { self.price }
    pub fn stock(&self) -> i32 { self.stock }
}

/// Persisted product. Owned by the product store once saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub details: String,
    pub price: i32,
    pub quantity: i32,
}

impl From<ValidProduct> for StoredProduct {
    fn from(p: ValidProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            details: p.details,
            price: p.price,
            quantity: p.stock,
        }
    }
}

/// Product row as shown in listings. Uses the form's `stock` naming.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProduct {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub details: String,
    pub price: i32,
    pub stock: i32,
}

impl From<StoredProduct> for DisplayProduct {
    fn from(p: StoredProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            details: p.details,
            price: p.price,
            stock: p.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_fields_default_when_absent() {
        let input: ProductInput = serde_json::from_str(r#"{"name": "Widget"}"#).unwrap();
        assert_eq!(input.id, 0);
        assert_eq!(input.name, "Widget");
        assert!(input.price.is_empty());
        assert!(input.stock.is_empty());
    }

    #[test]
    fn test_stock_is_renamed_both_ways() {
        let valid = ValidProduct {
            id: 3,
            name: "W".into(),
            description: "d".into(),
            details: "x".into(),
            price: 10,
            stock: 20,
        };
        let stored = StoredProduct::from(valid);
        assert_eq!(stored.quantity, 20);
        let shown = DisplayProduct::from(stored);
        assert_eq!((shown.id, shown.price, shown.stock), (3, 10, 20));
        assert_eq!(shown.details, "x");
    }
}
