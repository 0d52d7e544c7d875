use tokio::sync::RwLock;

use crate::domain::aggregates::{Order, StoredProduct};

use super::{OrderStore, ProductStore, StoreError, StoreResult};

/// In-memory product store for tests/dev. Lists in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<ProductTable>,
}

#[derive(Debug, Default)]
struct ProductTable {
    rows: Vec<StoredProduct>,
    last_id: i32,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    async fn save_product(&self, mut product: StoredProduct) -> StoreResult<()> {
        let mut table = self.inner.write().await;
        if product.id == 0 {
            table.last_id = next_id(table.last_id, "product")?;
            product.id = table.last_id;
            table.rows.push(product);
            return Ok(());
        }
        table.last_id = table.last_id.max(product.id);
        match table.rows.iter().position(|p| p.id == product.id) {
            Some(i) => table.rows[i] = product,
            None => table.rows.push(product),
        }
        Ok(())
    }

    async fn get_all_products(&self) -> StoreResult<Vec<StoredProduct>> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn get_product_by_id(&self, id: i32) -> StoreResult<Option<StoredProduct>> {
        Ok(self.inner.read().await.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_product(&self, id: i32) -> StoreResult<()> {
        self.inner.write().await.rows.retain(|p| p.id != id);
        Ok(())
    }

    /// Unknown ids are ignored; a product whose stock runs out is removed.
    async fn update_product_stock(&self, id: i32, quantity_to_remove: i32) -> StoreResult<()> {
        let mut table = self.inner.write().await;
        let Some(product) = table.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };
        product.quantity = product.quantity.saturating_sub(quantity_to_remove);
        if product.quantity <= 0 {
            table.rows.retain(|p| p.id != id);
        }
        Ok(())
    }
}

fn next_id(last: i32, kind: &str) -> StoreResult<i32> {
    last.checked_add(1)
        .ok_or_else(|| StoreError::Backend(format!("{kind} id space exhausted")))
}

#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    async fn save_order(&self, order: Order) -> StoreResult<()> {
        let mut orders = self.inner.write().await;
        let order = if order.id() == 0 {
            let last = orders.iter().map(Order::id).max().unwrap_or(0);
            order.with_id(next_id(last, "order")?)
        } else {
            order
        };
        orders.retain(|o| o.id() != order.id());
        orders.push(order);
        Ok(())
    }

    async fn orders_referencing(&self, product_id: i32) -> StoreResult<Vec<i32>> {
        Ok(self
            .inner
            .read()
            .await
            .iter()
            .filter(|o| o.references_product(product_id))
            .map(Order::id)
            .collect())
    }
}
