//! Storage capabilities consumed by the catalog service.
//!
//! Implementations must be safe to call concurrently from several services
//! and must at least serialize writes to the same record. A completed save is
//! visible to every later read from any caller. Nothing else (transactions,
//! foreign keys, retries) is assumed at this boundary.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::aggregates::{Order, StoredProduct};

pub mod memory;

pub use memory::{InMemoryOrderStore, InMemoryProductStore};

/// Failure reported by a store implementation. The catalog passes it through
/// untouched and never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub trait ProductStore: Send + Sync {
    /// Inserts when `product.id == 0`, otherwise the store decides between
    /// update and insert.
    async fn save_product(&self, product: StoredProduct) -> StoreResult<()>;
    async fn get_all_products(&self) -> StoreResult<Vec<StoredProduct>>;
    async fn get_product_by_id(&self, id: i32) -> StoreResult<Option<StoredProduct>>;
    async fn delete_product(&self, id: i32) -> StoreResult<()>;
    async fn update_product_stock(&self, id: i32, quantity_to_remove: i32) -> StoreResult<()>;
}

pub trait OrderStore: Send + Sync {
    async fn save_order(&self, order: Order) -> StoreResult<()>;
    /// Ids of orders with at least one line for `product_id`.
    async fn orders_referencing(&self, product_id: i32) -> StoreResult<Vec<i32>>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore,
{
    async fn save_product(&self, product: StoredProduct) -> StoreResult<()> {
        (**self).save_product(product).await
    }

    async fn get_all_products(&self) -> StoreResult<Vec<StoredProduct>> {
        (**self).get_all_products().await
    }

    async fn get_product_by_id(&self, id: i32) -> StoreResult<Option<StoredProduct>> {
        (**self).get_product_by_id(id).await
    }

    async fn delete_product(&self, id: i32) -> StoreResult<()> {
        (**self).delete_product(id).await
    }

    async fn update_product_stock(&self, id: i32, quantity_to_remove: i32) -> StoreResult<()> {
        (**self).update_product_stock(id, quantity_to_remove).await
    }
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore,
{
    async fn save_order(&self, order: Order) -> StoreResult<()> {
        (**self).save_order(order).await
    }

    async fn orders_referencing(&self, product_id: i32) -> StoreResult<Vec<i32>> {
        (**self).orders_referencing(product_id).await
    }
}
