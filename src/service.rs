//! Catalog orchestration: validate, convert, persist, and map for display.
//!
//! The service owns no data. Products and orders live in the injected stores
//! and cart contents in the injected [`Cart`]; every call is a stateless pass
//! over them.

use tracing::{debug, info, warn};

use crate::domain::aggregates::{Cart, DisplayProduct, ProductInput, StoredProduct};
use crate::domain::validation::{self, ProductErrors};
use crate::store::{OrderStore, ProductStore};
use crate::{CatalogError, Result};

pub struct ProductCatalogService<P, O, C> {
    products: P,
    orders: O,
    cart: C,
}

impl<P, O, C> ProductCatalogService<P, O, C>
where
    P: ProductStore,
    O: OrderStore,
    C: Cart,
{
    pub fn new(products: P, orders: O, cart: C) -> Self {
        Self { products, orders, cart }
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    /// Validates without touching any store.
    pub fn check_product_model_errors(&self, input: &ProductInput) -> ProductErrors {
        let errors = validation::validate(input);
        debug!(product_id = input.id, %errors, "checked product model");
        errors
    }

    /// Validates again, then saves. Whether a non-zero id updates or inserts is
    /// up to the store.
    #[tracing::instrument(skip_all, fields(product_id = input.id))]
    pub async fn save_product(&self, input: &ProductInput) -> Result<()> {
        let product = validation::validate_product(input).map_err(|errors| {
            warn!(%errors, "rejected product");
            CatalogError::Validation(errors)
        })?;

        self.products.save_product(StoredProduct::from(product)).await?;
        info!(name = %input.name, "product saved");
        Ok(())
    }

    /// All products in store order.
    pub async fn get_all_products(&self) -> Result<Vec<DisplayProduct>> {
        let products = self.products.get_all_products().await?;
        Ok(products.into_iter().map(DisplayProduct::from).collect())
    }

    pub async fn get_product_by_id(&self, id: i32) -> Result<DisplayProduct> {
        self.products
            .get_product_by_id(id)
            .await?
            .map(DisplayProduct::from)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Deletes a product no order refers to, and drops it from the cart.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<()> {
        if self.products.get_product_by_id(id).await?.is_none() {
            return Err(CatalogError::NotFound(id));
        }

        let orders = self.orders.orders_referencing(id).await?;
        if !orders.is_empty() {
            warn!(?orders, "delete blocked by existing orders");
            return Err(CatalogError::ReferentialIntegrity { product_id: id, orders });
        }

        self.products.delete_product(id).await?;
        self.cart.remove_product(id);
        info!("product deleted");
        Ok(())
    }

    /// Takes the cart's quantities out of stock, then empties the cart.
    /// The cart is left as-is if the store fails part way.
    #[tracing::instrument(skip(self))]
    pub async fn complete_checkout(&self) -> Result<()> {
        let lines = self.cart.lines();
        if lines.is_empty() {
            return Ok(());
        }

        for line in &lines {
            self.products.update_product_stock(line.product_id, line.quantity).await?;
        }
        self.cart.clear();
        info!(lines = lines.len(), "checkout completed");
        Ok(())
    }
}
