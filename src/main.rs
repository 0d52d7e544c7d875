//! Storefront catalog - loads a seed catalog and prints the product listing

use std::sync::Arc;

use anyhow::Result;
use storefront_catalog::config::{Config, Seed};
use storefront_catalog::{
    CatalogError, InMemoryOrderStore, InMemoryProductStore, OrderStore, ProductCatalogService,
    SessionCart,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.as_str().into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let products = Arc::new(InMemoryProductStore::new());
    let orders = Arc::new(InMemoryOrderStore::new());
    let cart = Arc::new(SessionCart::new());
    let service = ProductCatalogService::new(products, orders.clone(), cart.clone());
    tracing::info!(cart_id = %cart.id(), "catalog ready");

    if let Some(path) = &config.seed_path {
        let seed = Seed::load(path)?;
        for order in seed.orders {
            tracing::debug!(
                name = order.name(),
                lines = order.lines().len(),
                placed_at = %order.created_at().to_rfc3339(),
                "seeding order"
            );
            orders.save_order(order).await?;
        }
        for input in &seed.products {
            match service.save_product(input).await {
                Ok(()) => {}
                Err(CatalogError::Validation(errors)) => {
                    tracing::warn!(name = %input.name, %errors, "skipping invalid seed product");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    let listing = service.get_all_products().await?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
