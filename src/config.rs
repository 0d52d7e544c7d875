//! Runtime configuration, read from the environment (and `.env` via dotenvy).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::aggregates::{Order, ProductInput};

pub const SEED_PATH_VAR: &str = "CATALOG_SEED_PATH";
pub const LOG_VAR: &str = "CATALOG_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed_path: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed_path: lookup(SEED_PATH_VAR).filter(|v| !v.trim().is_empty()).map(PathBuf::from),
            log_filter: lookup(LOG_VAR).unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Initial catalog contents. Products go through validation like form input.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub products: Vec<ProductInput>,
    pub orders: Vec<Order>,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.seed_path, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(|key| match key {
            SEED_PATH_VAR => Some("seed.json".into()),
            LOG_VAR => Some("storefront_catalog=debug".into()),
            _ => None,
        });
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
        assert_eq!(config.log_filter, "storefront_catalog=debug");
    }

    #[test]
    fn test_blank_seed_path_is_unset() {
        let config = Config::from_lookup(|key| (key == SEED_PATH_VAR).then(|| "  ".to_string()));
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn test_seed_json() {
        let seed = Seed::from_json(
            r#"{"products": [{"name": "Widget", "price": "10", "stock": "20"}],
                "orders": [{"name": "Jane", "lines": [{"product_id": 1, "quantity": 1}]}]}"#,
        )
        .unwrap();
        assert_eq!(seed.products[0].name, "Widget");
        assert!(seed.orders[0].references_product(1));
        assert!(Seed::from_json("{}").unwrap().products.is_empty());
        assert!(Seed::from_json("[").is_err());
    }

    #[test]
    fn test_missing_seed_file() {
        let err = Seed::load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(err.to_string().contains("reading seed file"));
    }
}
