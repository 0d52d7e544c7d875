//! Storefront catalog core
//!
//! Validation and persistence orchestration behind the storefront admin.
//!
//! ## Features
//! - Product form validation with stable, localizable error codes
//! - Product save / list / lookup / delete over pluggable stores
//! - Referential checks against orders before deletion
//! - Checkout stock update and cart clearing

use thiserror::Error;

pub mod config;
pub mod domain;
pub mod service;
pub mod store;

pub use domain::aggregates::{
    Cart, CartError, CartLine, DisplayProduct, Order, OrderLine, ProductInput, SessionCart,
    StoredProduct, ValidProduct,
};
pub use domain::validation::{validate, validate_product, ProductErrors, ValidationErrorCode};
pub use service::ProductCatalogService;
pub use store::{InMemoryOrderStore, InMemoryProductStore, OrderStore, ProductStore, StoreError};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("product failed validation: {0}")]
    Validation(ProductErrors),

    #[error("product {0} not found")]
    NotFound(i32),

    #[error("product {product_id} is referenced by {} order(s)", .orders.len())]
    ReferentialIntegrity { product_id: i32, orders: Vec<i32> },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Codes to render when the failure is a validation one.
    pub fn validation_errors(&self) -> Option<&ProductErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
