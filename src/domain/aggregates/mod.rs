//! Aggregates module
pub mod product;
pub mod order;
pub mod cart;

pub use product::{DisplayProduct, ProductInput, StoredProduct, ValidProduct};
pub use order::{Order, OrderLine};
pub use cart::{Cart, CartError, CartLine, SessionCart};
