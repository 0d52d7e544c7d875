//! Domain layer: product records, orders, cart, and the validation rules.
pub mod aggregates;
pub mod validation;
