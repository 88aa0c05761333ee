//! Shared domain types for the Xin Chào Vietnam storefront.

pub mod types;

pub use types::{Category, Product};
