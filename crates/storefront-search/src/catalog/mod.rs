//! Product catalog module.
//!
//! Contains the canonical product model returned by the search service and
//! the adapter for the older Thai-keyed payload.

mod legacy;
mod numeric;
mod product;

pub use legacy::LegacyProduct;
pub use numeric::parse_amount;
pub use product::Product;
