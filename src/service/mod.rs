//! Data access for bakeries and baked goods, plus request validation.

mod baked_good;
mod bakery;
pub mod validation;
pub use baked_good::BakedGoodService;
pub use bakery::BakeryService;
pub use validation::{BakeryPatch, NewBakedGood};
