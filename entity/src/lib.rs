pub mod baked_good;
pub mod bakery;
pub mod prelude;
