//! Command implementations.

pub mod generate;
pub mod melody;
pub mod mix;
pub mod price;
