//! CLI command implementations.

pub mod prices;
pub mod simulate;
pub mod validate;
