mod strategy;
mod vault;
pub mod constraints;

pub use strategy::*;
pub use vault::*;
pub use constraints::*;
