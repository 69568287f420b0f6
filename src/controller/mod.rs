pub mod strategy;
pub mod token;
pub mod vault;
