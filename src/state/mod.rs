pub mod events;
pub mod harvest_log;
pub mod paused_operations;
pub mod roles;
pub mod strategy;
pub mod traits;
pub mod upgrade;
pub mod vault;
pub mod yield_source;
