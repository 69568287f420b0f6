mod average_apr;
mod harvest;
mod initialize_strategy;
mod panic;
mod pause;
mod update_fees;
mod update_harvest_log_cadence;
mod update_role;
mod upgrade;

pub use average_apr::*;
pub use harvest::*;
pub use initialize_strategy::*;
pub use panic::*;
pub use pause::*;
pub use update_fees::*;
pub use update_harvest_log_cadence::*;
pub use update_role::*;
pub use upgrade::*;
