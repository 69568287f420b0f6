mod deposit;
mod initialize_vault;
mod initialize_vault_depositor;
mod update_tvl_cap;
mod withdraw;

pub use deposit::*;
pub use initialize_vault::*;
pub use initialize_vault_depositor::*;
pub use update_tvl_cap::*;
pub use withdraw::*;
