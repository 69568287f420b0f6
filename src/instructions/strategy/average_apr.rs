use anchor_lang::prelude::*;

use crate::load;
use crate::state::strategy::Strategy;

#[derive(Accounts)]
pub struct ViewStrategy<'info> {
	pub strategy: AccountLoader<'info, Strategy>,
}

/// Trailing APR in basis points across the last `n` harvest records.
pub fn handle_average_apr_across_last_n_harvests(
	ctx: Context<ViewStrategy>,
	n: u64
) -> Result<u64> {
	let strategy = load!(ctx.accounts.strategy)?;
	Ok(strategy.harvest_log.average_apr_bps(n as usize))
}
