use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::instructions::constraints::require_tier;
use crate::load_mut;
use crate::state::roles::RoleTier;
use crate::validate;

use super::initialize_strategy::StrategyAdmin;

/// Smooths the trailing-APR ledger only; never blocks harvests.
pub fn handle_update_harvest_log_cadence(
	ctx: Context<StrategyAdmin>,
	cadence: i64
) -> Result<()> {
	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::Strategist
	)?;

	validate!(
		cadence >= 0,
		ErrorCode::DefaultError,
		"cadence must not be negative"
	)?;

	msg!(
		"updating harvest log cadence {} -> {}",
		strategy.harvest_log.cadence,
		cadence
	);
	strategy.harvest_log.cadence = cadence;

	Ok(())
}
