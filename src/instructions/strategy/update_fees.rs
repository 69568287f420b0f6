use anchor_lang::prelude::*;

use crate::instructions::constraints::require_tier;
use crate::load_mut;
use crate::state::roles::RoleTier;

use super::initialize_strategy::StrategyAdmin;

pub fn handle_update_security_fee(
	ctx: Context<StrategyAdmin>,
	security_fee_bps: u16
) -> Result<()> {
	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::SuperAdmin
	)?;

	msg!(
		"updating security fee {} -> {}",
		strategy.security_fee_bps,
		security_fee_bps
	);
	strategy.set_security_fee(security_fee_bps)?;

	Ok(())
}

pub fn handle_update_fee_splits(
	ctx: Context<StrategyAdmin>,
	caller_fee_bps: u16,
	treasury_fee_bps: u16
) -> Result<()> {
	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::SuperAdmin
	)?;

	msg!(
		"updating profit fee splits caller {} -> {}, treasury {} -> {}",
		strategy.caller_fee_bps,
		caller_fee_bps,
		strategy.treasury_fee_bps,
		treasury_fee_bps
	);
	strategy.set_fee_splits(caller_fee_bps, treasury_fee_bps)?;

	Ok(())
}
