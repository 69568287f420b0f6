use anchor_lang::prelude::*;

use crate::instructions::constraints::require_tier;
use crate::load_mut;
use crate::state::events::StrategyPauseRecord;
use crate::state::roles::RoleTier;

use super::initialize_strategy::StrategyAdmin;

pub fn handle_pause(ctx: Context<StrategyAdmin>) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::Guardian
	)?;

	strategy.pause();

	emit!(StrategyPauseRecord {
		ts: now,
		strategy: ctx.accounts.strategy.key(),
		paused_operations: strategy.paused_operations,
	});

	Ok(())
}

pub fn handle_unpause(ctx: Context<StrategyAdmin>) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::Admin
	)?;

	strategy.unpause();

	emit!(StrategyPauseRecord {
		ts: now,
		strategy: ctx.accounts.strategy.key(),
		paused_operations: strategy.paused_operations,
	});

	Ok(())
}
