use anchor_lang::prelude::*;

use crate::instructions::constraints::require_tier;
use crate::load_mut;
use crate::state::events::{
	CooldownAction,
	StrategyMigrationRecord,
	UpgradeCooldownRecord,
};
use crate::state::roles::RoleTier;

use super::initialize_strategy::StrategyAdmin;

pub fn handle_initiate_upgrade_cooldown(
	ctx: Context<StrategyAdmin>
) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::Strategist
	)?;

	strategy.upgrade.initiate(now);

	emit!(UpgradeCooldownRecord {
		ts: now,
		strategy: ctx.accounts.strategy.key(),
		action: CooldownAction::Initiated,
	});

	Ok(())
}

pub fn handle_clear_upgrade_cooldown(
	ctx: Context<StrategyAdmin>
) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::Guardian
	)?;

	strategy.upgrade.clear();

	emit!(UpgradeCooldownRecord {
		ts: now,
		strategy: ctx.accounts.strategy.key(),
		action: CooldownAction::Cleared,
	});

	Ok(())
}

/// Consumes the upgrade governor and moves the explicit state schema
/// forward by one. The companion code replacement and any venue
/// reconfiguration are performed by the external upgrade executor.
pub fn handle_migrate_strategy(
	ctx: Context<StrategyAdmin>,
	target_version: u16
) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::SuperAdmin
	)?;

	strategy.upgrade.consume(now)?;

	let from_version = strategy.schema_version;
	strategy.migrate(target_version)?;

	emit!(StrategyMigrationRecord {
		ts: now,
		strategy: ctx.accounts.strategy.key(),
		from_version,
		to_version: target_version,
	});

	Ok(())
}
