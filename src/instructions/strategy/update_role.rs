use anchor_lang::prelude::*;
use num_traits::FromPrimitive;

use crate::error::ErrorCode;
use crate::instructions::constraints::require_tier;
use crate::load_mut;
use crate::state::events::RoleUpdateRecord;
use crate::state::roles::RoleTier;

use super::initialize_strategy::StrategyAdmin;

pub fn handle_update_role(
	ctx: Context<StrategyAdmin>,
	principal: Pubkey,
	tier: u8
) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::SuperAdmin
	)?;

	let role_tier = RoleTier::from_u8(tier).ok_or(ErrorCode::InvalidRole)?;
	strategy.roles.assign(principal, role_tier)?;

	emit!(RoleUpdateRecord {
		ts: now,
		strategy: ctx.accounts.strategy.key(),
		principal,
		tier,
	});

	Ok(())
}
