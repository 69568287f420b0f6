use anchor_lang::prelude::Pubkey;

use crate::error::VerdantResult;
use crate::state::roles::RoleTier;
use crate::state::strategy::Strategy;

/// Every privileged strategy operation declares its own minimum tier;
/// this is the single gate they all pass through.
pub fn require_tier(
	strategy: &Strategy,
	signer: &Pubkey,
	min_tier: RoleTier
) -> VerdantResult {
	strategy.roles.require_tier(signer, min_tier)
}
