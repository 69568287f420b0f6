use anchor_lang::prelude::*;
use static_assertions::const_assert_eq;

use crate::error::{ ErrorCode, VerdantResult };
use crate::math::constants::{
	MAX_PROFIT_FEE_BPS,
	MAX_SECURITY_FEE_BPS,
};
use crate::math::safe_math::SafeMath;
use crate::state::harvest_log::HarvestLog;
use crate::state::paused_operations::StrategyOperation;
use crate::state::roles::RoleRegistry;
use crate::state::traits::Size;
use crate::state::upgrade::UpgradeGovernor;
use crate::validate;

/// Capital-deploying side of a vault pair. Owns idle and deployed
/// custody, the role hierarchy, the upgrade governor, and the harvest
/// ledger. Replaceable only through a governed migration that bumps
/// `schema_version`.
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct Strategy {
	pub pubkey: Pubkey,
	pub vault: Pubkey,
	pub want_mint: Pubkey,
	/// Idle want custody held by the strategy itself.
	pub token_account: Pubkey,
	/// Capital committed to the external deployment venue.
	pub farm_token_account: Pubkey,
	/// Inflow account the venue pays realized yield into.
	pub reward_token_account: Pubkey,
	/// Treasury performance-fee recipient (want token account).
	pub treasury: Pubkey,
	pub roles: RoleRegistry,
	pub upgrade: UpgradeGovernor,
	pub harvest_log: HarvestLog,
	pub last_harvest_ts: i64,
	/// Charged only on the deployed portion of a withdrawal.
	pub security_fee_bps: u16,
	/// Harvest incentive paid to the caller, in bps of realized profit.
	pub caller_fee_bps: u16,
	/// Performance fee forwarded to the treasury, in bps of profit.
	pub treasury_fee_bps: u16,
	pub schema_version: u16,
	pub paused_operations: u8,
	pub bump: u8,
	pub signer_nonce: u8,
	pub padding: [u8; 5],
}

impl Size for Strategy {
	const SIZE: usize = 1032;
}

const_assert_eq!(Strategy::SIZE, 8 + std::mem::size_of::<Strategy>());

impl Strategy {
	pub fn is_operation_paused(&self, operation: StrategyOperation) -> bool {
		StrategyOperation::is_operation_paused(
			self.paused_operations,
			operation
		)
	}

	pub fn is_paused(&self) -> bool {
		self.paused_operations == StrategyOperation::ALL
	}

	pub fn pause(&mut self) {
		self.paused_operations = StrategyOperation::ALL;
		StrategyOperation::log_all_operations_paused(self.paused_operations);
	}

	/// Idempotent when already live.
	pub fn unpause(&mut self) {
		self.paused_operations = 0;
	}

	/// idle custody plus everything deployed; read-only.
	pub fn balance_of(&self, idle: u64, deployed: u64) -> u64 {
		idle.saturating_add(deployed)
	}

	pub fn set_security_fee(&mut self, fee_bps: u16) -> VerdantResult {
		validate!(
			fee_bps <= MAX_SECURITY_FEE_BPS,
			ErrorCode::InvalidFee,
			"security fee {} above max {}",
			fee_bps,
			MAX_SECURITY_FEE_BPS
		)?;
		self.security_fee_bps = fee_bps;
		Ok(())
	}

	pub fn set_fee_splits(
		&mut self,
		caller_fee_bps: u16,
		treasury_fee_bps: u16
	) -> VerdantResult {
		validate!(
			(caller_fee_bps as u32) + (treasury_fee_bps as u32) <=
				MAX_PROFIT_FEE_BPS as u32,
			ErrorCode::InvalidFee,
			"profit fee splits {} + {} above max {}",
			caller_fee_bps,
			treasury_fee_bps,
			MAX_PROFIT_FEE_BPS
		)?;
		self.caller_fee_bps = caller_fee_bps;
		self.treasury_fee_bps = treasury_fee_bps;
		Ok(())
	}

	/// Explicit schema migration, valid only directly after the upgrade
	/// governor has been consumed; versions move by exactly one.
	pub fn migrate(&mut self, target_version: u16) -> VerdantResult {
		let next_version = self.schema_version.safe_add(1)?;
		validate!(
			target_version == next_version,
			ErrorCode::InvalidMigrationVersion,
			"cannot migrate from schema {} to {}",
			self.schema_version,
			target_version
		)?;
		self.schema_version = target_version;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pause_gates_everything_but_withdrawals() {
		let mut strategy = Strategy::default();
		assert!(!strategy.is_paused());

		strategy.pause();
		assert!(strategy.is_paused());
		assert!(strategy.is_operation_paused(StrategyOperation::Deposit));
		assert!(strategy.is_operation_paused(StrategyOperation::Deploy));
		assert!(strategy.is_operation_paused(StrategyOperation::Harvest));

		strategy.unpause();
		assert!(!strategy.is_paused());
		// idempotent
		strategy.unpause();
		assert!(!strategy.is_paused());
	}

	#[test]
	fn security_fee_is_capped() {
		let mut strategy = Strategy::default();
		assert_eq!(strategy.set_security_fee(MAX_SECURITY_FEE_BPS), Ok(()));
		assert_eq!(
			strategy.set_security_fee(MAX_SECURITY_FEE_BPS + 1),
			Err(ErrorCode::InvalidFee)
		);
	}

	#[test]
	fn profit_fee_splits_are_capped_together() {
		let mut strategy = Strategy::default();
		assert_eq!(strategy.set_fee_splits(100, 900), Ok(()));
		assert_eq!(
			strategy.set_fee_splits(200, 900),
			Err(ErrorCode::InvalidFee)
		);
	}

	#[test]
	fn migration_moves_one_version_at_a_time() {
		let mut strategy = Strategy::default();
		assert_eq!(
			strategy.migrate(2),
			Err(ErrorCode::InvalidMigrationVersion)
		);
		assert_eq!(strategy.migrate(1), Ok(()));
		assert_eq!(strategy.schema_version, 1);
		assert_eq!(strategy.migrate(2), Ok(()));
	}
}
