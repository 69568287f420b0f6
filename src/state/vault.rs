use anchor_lang::prelude::*;
use static_assertions::const_assert;

use crate::error::{ ErrorCode, VerdantResult };
use crate::math::safe_math::SafeMath;
use crate::math::shares::price_per_full_share;
use crate::state::traits::Size;
use crate::{ safe_decrement, safe_increment, validate };

/// User-facing share accounting over exactly one strategy. Holder
/// balances live in per-user [`VaultDepositor`] accounts; the vault
/// tracks only the outstanding total.
#[account]
#[derive(Default)]
pub struct Vault {
	pub pubkey: Pubkey,
	/// Deploying owner; only administers the tvl cap.
	pub authority: Pubkey,
	pub want_mint: Pubkey,
	/// Idle want custody, drawn down before the strategy on withdrawal.
	pub token_account: Pubkey,
	/// One-time strategy binding; default until initialized.
	pub strategy: Pubkey,
	pub name: [u8; 32],
	pub total_shares: u128,
	pub tvl_cap: u64,
	pub deposit_fee_bps: u16,
	pub bump: u8,
	pub signer_nonce: u8,
	pub padding: [u8; 4],
}

impl Size for Vault {
	const SIZE: usize = 232;
}

impl Vault {
	pub fn is_initialized(&self) -> bool {
		self.strategy != Pubkey::default()
	}

	pub fn mint_shares(&mut self, delta: u128) -> VerdantResult {
		safe_increment!(self.total_shares, delta);
		Ok(())
	}

	pub fn burn_shares(&mut self, delta: u128) -> VerdantResult {
		safe_decrement!(self.total_shares, delta);
		Ok(())
	}

	/// `balance * 1e18 / total_shares`, 1e18 while empty.
	pub fn price_per_full_share(
		&self,
		total_assets: u64
	) -> VerdantResult<u128> {
		price_per_full_share(total_assets, self.total_shares)
	}

	/// Total assets the vault accounts for: its own idle balance plus
	/// everything the strategy reports.
	pub fn balance(idle: u64, strategy_balance: u64) -> VerdantResult<u64> {
		idle.safe_add(strategy_balance)
	}
}

/// Per-holder share position, created on first deposit and zeroed on
/// full withdrawal. Shares are private behind checked accessors so the
/// vault-wide sum invariant only moves through mint/burn pairs.
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct VaultDepositor {
	pub vault: Pubkey,
	pub authority: Pubkey,
	shares: u128,
	pub cost_basis: i64,
	pub last_deposit_ts: i64,
	pub bump: u8,
	pub padding: [u8; 7],
}

impl Size for VaultDepositor {
	const SIZE: usize = 120;
}

const_assert!(VaultDepositor::SIZE >= 8 + std::mem::size_of::<VaultDepositor>());

impl VaultDepositor {
	pub fn new(vault: Pubkey, authority: Pubkey, bump: u8, now: i64) -> Self {
		VaultDepositor {
			vault,
			authority,
			shares: 0,
			cost_basis: 0,
			last_deposit_ts: now,
			bump,
			padding: [0; 7],
		}
	}

	pub fn shares(&self) -> u128 {
		self.shares
	}

	pub fn increase_shares(&mut self, delta: u128) -> VerdantResult {
		safe_increment!(self.shares, delta);
		Ok(())
	}

	pub fn decrease_shares(&mut self, delta: u128) -> VerdantResult {
		validate!(
			self.shares >= delta,
			ErrorCode::InsufficientShares,
			"holder has {} shares, tried to burn {}",
			self.shares,
			delta
		)?;
		safe_decrement!(self.shares, delta);
		Ok(())
	}
}
