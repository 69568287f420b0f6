use crate::error::{ ErrorCode, VerdantResult };
use crate::math::casting::Cast;
use crate::math::constants::PERCENT_DIVISOR;
use crate::math::safe_math::SafeMath;
use crate::math::shares::{ shares_to_vault_amount, vault_amount_to_shares };
use crate::state::paused_operations::StrategyOperation;
use crate::state::strategy::Strategy;
use crate::state::vault::{ Vault, VaultDepositor };
use crate::validate;

pub struct DepositOutcome {
	pub shares_minted: u128,
	pub fee_shares: u128,
}

/// Mints shares for a deposit against the pre-deposit totals. State is
/// only touched after every guard has passed; the caller performs the
/// token movement afterwards.
pub fn deposit(
	vault: &mut Vault,
	depositor: &mut VaultDepositor,
	strategy: &Strategy,
	amount: u64,
	idle: u64,
	strategy_balance: u64,
	now: i64
) -> VerdantResult<DepositOutcome> {
	validate!(
		vault.is_initialized(),
		ErrorCode::VaultNotInitialized,
		"vault has no strategy bound"
	)?;

	validate!(amount > 0, ErrorCode::ZeroAmount)?;

	validate!(
		!strategy.is_operation_paused(StrategyOperation::Deposit),
		ErrorCode::StrategyPaused,
		"deposits are paused"
	)?;

	let total_assets = Vault::balance(idle, strategy_balance)?;
	validate!(
		total_assets.safe_add(amount)? <= vault.tvl_cap,
		ErrorCode::CapExceeded,
		"deposit of {} on balance {} breaches tvl cap {}",
		amount,
		total_assets,
		vault.tvl_cap
	)?;

	let gross_shares = vault_amount_to_shares(
		amount,
		vault.total_shares,
		total_assets
	)?;
	let fee_shares = gross_shares
		.safe_mul(vault.deposit_fee_bps as u128)?
		.safe_div(PERCENT_DIVISOR as u128)?;
	let shares_minted = gross_shares.safe_sub(fee_shares)?;

	vault.mint_shares(shares_minted)?;
	depositor.increase_shares(shares_minted)?;
	depositor.cost_basis = depositor.cost_basis
		.saturating_add(amount.cast()?);
	depositor.last_deposit_ts = now;

	Ok(DepositOutcome {
		shares_minted,
		fee_shares,
	})
}

pub struct WithdrawalRoute {
	/// Gross asset entitlement for the burned shares.
	pub amount: u64,
	pub from_idle: u64,
	pub from_strategy: u64,
	/// Charged only on the portion sourced from deployed capital; it
	/// stays in strategy custody, accruing to remaining holders.
	pub security_fee: u64,
}

/// Burns shares and plans the payout route: vault idle balance first,
/// strategy custody for the shortfall. Shares are burned before any
/// transfer leaves the program.
pub fn withdraw(
	vault: &mut Vault,
	depositor: &mut VaultDepositor,
	strategy: &Strategy,
	shares: u128,
	idle: u64,
	strategy_balance: u64
) -> VerdantResult<WithdrawalRoute> {
	validate!(
		vault.is_initialized(),
		ErrorCode::VaultNotInitialized,
		"vault has no strategy bound"
	)?;

	validate!(shares > 0, ErrorCode::ZeroAmount)?;

	let total_assets = Vault::balance(idle, strategy_balance)?;
	let amount = shares_to_vault_amount(
		shares,
		vault.total_shares,
		total_assets
	)?;

	depositor.decrease_shares(shares)?;
	vault.burn_shares(shares)?;
	depositor.cost_basis = depositor.cost_basis
		.saturating_sub(amount.cast()?);

	let from_idle = amount.min(idle);
	let from_strategy = amount.safe_sub(from_idle)?;
	let security_fee = from_strategy
		.safe_mul(strategy.security_fee_bps as u64)?
		.safe_div(PERCENT_DIVISOR)?;

	Ok(WithdrawalRoute {
		amount,
		from_idle,
		from_strategy,
		security_fee,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::constants::{
		DEFAULT_SECURITY_FEE_BPS,
		SHARE_PRICE_PRECISION,
		UNCAPPED_TVL,
	};
	use anchor_lang::prelude::Pubkey;

	fn fixture() -> (Vault, VaultDepositor, Strategy) {
		let mut vault = Vault {
			strategy: Pubkey::new_unique(),
			tvl_cap: UNCAPPED_TVL,
			..Vault::default()
		};
		vault.pubkey = Pubkey::new_unique();
		let depositor = VaultDepositor::new(
			vault.pubkey,
			Pubkey::new_unique(),
			0,
			0
		);
		let mut strategy = Strategy::default();
		strategy.security_fee_bps = DEFAULT_SECURITY_FEE_BPS;
		(vault, depositor, strategy)
	}

	#[test]
	fn fresh_vault_state() {
		let (vault, _, _) = fixture();
		assert_eq!(Vault::balance(0, 0).unwrap(), 0);
		assert_eq!(
			vault.price_per_full_share(0).unwrap(),
			SHARE_PRICE_PRECISION
		);
	}

	#[test]
	fn zero_deposit_is_rejected() {
		let (mut vault, mut depositor, strategy) = fixture();
		assert_eq!(
			deposit(&mut vault, &mut depositor, &strategy, 0, 0, 0, 0)
				.map(|_| ()),
			Err(ErrorCode::ZeroAmount)
		);
	}

	#[test]
	fn unbound_vault_rejects_everything() {
		let (mut vault, mut depositor, strategy) = fixture();
		vault.strategy = Pubkey::default();
		assert_eq!(
			deposit(&mut vault, &mut depositor, &strategy, 10, 0, 0, 0)
				.map(|_| ()),
			Err(ErrorCode::VaultNotInitialized)
		);
		assert_eq!(
			withdraw(&mut vault, &mut depositor, &strategy, 10, 0, 0)
				.map(|_| ()),
			Err(ErrorCode::VaultNotInitialized)
		);
	}

	#[test]
	fn pause_gates_deposits_until_unpause() {
		let (mut vault, mut depositor, mut strategy) = fixture();
		strategy.pause();
		assert_eq!(
			deposit(&mut vault, &mut depositor, &strategy, 100, 0, 0, 0)
				.map(|_| ()),
			Err(ErrorCode::StrategyPaused)
		);
		assert_eq!(vault.total_shares, 0);

		strategy.unpause();
		let outcome = deposit(
			&mut vault,
			&mut depositor,
			&strategy,
			100,
			0,
			0,
			0
		).unwrap();
		assert_eq!(outcome.shares_minted, 100);
	}

	#[test]
	fn tvl_cap_enforcement() {
		let (mut vault, mut depositor, strategy) = fixture();
		vault.tvl_cap = 1_000;

		// exactly at the cap succeeds
		deposit(&mut vault, &mut depositor, &strategy, 1_000, 0, 0, 0)
			.unwrap();

		// one unit over fails, with balances untouched
		let total_before = vault.total_shares;
		assert_eq!(
			deposit(&mut vault, &mut depositor, &strategy, 1, 1_000, 0, 0)
				.map(|_| ()),
			Err(ErrorCode::CapExceeded)
		);
		assert_eq!(vault.total_shares, total_before);
	}

	#[test]
	fn proportional_minting_across_holders() {
		let (mut vault, mut first, strategy) = fixture();
		let mut second = VaultDepositor::new(
			vault.pubkey,
			Pubkey::new_unique(),
			0,
			0
		);

		deposit(&mut vault, &mut first, &strategy, 100_000, 0, 0, 0)
			.unwrap();
		// all capital now deployed, no yield yet
		deposit(&mut vault, &mut second, &strategy, 50_000, 0, 100_000, 0)
			.unwrap();

		assert_eq!(first.shares(), 100_000);
		assert_eq!(second.shares(), 50_000);
		assert_eq!(vault.total_shares, first.shares() + second.shares());

		// after yield doubles assets, new deposits mint half the shares
		deposit(&mut vault, &mut second, &strategy, 60_000, 0, 300_000, 0)
			.unwrap();
		assert_eq!(second.shares(), 50_000 + 30_000);
		assert_eq!(vault.total_shares, first.shares() + second.shares());
	}

	#[test]
	fn deposit_fee_reduces_minted_shares() {
		let (mut vault, mut depositor, strategy) = fixture();
		vault.deposit_fee_bps = 100; // 1%

		let outcome = deposit(
			&mut vault,
			&mut depositor,
			&strategy,
			10_000,
			0,
			0,
			0
		).unwrap();
		assert_eq!(outcome.fee_shares, 100);
		assert_eq!(outcome.shares_minted, 9_900);
		assert_eq!(vault.total_shares, 9_900);
	}

	#[test]
	fn withdraw_more_than_held_fails_cleanly() {
		let (mut vault, mut depositor, strategy) = fixture();
		deposit(&mut vault, &mut depositor, &strategy, 1_000, 0, 0, 0)
			.unwrap();

		let result = withdraw(
			&mut vault,
			&mut depositor,
			&strategy,
			1_001,
			0,
			1_000
		);
		assert_eq!(result.map(|_| ()), Err(ErrorCode::InsufficientShares));
		// failure left shares fully intact
		assert_eq!(depositor.shares(), 1_000);
		assert_eq!(vault.total_shares, 1_000);
	}

	#[test]
	fn withdraw_round_trip_within_security_fee_tolerance() {
		let (mut vault, mut depositor, strategy) = fixture();
		let amount = 100_000_u64;
		deposit(&mut vault, &mut depositor, &strategy, amount, 0, 0, 0)
			.unwrap();

		// everything was deployed; withdraw-all pulls from the strategy
		let shares = depositor.shares();
		let route = withdraw(
			&mut vault,
			&mut depositor,
			&strategy,
			shares,
			0,
			amount
		).unwrap();

		let expected_fee =
			amount * (DEFAULT_SECURITY_FEE_BPS as u64) / PERCENT_DIVISOR;
		let paid_out = route.amount - route.security_fee;
		assert_eq!(route.security_fee, expected_fee);
		assert!(amount - expected_fee - paid_out <= amount / 200);

		assert_eq!(depositor.shares(), 0);
		assert_eq!(vault.total_shares, 0);
	}

	#[test]
	fn idle_balance_pays_out_first_and_fee_free() {
		let (mut vault, mut depositor, strategy) = fixture();
		deposit(&mut vault, &mut depositor, &strategy, 100_000, 0, 0, 0)
			.unwrap();

		// 30k still idle in the vault, 70k deployed
		let route = withdraw(
			&mut vault,
			&mut depositor,
			&strategy,
			50_000,
			30_000,
			70_000
		).unwrap();

		assert_eq!(route.amount, 50_000);
		assert_eq!(route.from_idle, 30_000);
		assert_eq!(route.from_strategy, 20_000);
		// fee applies only to the deployed portion
		assert_eq!(
			route.security_fee,
			20_000 * (DEFAULT_SECURITY_FEE_BPS as u64) / PERCENT_DIVISOR
		);
		assert_eq!(route.security_fee, 20);
	}

	#[test]
	fn fully_idle_withdrawal_pays_no_security_fee() {
		let (mut vault, mut depositor, strategy) = fixture();
		deposit(&mut vault, &mut depositor, &strategy, 1_000, 0, 0, 0)
			.unwrap();

		let route = withdraw(
			&mut vault,
			&mut depositor,
			&strategy,
			1_000,
			1_000,
			0
		).unwrap();
		assert_eq!(route.from_idle, 1_000);
		assert_eq!(route.from_strategy, 0);
		assert_eq!(route.security_fee, 0);
	}

	#[test]
	fn small_deposit_withdraw_round_trip() {
		let (mut vault, mut depositor, strategy) = fixture();
		// a second holder keeps the vault non-empty
		let mut other = VaultDepositor::new(
			vault.pubkey,
			Pubkey::new_unique(),
			0,
			0
		);
		deposit(&mut vault, &mut other, &strategy, 1_000_000, 0, 0, 0)
			.unwrap();

		let tiny = 7_u64;
		deposit(&mut vault, &mut depositor, &strategy, tiny, 0, 1_000_000, 0)
			.unwrap();

		let shares = depositor.shares();
		let route = withdraw(
			&mut vault,
			&mut depositor,
			&strategy,
			shares,
			0,
			1_000_000 + tiny
		).unwrap();
		assert!(route.amount <= tiny);
		// truncation dust stays with the vault, bounded by a couple units
		assert!(tiny - route.amount <= 2);
		assert_eq!(depositor.shares(), 0);
	}
}
