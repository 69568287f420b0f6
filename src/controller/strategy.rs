use crate::error::{ ErrorCode, VerdantResult };
use crate::math::constants::PERCENT_DIVISOR;
use crate::math::safe_math::SafeMath;
use crate::state::paused_operations::StrategyOperation;
use crate::state::strategy::Strategy;
use crate::state::yield_source::YieldSource;
use crate::validate;

pub struct HarvestOutcome {
	pub profit: u64,
	pub caller_fee: u64,
	pub treasury_fee: u64,
	pub reinvested: u64,
	/// Deployed balance after reinvestment; recorded in the ledger.
	pub total_balance: u64,
}

/// Permissionless yield crank. Realizes profit from the venue, carves
/// the caller and treasury incentives out of profit only, reinvests the
/// remainder together with any idle want, and records the outcome. The
/// caller fee is returned so off-chain callers can simulate the payout
/// before committing.
pub fn harvest<Y: YieldSource>(
	strategy: &mut Strategy,
	farm: &mut Y,
	idle: u64,
	now: i64
) -> VerdantResult<HarvestOutcome> {
	validate!(
		!strategy.is_operation_paused(StrategyOperation::Harvest),
		ErrorCode::StrategyPaused,
		"harvest is paused"
	)?;

	let profit = farm.realize_yield()?;

	let caller_fee = profit
		.safe_mul(strategy.caller_fee_bps as u64)?
		.safe_div(PERCENT_DIVISOR)?;
	let treasury_fee = profit
		.safe_mul(strategy.treasury_fee_bps as u64)?
		.safe_div(PERCENT_DIVISOR)?;

	let reinvested = idle
		.safe_add(profit)?
		.safe_sub(caller_fee)?
		.safe_sub(treasury_fee)?;
	if reinvested > 0 {
		farm.deploy(reinvested)?;
	}

	let total_balance = farm.report_balance()?;
	strategy.harvest_log.record(now, total_balance);
	strategy.last_harvest_ts = now;

	Ok(HarvestOutcome {
		profit,
		caller_fee,
		treasury_fee,
		reinvested,
		total_balance,
	})
}

/// Emergency exit: recall every deployed unit into the strategy's own
/// custody and pause. Funds stay withdrawable.
pub fn panic<Y: YieldSource>(
	strategy: &mut Strategy,
	farm: &mut Y
) -> VerdantResult<u64> {
	let recalled = farm.recall_all()?;
	strategy.pause();
	Ok(recalled)
}

/// Amount the strategy must recall from the venue so that `needed` can
/// be paid from its custody. Returns what actually came back.
pub fn recall_for_withdrawal<Y: YieldSource>(
	farm: &mut Y,
	strategy_idle: u64,
	needed: u64
) -> VerdantResult<u64> {
	if needed <= strategy_idle {
		return Ok(0);
	}
	let shortfall = needed.safe_sub(strategy_idle)?;
	farm.recall(shortfall)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::constants::{
		DEFAULT_CALLER_FEE_BPS,
		DEFAULT_TREASURY_FEE_BPS,
	};
	use crate::state::yield_source::testing::MockYieldSource;

	fn fixture() -> (Strategy, MockYieldSource) {
		let mut strategy = Strategy::default();
		strategy.caller_fee_bps = DEFAULT_CALLER_FEE_BPS;
		strategy.treasury_fee_bps = DEFAULT_TREASURY_FEE_BPS;
		(strategy, MockYieldSource::new())
	}

	#[test]
	fn harvest_fees_come_out_of_profit_only() {
		let (mut strategy, mut farm) = fixture();
		farm.deployed = 10_000;
		farm.pending_yield = 1_000;

		let outcome = harvest(&mut strategy, &mut farm, 0, 1_000).unwrap();

		assert_eq!(outcome.profit, 1_000);
		assert_eq!(outcome.caller_fee, 5); // 50 bps of profit
		assert_eq!(outcome.treasury_fee, 40); // 400 bps of profit
		assert_eq!(outcome.reinvested, 955);
		assert_eq!(outcome.total_balance, 10_955);
		assert_eq!(farm.deployed, 10_955);
		assert_eq!(strategy.harvest_log.len, 1);
		assert_eq!(strategy.last_harvest_ts, 1_000);
	}

	#[test]
	fn profitless_harvest_charges_nothing() {
		let (mut strategy, mut farm) = fixture();
		farm.deployed = 10_000;

		let outcome = harvest(&mut strategy, &mut farm, 0, 1_000).unwrap();
		assert_eq!(outcome.profit, 0);
		assert_eq!(outcome.caller_fee, 0);
		assert_eq!(outcome.treasury_fee, 0);
		// principal is never skimmed
		assert_eq!(farm.deployed, 10_000);
	}

	#[test]
	fn harvest_sweeps_idle_want_into_the_venue() {
		let (mut strategy, mut farm) = fixture();
		farm.deployed = 5_000;

		let outcome = harvest(&mut strategy, &mut farm, 700, 1_000).unwrap();
		assert_eq!(outcome.reinvested, 700);
		assert_eq!(farm.deployed, 5_700);
	}

	#[test]
	fn harvest_fails_while_paused_and_recovers_after_unpause() {
		let (mut strategy, mut farm) = fixture();
		farm.deployed = 10_000;
		farm.pending_yield = 500;
		strategy.pause();

		assert_eq!(
			harvest(&mut strategy, &mut farm, 0, 1_000).map(|_| ()),
			Err(ErrorCode::StrategyPaused)
		);
		// nothing was realized or recorded
		assert_eq!(farm.pending_yield, 500);
		assert_eq!(strategy.harvest_log.len, 0);

		strategy.unpause();
		let outcome = harvest(&mut strategy, &mut farm, 0, 2_000).unwrap();
		assert_eq!(outcome.profit, 500);
	}

	#[test]
	fn repeated_harvests_grow_balance_and_ledger() {
		let (mut strategy, mut farm) = fixture();
		farm.deployed = 100_000;
		strategy.harvest_log.cadence = 1_800;

		let initial = farm.deployed;
		for i in 0..5_i64 {
			farm.pending_yield = 1_000;
			harvest(&mut strategy, &mut farm, 0, 1_000 + i * 3_600)
				.unwrap();
		}

		assert!(farm.deployed > initial);
		assert_eq!(strategy.harvest_log.len, 5);
		assert!(strategy.harvest_log.average_apr_bps(5) > 0);
	}

	#[test]
	fn panic_recalls_everything_and_pauses() {
		let (mut strategy, mut farm) = fixture();
		farm.deployed = 5_000;
		farm.recall_haircut_bps = 10;

		let recalled = panic(&mut strategy, &mut farm).unwrap();

		// entire deployment returned to idle custody, minus venue rounding
		assert_eq!(farm.deployed, 0);
		assert!(5_000 - recalled <= 5);
		assert!(strategy.is_paused());

		// the strategy balance now IS its idle holding
		assert_eq!(
			strategy.balance_of(recalled, farm.report_balance().unwrap()),
			recalled
		);
	}

	#[test]
	fn withdrawal_recall_only_covers_the_shortfall() {
		let (_, mut farm) = fixture();
		farm.deployed = 10_000;

		// enough idle already on hand
		assert_eq!(recall_for_withdrawal(&mut farm, 500, 400).unwrap(), 0);
		assert_eq!(farm.deployed, 10_000);

		// idle 100 short of the 600 needed
		let recalled = recall_for_withdrawal(&mut farm, 500, 600).unwrap();
		assert_eq!(recalled, 100);
		assert_eq!(farm.deployed, 9_900);
	}
}
