use anchor_lang::prelude::*;

use crate::error::{ ErrorCode, VerdantResult };
use crate::validate;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpgradeState {
	Idle,
	CooldownActive,
	Ready,
}

/// Cooldown/timelock gate in front of strategy code replacement.
/// Readiness is a pure time predicate over the recorded initiation
/// timestamp; it is never stored. `timelock` is fixed at construction.
#[zero_copy(unsafe)]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct UpgradeGovernor {
	pub cooldown_initiated_ts: i64,
	pub timelock: i64,
}

impl UpgradeGovernor {
	pub fn new(timelock: i64) -> Self {
		UpgradeGovernor {
			cooldown_initiated_ts: 0,
			timelock,
		}
	}

	pub fn state(&self, now: i64) -> UpgradeState {
		if self.cooldown_initiated_ts == 0 {
			UpgradeState::Idle
		} else if
			now.saturating_sub(self.cooldown_initiated_ts) >= self.timelock
		{
			UpgradeState::Ready
		} else {
			UpgradeState::CooldownActive
		}
	}

	pub fn initiate(&mut self, now: i64) {
		self.cooldown_initiated_ts = now;
		msg!("upgrade cooldown initiated, ready at {}", now + self.timelock);
	}

	pub fn clear(&mut self) {
		self.cooldown_initiated_ts = 0;
	}

	/// Consumes readiness for exactly one upgrade; resets to Idle so a
	/// chained upgrade must re-initiate the cooldown from scratch.
	pub fn consume(&mut self, now: i64) -> VerdantResult {
		validate!(
			self.state(now) == UpgradeState::Ready,
			ErrorCode::UpgradeNotReady,
			"cooldown initiated at {}, timelock {}s",
			self.cooldown_initiated_ts,
			self.timelock
		)?;

		self.cooldown_initiated_ts = 0;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TIMELOCK: i64 = 48 * 60 * 60;

	#[test]
	fn consume_without_initiation_fails() {
		let mut governor = UpgradeGovernor::new(TIMELOCK);
		assert_eq!(governor.state(1_000), UpgradeState::Idle);
		assert_eq!(governor.consume(1_000), Err(ErrorCode::UpgradeNotReady));
	}

	#[test]
	fn consume_before_timelock_fails() {
		let mut governor = UpgradeGovernor::new(TIMELOCK);
		governor.initiate(1_000);
		assert_eq!(governor.state(1_000), UpgradeState::CooldownActive);

		// one unit short of the boundary
		assert_eq!(
			governor.consume(1_000 + TIMELOCK - 1),
			Err(ErrorCode::UpgradeNotReady)
		);
	}

	#[test]
	fn consume_at_boundary_succeeds_exactly_once() {
		let mut governor = UpgradeGovernor::new(TIMELOCK);
		governor.initiate(1_000);

		assert_eq!(governor.state(1_000 + TIMELOCK), UpgradeState::Ready);
		assert_eq!(governor.consume(1_000 + TIMELOCK), Ok(()));

		// chained upgrade must start over
		assert_eq!(
			governor.consume(1_000 + 2 * TIMELOCK),
			Err(ErrorCode::UpgradeNotReady)
		);

		governor.initiate(1_000 + 2 * TIMELOCK);
		assert_eq!(
			governor.consume(1_000 + 2 * TIMELOCK + 10),
			Err(ErrorCode::UpgradeNotReady)
		);
		assert_eq!(governor.consume(1_000 + 3 * TIMELOCK), Ok(()));
	}

	#[test]
	fn readiness_persists_until_consumed() {
		let mut governor = UpgradeGovernor::new(TIMELOCK);
		governor.initiate(1_000);
		let much_later = 1_000 + 400 * TIMELOCK;
		assert_eq!(governor.state(much_later), UpgradeState::Ready);
		assert_eq!(governor.consume(much_later), Ok(()));
	}

	#[test]
	fn clear_resets_to_idle() {
		let mut governor = UpgradeGovernor::new(TIMELOCK);
		governor.initiate(1_000);
		governor.clear();
		assert_eq!(governor.state(1_000 + TIMELOCK), UpgradeState::Idle);
		assert_eq!(
			governor.consume(1_000 + TIMELOCK),
			Err(ErrorCode::UpgradeNotReady)
		);
	}
}
