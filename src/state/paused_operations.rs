use anchor_lang::prelude::msg;

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum StrategyOperation {
	Deposit = 0b00000001,
	Deploy = 0b00000010,
	Harvest = 0b00000100,
}

const ALL_STRATEGY_OPERATIONS: [StrategyOperation; 3] = [
	StrategyOperation::Deposit,
	StrategyOperation::Deploy,
	StrategyOperation::Harvest,
];

impl StrategyOperation {
	/// Withdrawals are deliberately absent: user funds are never trapped.
	pub const ALL: u8 = (StrategyOperation::Deposit as u8) |
		(StrategyOperation::Deploy as u8) |
		(StrategyOperation::Harvest as u8);

	pub fn is_operation_paused(current: u8, operation: StrategyOperation) -> bool {
		(current & (operation as u8)) != 0
	}

	pub fn log_all_operations_paused(current: u8) {
		for operation in ALL_STRATEGY_OPERATIONS.iter() {
			if Self::is_operation_paused(current, *operation) {
				msg!("{:?} is paused", operation);
			}
		}
	}
}
