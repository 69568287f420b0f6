use anchor_lang::prelude::*;

#[derive(Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq, Debug)]
pub enum CooldownAction {
	Initiated,
	Cleared,
}

#[event]
pub struct VaultDepositRecord {
	/// unix_timestamp of action
	pub ts: i64,
	pub vault: Pubkey,
	pub authority: Pubkey,
	pub amount: u64,
	pub shares_minted: u128,
	pub fee_shares: u128,
	pub total_shares_after: u128,
}

#[event]
pub struct VaultWithdrawRecord {
	pub ts: i64,
	pub vault: Pubkey,
	pub authority: Pubkey,
	pub shares_burned: u128,
	/// gross asset entitlement before the security fee
	pub amount: u64,
	pub from_idle: u64,
	pub from_strategy: u64,
	pub security_fee: u64,
	pub total_shares_after: u128,
}

#[event]
pub struct HarvestRecord {
	pub ts: i64,
	pub strategy: Pubkey,
	pub caller: Pubkey,
	pub profit: u64,
	pub caller_fee: u64,
	pub treasury_fee: u64,
	pub reinvested: u64,
	pub total_balance: u64,
}

#[event]
pub struct StrategyPauseRecord {
	pub ts: i64,
	pub strategy: Pubkey,
	pub paused_operations: u8,
}

#[event]
pub struct StrategyPanicRecord {
	pub ts: i64,
	pub strategy: Pubkey,
	pub recalled: u64,
}

#[event]
pub struct RoleUpdateRecord {
	pub ts: i64,
	pub strategy: Pubkey,
	pub principal: Pubkey,
	pub tier: u8,
}

#[event]
pub struct UpgradeCooldownRecord {
	pub ts: i64,
	pub strategy: Pubkey,
	pub action: CooldownAction,
}

#[event]
pub struct StrategyMigrationRecord {
	pub ts: i64,
	pub strategy: Pubkey,
	pub from_version: u16,
	pub to_version: u16,
}
