use anchor_lang::prelude::*;

pub type VerdantResult<T = ()> = std::result::Result<T, ErrorCode>;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
	#[msg("Unauthorized access")]
	Unauthorized,
	#[msg("Strategy is paused")]
	StrategyPaused,
	#[msg("Upgrade timelock has not been satisfied")]
	UpgradeNotReady,
	#[msg("Deposit would exceed the vault tvl cap")]
	CapExceeded,
	#[msg("Withdrawal exceeds the holder share balance")]
	InsufficientShares,
	#[msg("Amount must be greater than zero")]
	ZeroAmount,
	#[msg("Vault has already been initialized with a strategy")]
	VaultAlreadyInitialized,
	#[msg("Vault has not been initialized with a strategy")]
	VaultNotInitialized,
	#[msg("Strategy does not match the vault")]
	InvalidStrategy,
	#[msg("Fee exceeds the configured maximum")]
	InvalidFee,
	#[msg("Invalid role tier")]
	InvalidRole,
	#[msg("No free strategist slot")]
	StrategistSlotsFull,
	#[msg("Migration version must increase by exactly one")]
	InvalidMigrationVersion,
	#[msg("Vault custody account mismatch")]
	InvalidVaultCustody,
	#[msg("Strategy custody account mismatch")]
	InvalidStrategyCustody,
	#[msg("Invalid treasury account")]
	InvalidTreasury,
	#[msg("Capital deployment venue call failed")]
	YieldSourceFailure,
	#[msg("Math Error")]
	MathError,
	#[msg("Conversion to u128/u64 failed with an overflow or underflow")]
	BnConversionError,
	#[msg("Casting Failure")]
	CastingFailure,
	#[msg("Unable To Load AccountLoader")]
	UnableToLoadAccountLoader,
	#[msg("DefaultError")]
	DefaultError,
}
