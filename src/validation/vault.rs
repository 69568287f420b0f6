use anchor_lang::prelude::Pubkey;

use crate::error::{ ErrorCode, VerdantResult };
use crate::state::strategy::Strategy;
use crate::state::vault::Vault;
use crate::validate;

pub fn validate_vault_custody(
	vault: &Vault,
	token_account: &Pubkey
) -> VerdantResult {
	validate!(
		vault.token_account.eq(token_account),
		ErrorCode::InvalidVaultCustody,
		"token account {} is not the vault's idle custody",
		token_account
	)?;

	Ok(())
}

pub fn validate_strategy_custody(
	strategy: &Strategy,
	token_account: &Pubkey,
	farm_token_account: &Pubkey
) -> VerdantResult {
	validate!(
		strategy.token_account.eq(token_account),
		ErrorCode::InvalidStrategyCustody,
		"token account {} is not the strategy's idle custody",
		token_account
	)?;

	validate!(
		strategy.farm_token_account.eq(farm_token_account),
		ErrorCode::InvalidStrategyCustody,
		"token account {} is not the strategy's deployed custody",
		farm_token_account
	)?;

	Ok(())
}

pub fn validate_reward_custody(
	strategy: &Strategy,
	reward_token_account: &Pubkey
) -> VerdantResult {
	validate!(
		strategy.reward_token_account.eq(reward_token_account),
		ErrorCode::InvalidStrategyCustody,
		"token account {} is not the strategy's reward inflow",
		reward_token_account
	)?;

	Ok(())
}

pub fn validate_treasury(
	strategy: &Strategy,
	treasury_token_account: &Pubkey
) -> VerdantResult {
	validate!(
		strategy.treasury.eq(treasury_token_account),
		ErrorCode::InvalidTreasury,
		"treasury account mismatch"
	)?;

	Ok(())
}
