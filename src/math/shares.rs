use crate::error::{ ErrorCode, VerdantResult };
use crate::math::bn::U192;
use crate::math::casting::Cast;
use crate::math::constants::SHARE_PRICE_PRECISION;
use crate::validate;

/// Shares minted for a deposit of `amount` against the pre-deposit totals.
/// Truncates toward zero, so rounding dust always stays with the vault.
pub fn vault_amount_to_shares(
	amount: u64,
	total_shares: u128,
	total_assets: u64
) -> VerdantResult<u128> {
	if total_shares == 0 {
		return amount.cast::<u128>();
	}

	validate!(
		total_assets > 0,
		ErrorCode::MathError,
		"vault has {} shares outstanding against zero assets",
		total_shares
	)?;

	U192::from(amount)
		.checked_mul(U192::from(total_shares))
		.ok_or(ErrorCode::MathError)?
		.checked_div(U192::from(total_assets))
		.ok_or(ErrorCode::MathError)?
		.try_to_u128()
}

/// Asset entitlement for burning `shares`. Truncates toward zero.
pub fn shares_to_vault_amount(
	shares: u128,
	total_shares: u128,
	total_assets: u64
) -> VerdantResult<u64> {
	validate!(
		total_shares > 0,
		ErrorCode::MathError,
		"no shares outstanding"
	)?;

	U192::from(shares)
		.checked_mul(U192::from(total_assets))
		.ok_or(ErrorCode::MathError)?
		.checked_div(U192::from(total_shares))
		.ok_or(ErrorCode::MathError)?
		.try_to_u64()
}

/// `total_assets * 1e18 / total_shares`, or 1e18 for an empty vault.
pub fn price_per_full_share(
	total_assets: u64,
	total_shares: u128
) -> VerdantResult<u128> {
	if total_shares == 0 {
		return Ok(SHARE_PRICE_PRECISION);
	}

	U192::from(total_assets)
		.checked_mul(U192::from(SHARE_PRICE_PRECISION))
		.ok_or(ErrorCode::MathError)?
		.checked_div(U192::from(total_shares))
		.ok_or(ErrorCode::MathError)?
		.try_to_u128()
}
