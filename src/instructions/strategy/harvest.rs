use anchor_lang::prelude::*;
use anchor_spl::token::{ Token, TokenAccount };

use crate::controller;
use crate::load_mut;
use crate::signer::strategy_signer_seeds;
use crate::state::events::HarvestRecord;
use crate::state::strategy::Strategy;
use crate::state::vault::Vault;
use crate::state::yield_source::TokenVaultFarm;
use crate::validation;

/// Permissionless: anyone may crank a harvest and collect the caller
/// incentive.
#[derive(Accounts)]
pub struct Harvest<'info> {
	#[account(has_one = strategy)]
	pub vault: Box<Account<'info, Vault>>,
	#[account(mut)]
	pub strategy: AccountLoader<'info, Strategy>,
	#[account(mut)]
	pub strategy_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub farm_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub reward_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub caller_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub treasury_token_account: Box<Account<'info, TokenAccount>>,
	/// CHECK: PDA owning the strategy's custody accounts
	#[account(
		seeds = [b"strategy_signer", strategy.key().as_ref()],
		bump
	)]
	pub strategy_signer: AccountInfo<'info>,
	pub caller: Signer<'info>,
	pub token_program: Program<'info, Token>,
}

/// Returns the caller fee so off-chain callers can predict the payout
/// with a read-only simulation before committing.
pub fn handle_harvest(ctx: Context<Harvest>) -> Result<u64> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;

	validation::vault::validate_strategy_custody(
		&strategy,
		&ctx.accounts.strategy_token_account.key(),
		&ctx.accounts.farm_token_account.key()
	)?;
	validation::vault::validate_reward_custody(
		&strategy,
		&ctx.accounts.reward_token_account.key()
	)?;
	validation::vault::validate_treasury(
		&strategy,
		&ctx.accounts.treasury_token_account.key()
	)?;

	let strategy_idle = ctx.accounts.strategy_token_account.amount;

	let strategy_key = ctx.accounts.strategy.key();
	let strategy_nonce = [strategy.signer_nonce];
	let strategy_seeds = strategy_signer_seeds(&strategy_key, &strategy_nonce);
	let strategy_signer_seeds_slice: [&[&[u8]]; 1] = [&strategy_seeds[..]];
	let mut farm = TokenVaultFarm::new(
		&ctx.accounts.token_program,
		&ctx.accounts.strategy_token_account,
		&ctx.accounts.farm_token_account,
		Some(&ctx.accounts.reward_token_account),
		&ctx.accounts.strategy_signer,
		&strategy_signer_seeds_slice
	);

	let outcome = controller::strategy::harvest(
		&mut strategy,
		&mut farm,
		strategy_idle,
		now
	)?;

	// pay the crank incentive, then forward the treasury cut
	controller::token::send_from_program_vault(
		&ctx.accounts.token_program,
		&ctx.accounts.strategy_token_account,
		&ctx.accounts.caller_token_account,
		&ctx.accounts.strategy_signer,
		&[&strategy_seeds[..]],
		outcome.caller_fee
	)?;
	controller::token::send_from_program_vault(
		&ctx.accounts.token_program,
		&ctx.accounts.strategy_token_account,
		&ctx.accounts.treasury_token_account,
		&ctx.accounts.strategy_signer,
		&[&strategy_seeds[..]],
		outcome.treasury_fee
	)?;

	emit!(HarvestRecord {
		ts: now,
		strategy: strategy_key,
		caller: ctx.accounts.caller.key(),
		profit: outcome.profit,
		caller_fee: outcome.caller_fee,
		treasury_fee: outcome.treasury_fee,
		reinvested: outcome.reinvested,
		total_balance: outcome.total_balance,
	});

	Ok(outcome.caller_fee)
}
