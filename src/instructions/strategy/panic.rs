use anchor_lang::prelude::*;
use anchor_spl::token::{ Token, TokenAccount };

use crate::controller;
use crate::instructions::constraints::require_tier;
use crate::load_mut;
use crate::signer::strategy_signer_seeds;
use crate::state::events::StrategyPanicRecord;
use crate::state::roles::RoleTier;
use crate::state::strategy::Strategy;
use crate::state::yield_source::TokenVaultFarm;
use crate::validation;

#[derive(Accounts)]
pub struct Panic<'info> {
	#[account(mut)]
	pub strategy: AccountLoader<'info, Strategy>,
	#[account(mut)]
	pub strategy_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub farm_token_account: Box<Account<'info, TokenAccount>>,
	/// CHECK: PDA owning the strategy's custody accounts
	#[account(
		seeds = [b"strategy_signer", strategy.key().as_ref()],
		bump
	)]
	pub strategy_signer: AccountInfo<'info>,
	pub authority: Signer<'info>,
	pub token_program: Program<'info, Token>,
}

/// Recalls every deployed unit into the strategy's own custody and
/// pauses. Withdrawals stay open throughout.
pub fn handle_panic(ctx: Context<Panic>) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut strategy = load_mut!(ctx.accounts.strategy)?;
	require_tier(
		&strategy,
		&ctx.accounts.authority.key(),
		RoleTier::Guardian
	)?;

	validation::vault::validate_strategy_custody(
		&strategy,
		&ctx.accounts.strategy_token_account.key(),
		&ctx.accounts.farm_token_account.key()
	)?;

	let strategy_key = ctx.accounts.strategy.key();
	let strategy_nonce = [strategy.signer_nonce];
	let strategy_seeds = strategy_signer_seeds(&strategy_key, &strategy_nonce);
	let strategy_signer_seeds_slice: [&[&[u8]]; 1] = [&strategy_seeds[..]];
	let mut farm = TokenVaultFarm::new(
		&ctx.accounts.token_program,
		&ctx.accounts.strategy_token_account,
		&ctx.accounts.farm_token_account,
		None,
		&ctx.accounts.strategy_signer,
		&strategy_signer_seeds_slice
	);

	let recalled = controller::strategy::panic(&mut strategy, &mut farm)?;

	emit!(StrategyPanicRecord {
		ts: now,
		strategy: strategy_key,
		recalled,
	});

	Ok(())
}
