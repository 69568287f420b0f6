use anchor_lang::prelude::*;
use anchor_spl::token::{ Token, TokenAccount };

use crate::controller;
use crate::math::safe_math::SafeMath;
use crate::signer::{ strategy_signer_seeds, vault_signer_seeds };
use crate::state::events::VaultWithdrawRecord;
use crate::state::strategy::Strategy;
use crate::state::vault::{ Vault, VaultDepositor };
use crate::state::yield_source::TokenVaultFarm;
use crate::validation;
use crate::{ load, load_mut };

#[derive(Accounts)]
pub struct Withdraw<'info> {
	#[account(mut, has_one = strategy)]
	pub vault: Box<Account<'info, Vault>>,
	pub strategy: AccountLoader<'info, Strategy>,
	#[account(
		mut,
		seeds = [
			b"vault_depositor",
			vault.key().as_ref(),
			authority.key().as_ref(),
		],
		bump,
		has_one = authority
	)]
	pub vault_depositor: AccountLoader<'info, VaultDepositor>,
	#[account(mut)]
	pub vault_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub strategy_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub farm_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub user_token_account: Box<Account<'info, TokenAccount>>,
	/// CHECK: PDA owning the vault's idle custody
	#[account(
		seeds = [b"vault_signer", vault.key().as_ref()],
		bump = vault.signer_nonce
	)]
	pub vault_signer: AccountInfo<'info>,
	/// CHECK: PDA owning the strategy's custody accounts
	#[account(
		seeds = [b"strategy_signer", strategy.key().as_ref()],
		bump
	)]
	pub strategy_signer: AccountInfo<'info>,
	pub authority: Signer<'info>,
	pub token_program: Program<'info, Token>,
}

pub fn handle_withdraw(ctx: Context<Withdraw>, shares: u128) -> Result<()> {
	withdraw_shares(ctx, shares)
}

pub fn handle_withdraw_all(ctx: Context<Withdraw>) -> Result<()> {
	let shares = ctx.accounts.vault_depositor.load()?.shares();
	withdraw_shares(ctx, shares)
}

/// Shares burn before any asset leaves custody. The vault's idle
/// balance pays first; the shortfall is recalled from the venue into
/// strategy custody and paid net of the security fee, which stays
/// behind for the remaining holders.
fn withdraw_shares(ctx: Context<Withdraw>, shares: u128) -> Result<()> {
	let now = Clock::get()?.unix_timestamp;

	let mut vault_depositor = load_mut!(ctx.accounts.vault_depositor)?;
	let strategy = load!(ctx.accounts.strategy)?;

	validation::vault::validate_vault_custody(
		&ctx.accounts.vault,
		&ctx.accounts.vault_token_account.key()
	)?;
	validation::vault::validate_strategy_custody(
		&strategy,
		&ctx.accounts.strategy_token_account.key(),
		&ctx.accounts.farm_token_account.key()
	)?;

	let idle = ctx.accounts.vault_token_account.amount;
	let strategy_idle = ctx.accounts.strategy_token_account.amount;
	let deployed = ctx.accounts.farm_token_account.amount;
	let strategy_balance = strategy.balance_of(strategy_idle, deployed);

	let route = controller::vault::withdraw(
		&mut ctx.accounts.vault,
		&mut vault_depositor,
		&strategy,
		shares,
		idle,
		strategy_balance
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

	controller::strategy::recall_for_withdrawal(
		&mut farm,
		strategy_idle,
		route.from_strategy
	)?;

	// idle leg pays out fee-free
	let vault_key = ctx.accounts.vault.key();
	let vault_nonce = [ctx.accounts.vault.signer_nonce];
	let vault_seeds = vault_signer_seeds(&vault_key, &vault_nonce);
	controller::token::send_from_program_vault(
		&ctx.accounts.token_program,
		&ctx.accounts.vault_token_account,
		&ctx.accounts.user_token_account,
		&ctx.accounts.vault_signer,
		&[&vault_seeds[..]],
		route.from_idle
	)?;

	// strategy leg pays net of the security fee
	let net_from_strategy = route.from_strategy
		.safe_sub(route.security_fee)?;
	controller::token::send_from_program_vault(
		&ctx.accounts.token_program,
		&ctx.accounts.strategy_token_account,
		&ctx.accounts.user_token_account,
		&ctx.accounts.strategy_signer,
		&[&strategy_seeds[..]],
		net_from_strategy
	)?;

	emit!(VaultWithdrawRecord {
		ts: now,
		vault: vault_key,
		authority: ctx.accounts.authority.key(),
		shares_burned: shares,
		amount: route.amount,
		from_idle: route.from_idle,
		from_strategy: route.from_strategy,
		security_fee: route.security_fee,
		total_shares_after: ctx.accounts.vault.total_shares,
	});

	Ok(())
}
