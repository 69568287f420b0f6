use anchor_lang::prelude::*;
use anchor_spl::token::{ Mint, Token, TokenAccount };

use crate::error::ErrorCode;
use crate::math::constants::DEFAULT_SECURITY_FEE_BPS;
use crate::state::roles::RoleRegistry;
use crate::state::strategy::Strategy;
use crate::state::traits::Size;
use crate::state::upgrade::UpgradeGovernor;
use crate::state::vault::Vault;
use crate::validate;

#[derive(Accounts)]
pub struct InitializeStrategy<'info> {
	#[account(mut, has_one = authority)]
	pub vault: Box<Account<'info, Vault>>,
	#[account(
		init,
		seeds = [b"strategy", vault.key().as_ref()],
		space = Strategy::SIZE,
		bump,
		payer = authority
	)]
	pub strategy: AccountLoader<'info, Strategy>,
	/// CHECK: PDA owning the strategy's custody accounts
	#[account(
		seeds = [b"strategy_signer", strategy.key().as_ref()],
		bump
	)]
	pub strategy_signer: AccountInfo<'info>,
	#[account(constraint = want_mint.key() == vault.want_mint)]
	pub want_mint: Box<Account<'info, Mint>>,
	#[account(
		init,
		seeds = [b"strategy_tokens", strategy.key().as_ref()],
		bump,
		payer = authority,
		token::mint = want_mint,
		token::authority = strategy_signer
	)]
	pub strategy_token_account: Box<Account<'info, TokenAccount>>,
	#[account(
		init,
		seeds = [b"farm_tokens", strategy.key().as_ref()],
		bump,
		payer = authority,
		token::mint = want_mint,
		token::authority = strategy_signer
	)]
	pub farm_token_account: Box<Account<'info, TokenAccount>>,
	#[account(
		init,
		seeds = [b"reward_tokens", strategy.key().as_ref()],
		bump,
		payer = authority,
		token::mint = want_mint,
		token::authority = strategy_signer
	)]
	pub reward_token_account: Box<Account<'info, TokenAccount>>,
	#[account(constraint = treasury_token_account.mint == vault.want_mint)]
	pub treasury_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub authority: Signer<'info>,
	pub rent: Sysvar<'info, Rent>,
	pub system_program: Program<'info, System>,
	pub token_program: Program<'info, Token>,
}

/// Shared account set for role-gated strategy administration; each
/// handler enforces its own minimum tier against the registry.
#[derive(Accounts)]
pub struct StrategyAdmin<'info> {
	#[account(mut)]
	pub strategy: AccountLoader<'info, Strategy>,
	pub authority: Signer<'info>,
}

pub fn handle_initialize_strategy(
	ctx: Context<InitializeStrategy>,
	super_admin: Pubkey,
	admin: Pubkey,
	guardian: Pubkey,
	strategists: Vec<Pubkey>,
	caller_fee_bps: u16,
	treasury_fee_bps: u16,
	upgrade_timelock: i64
) -> Result<()> {
	// one-time binding: a vault pairs with exactly one strategy
	validate!(
		!ctx.accounts.vault.is_initialized(),
		ErrorCode::VaultAlreadyInitialized,
		"vault already bound to strategy {}",
		ctx.accounts.vault.strategy
	)?;

	validate!(
		upgrade_timelock > 0,
		ErrorCode::DefaultError,
		"upgrade timelock must be positive"
	)?;

	let vault_pubkey = ctx.accounts.vault.key();
	let strategy_pubkey = ctx.accounts.strategy.key();
	let roles = RoleRegistry::new(
		super_admin,
		admin,
		guardian,
		&strategists
	)?;

	let mut strategy = ctx.accounts.strategy.load_init()?;
	*strategy = Strategy {
		pubkey: strategy_pubkey,
		vault: vault_pubkey,
		want_mint: ctx.accounts.want_mint.key(),
		token_account: ctx.accounts.strategy_token_account.key(),
		farm_token_account: ctx.accounts.farm_token_account.key(),
		reward_token_account: ctx.accounts.reward_token_account.key(),
		treasury: ctx.accounts.treasury_token_account.key(),
		roles,
		upgrade: UpgradeGovernor::new(upgrade_timelock),
		security_fee_bps: DEFAULT_SECURITY_FEE_BPS,
		bump: ctx.bumps.strategy,
		signer_nonce: ctx.bumps.strategy_signer,
		..Strategy::default()
	};
	strategy.set_fee_splits(caller_fee_bps, treasury_fee_bps)?;

	ctx.accounts.vault.strategy = strategy_pubkey;

	Ok(())
}
