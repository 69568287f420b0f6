use anchor_lang::prelude::*;
use anchor_spl::token::{ Mint, Token, TokenAccount };

use crate::error::ErrorCode;
use crate::math::constants::MAX_DEPOSIT_FEE_BPS;
use crate::state::traits::Size;
use crate::state::vault::Vault;
use crate::validate;

#[derive(Accounts)]
pub struct InitializeVault<'info> {
	#[account(
		init,
		seeds = [b"vault", want_mint.key().as_ref()],
		space = Vault::SIZE,
		bump,
		payer = authority
	)]
	pub vault: Box<Account<'info, Vault>>,
	pub want_mint: Box<Account<'info, Mint>>,
	/// CHECK: PDA owning the vault's idle custody
	#[account(
		seeds = [b"vault_signer", vault.key().as_ref()],
		bump
	)]
	pub vault_signer: AccountInfo<'info>,
	#[account(
		init,
		seeds = [b"vault_tokens", vault.key().as_ref()],
		bump,
		payer = authority,
		token::mint = want_mint,
		token::authority = vault_signer
	)]
	pub vault_token_account: Box<Account<'info, TokenAccount>>,
	#[account(mut)]
	pub authority: Signer<'info>,
	pub rent: Sysvar<'info, Rent>,
	pub system_program: Program<'info, System>,
	pub token_program: Program<'info, Token>,
}

pub fn handle_initialize_vault(
	ctx: Context<InitializeVault>,
	name: [u8; 32],
	deposit_fee_bps: u16,
	tvl_cap: u64
) -> Result<()> {
	validate!(
		deposit_fee_bps <= MAX_DEPOSIT_FEE_BPS,
		ErrorCode::InvalidFee,
		"deposit fee {} above max {}",
		deposit_fee_bps,
		MAX_DEPOSIT_FEE_BPS
	)?;

	let vault_pubkey = ctx.accounts.vault.key();
	let vault = &mut ctx.accounts.vault;

	vault.pubkey = vault_pubkey;
	vault.authority = ctx.accounts.authority.key();
	vault.want_mint = ctx.accounts.want_mint.key();
	vault.token_account = ctx.accounts.vault_token_account.key();
	vault.strategy = Pubkey::default();
	vault.name = name;
	vault.total_shares = 0;
	vault.tvl_cap = tvl_cap;
	vault.deposit_fee_bps = deposit_fee_bps;
	vault.bump = ctx.bumps.vault;
	vault.signer_nonce = ctx.bumps.vault_signer;

	Ok(())
}
