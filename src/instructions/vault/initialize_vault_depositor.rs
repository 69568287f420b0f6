use anchor_lang::prelude::*;

use crate::state::traits::Size;
use crate::state::vault::{ Vault, VaultDepositor };

#[derive(Accounts)]
pub struct InitializeVaultDepositor<'info> {
	pub vault: Box<Account<'info, Vault>>,
	#[account(
		init,
		seeds = [
			b"vault_depositor",
			vault.key().as_ref(),
			authority.key().as_ref(),
		],
		space = VaultDepositor::SIZE,
		bump,
		payer = payer
	)]
	pub vault_depositor: AccountLoader<'info, VaultDepositor>,
	pub authority: Signer<'info>,
	#[account(mut)]
	pub payer: Signer<'info>,
	pub rent: Sysvar<'info, Rent>,
	pub system_program: Program<'info, System>,
}

pub fn handle_initialize_vault_depositor(
	ctx: Context<InitializeVaultDepositor>
) -> Result<()> {
	let mut vault_depositor = ctx.accounts.vault_depositor.load_init()?;
	*vault_depositor = VaultDepositor::new(
		ctx.accounts.vault.key(),
		ctx.accounts.authority.key(),
		ctx.bumps.vault_depositor,
		Clock::get()?.unix_timestamp
	);

	Ok(())
}
