use anchor_lang::prelude::*;

use crate::math::constants::UNCAPPED_TVL;
use crate::state::vault::Vault;

#[derive(Accounts)]
pub struct UpdateVault<'info> {
	#[account(mut, has_one = authority)]
	pub vault: Box<Account<'info, Vault>>,
	pub authority: Signer<'info>,
}

pub fn handle_update_tvl_cap(
	ctx: Context<UpdateVault>,
	tvl_cap: u64
) -> Result<()> {
	let vault = &mut ctx.accounts.vault;
	msg!("updating tvl cap {} -> {}", vault.tvl_cap, tvl_cap);
	vault.tvl_cap = tvl_cap;

	Ok(())
}

pub fn handle_remove_tvl_cap(ctx: Context<UpdateVault>) -> Result<()> {
	let vault = &mut ctx.accounts.vault;
	msg!("removing tvl cap {}", vault.tvl_cap);
	vault.tvl_cap = UNCAPPED_TVL;

	Ok(())
}
