use anchor_lang::prelude::*;
use anchor_spl::token::{ self, Token, TokenAccount, Transfer };

/// Pull want from a user wallet into program custody.
pub fn receive<'info>(
	token_program: &Program<'info, Token>,
	from: &Account<'info, TokenAccount>,
	to: &Account<'info, TokenAccount>,
	authority: &Signer<'info>,
	amount: u64
) -> Result<()> {
	if amount == 0 {
		return Ok(());
	}

	let cpi_accounts = Transfer {
		from: from.to_account_info(),
		to: to.to_account_info(),
		authority: authority.to_account_info(),
	};
	let cpi_program = token_program.to_account_info();
	let cpi_context = CpiContext::new(cpi_program, cpi_accounts);
	token::transfer(cpi_context, amount)
}

/// Move want out of a program-owned custody account, signed by the
/// owning PDA.
pub fn send_from_program_vault<'info>(
	token_program: &Program<'info, Token>,
	from: &Account<'info, TokenAccount>,
	to: &Account<'info, TokenAccount>,
	authority: &AccountInfo<'info>,
	signer_seeds: &[&[&[u8]]],
	amount: u64
) -> Result<()> {
	if amount == 0 {
		return Ok(());
	}

	let cpi_accounts = Transfer {
		from: from.to_account_info(),
		to: to.to_account_info(),
		authority: authority.to_account_info(),
	};
	let cpi_program = token_program.to_account_info();
	let cpi_context = CpiContext::new_with_signer(
		cpi_program,
		cpi_accounts,
		signer_seeds
	);
	token::transfer(cpi_context, amount)
}
