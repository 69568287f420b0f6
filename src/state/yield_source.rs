use anchor_lang::prelude::*;
use anchor_spl::token::{ Token, TokenAccount };

use crate::controller;
use crate::error::{ ErrorCode, VerdantResult };
use crate::math::safe_math::SafeMath;

/// Capability seam in front of the external capital-deployment venue.
/// The core never hard-wires a farm: instruction handlers hand a
/// CPI-backed adapter to the controller, tests hand a mock. Failures
/// propagate as harvest/deploy failures.
pub trait YieldSource {
	/// Commit idle want to the deployment venue.
	fn deploy(&mut self, amount: u64) -> VerdantResult;

	/// Pull `amount` back into strategy custody. Returns what actually
	/// came back, which may be less under venue slippage.
	fn recall(&mut self, amount: u64) -> VerdantResult<u64>;

	/// Pull everything back into strategy custody.
	fn recall_all(&mut self) -> VerdantResult<u64>;

	/// Capital currently working in the venue.
	fn report_balance(&self) -> VerdantResult<u64>;

	/// Claim accrued yield into strategy custody; returns the realized
	/// profit, already denominated in the want asset.
	fn realize_yield(&mut self) -> VerdantResult<u64>;
}

/// Production adapter over the strategy's custody accounts. Balances
/// are tracked arithmetically from the amounts observed at instruction
/// entry, so within one atomic operation the adapter never reads a
/// token account made stale by its own transfers.
pub struct TokenVaultFarm<'a, 'info> {
	token_program: &'a Program<'info, Token>,
	strategy_token_account: &'a Account<'info, TokenAccount>,
	farm_token_account: &'a Account<'info, TokenAccount>,
	reward_token_account: Option<&'a Account<'info, TokenAccount>>,
	strategy_signer: &'a AccountInfo<'info>,
	signer_seeds: &'a [&'a [&'a [u8]]],
	deployed: u64,
}

impl<'a, 'info> TokenVaultFarm<'a, 'info> {
	pub fn new(
		token_program: &'a Program<'info, Token>,
		strategy_token_account: &'a Account<'info, TokenAccount>,
		farm_token_account: &'a Account<'info, TokenAccount>,
		reward_token_account: Option<&'a Account<'info, TokenAccount>>,
		strategy_signer: &'a AccountInfo<'info>,
		signer_seeds: &'a [&'a [&'a [u8]]]
	) -> Self {
		let deployed = farm_token_account.amount;
		TokenVaultFarm {
			token_program,
			strategy_token_account,
			farm_token_account,
			reward_token_account,
			strategy_signer,
			signer_seeds,
			deployed,
		}
	}

	fn venue_failure(e: anchor_lang::error::Error) -> ErrorCode {
		msg!("yield source cpi failed: {:?}", e);
		ErrorCode::YieldSourceFailure
	}
}

impl YieldSource for TokenVaultFarm<'_, '_> {
	fn deploy(&mut self, amount: u64) -> VerdantResult {
		controller::token::send_from_program_vault(
			self.token_program,
			self.strategy_token_account,
			self.farm_token_account,
			self.strategy_signer,
			self.signer_seeds,
			amount
		).map_err(Self::venue_failure)?;
		self.deployed = self.deployed.safe_add(amount)?;
		Ok(())
	}

	fn recall(&mut self, amount: u64) -> VerdantResult<u64> {
		let recalled = amount.min(self.deployed);
		controller::token::send_from_program_vault(
			self.token_program,
			self.farm_token_account,
			self.strategy_token_account,
			self.strategy_signer,
			self.signer_seeds,
			recalled
		).map_err(Self::venue_failure)?;
		self.deployed = self.deployed.safe_sub(recalled)?;
		Ok(recalled)
	}

	fn recall_all(&mut self) -> VerdantResult<u64> {
		let deployed = self.deployed;
		self.recall(deployed)
	}

	fn report_balance(&self) -> VerdantResult<u64> {
		Ok(self.deployed)
	}

	fn realize_yield(&mut self) -> VerdantResult<u64> {
		let reward_token_account = self.reward_token_account
			.ok_or(ErrorCode::YieldSourceFailure)?;
		let profit = reward_token_account.amount;
		controller::token::send_from_program_vault(
			self.token_program,
			reward_token_account,
			self.strategy_token_account,
			self.strategy_signer,
			self.signer_seeds,
			profit
		).map_err(Self::venue_failure)?;
		Ok(profit)
	}
}

#[cfg(test)]
pub mod testing {
	use super::*;

	/// In-memory venue with configurable pending yield and a recall
	/// haircut to model deployment-protocol slippage.
	pub struct MockYieldSource {
		pub deployed: u64,
		pub pending_yield: u64,
		pub recall_haircut_bps: u64,
	}

	impl MockYieldSource {
		pub fn new() -> Self {
			MockYieldSource {
				deployed: 0,
				pending_yield: 0,
				recall_haircut_bps: 0,
			}
		}
	}

	impl YieldSource for MockYieldSource {
		fn deploy(&mut self, amount: u64) -> VerdantResult {
			self.deployed += amount;
			Ok(())
		}

		fn recall(&mut self, amount: u64) -> VerdantResult<u64> {
			let recalled = amount.min(self.deployed);
			self.deployed -= recalled;
			let haircut = recalled * self.recall_haircut_bps / 10_000;
			Ok(recalled - haircut)
		}

		fn recall_all(&mut self) -> VerdantResult<u64> {
			let deployed = self.deployed;
			self.recall(deployed)
		}

		fn report_balance(&self) -> VerdantResult<u64> {
			Ok(self.deployed)
		}

		fn realize_yield(&mut self) -> VerdantResult<u64> {
			let profit = self.pending_yield;
			self.pending_yield = 0;
			Ok(profit)
		}
	}
}
