#![allow(clippy::too_many_arguments)]
#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod controller;
pub mod error;
pub mod instructions;
pub mod macros;
pub mod math;
mod signer;
pub mod security;
pub mod state;
pub mod validation;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod verdant {
	use super::*;

	// Vault instructions

	pub fn initialize_vault(
		ctx: Context<InitializeVault>,
		name: [u8; 32],
		deposit_fee_bps: u16,
		tvl_cap: u64
	) -> Result<()> {
		handle_initialize_vault(ctx, name, deposit_fee_bps, tvl_cap)
	}

	pub fn initialize_vault_depositor(
		ctx: Context<InitializeVaultDepositor>
	) -> Result<()> {
		handle_initialize_vault_depositor(ctx)
	}

	pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
		handle_deposit(ctx, amount)
	}

	pub fn deposit_all(ctx: Context<Deposit>) -> Result<()> {
		handle_deposit_all(ctx)
	}

	pub fn withdraw(ctx: Context<Withdraw>, shares: u128) -> Result<()> {
		handle_withdraw(ctx, shares)
	}

	pub fn withdraw_all(ctx: Context<Withdraw>) -> Result<()> {
		handle_withdraw_all(ctx)
	}

	pub fn update_tvl_cap(
		ctx: Context<UpdateVault>,
		tvl_cap: u64
	) -> Result<()> {
		handle_update_tvl_cap(ctx, tvl_cap)
	}

	pub fn remove_tvl_cap(ctx: Context<UpdateVault>) -> Result<()> {
		handle_remove_tvl_cap(ctx)
	}

	// Strategy instructions

	pub fn initialize_strategy(
		ctx: Context<InitializeStrategy>,
		super_admin: Pubkey,
		admin: Pubkey,
		guardian: Pubkey,
		strategists: Vec<Pubkey>,
		caller_fee_bps: u16,
		treasury_fee_bps: u16,
		upgrade_timelock: i64
	) -> Result<()> {
		handle_initialize_strategy(
			ctx,
			super_admin,
			admin,
			guardian,
			strategists,
			caller_fee_bps,
			treasury_fee_bps,
			upgrade_timelock
		)
	}

	pub fn harvest(ctx: Context<Harvest>) -> Result<u64> {
		handle_harvest(ctx)
	}

	pub fn pause(ctx: Context<StrategyAdmin>) -> Result<()> {
		handle_pause(ctx)
	}

	pub fn unpause(ctx: Context<StrategyAdmin>) -> Result<()> {
		handle_unpause(ctx)
	}

	pub fn panic(ctx: Context<Panic>) -> Result<()> {
		handle_panic(ctx)
	}

	pub fn update_security_fee(
		ctx: Context<StrategyAdmin>,
		security_fee_bps: u16
	) -> Result<()> {
		handle_update_security_fee(ctx, security_fee_bps)
	}

	pub fn update_fee_splits(
		ctx: Context<StrategyAdmin>,
		caller_fee_bps: u16,
		treasury_fee_bps: u16
	) -> Result<()> {
		handle_update_fee_splits(ctx, caller_fee_bps, treasury_fee_bps)
	}

	pub fn update_harvest_log_cadence(
		ctx: Context<StrategyAdmin>,
		cadence: i64
	) -> Result<()> {
		handle_update_harvest_log_cadence(ctx, cadence)
	}

	pub fn update_role(
		ctx: Context<StrategyAdmin>,
		principal: Pubkey,
		tier: u8
	) -> Result<()> {
		handle_update_role(ctx, principal, tier)
	}

	pub fn initiate_upgrade_cooldown(
		ctx: Context<StrategyAdmin>
	) -> Result<()> {
		handle_initiate_upgrade_cooldown(ctx)
	}

	pub fn clear_upgrade_cooldown(ctx: Context<StrategyAdmin>) -> Result<()> {
		handle_clear_upgrade_cooldown(ctx)
	}

	pub fn migrate_strategy(
		ctx: Context<StrategyAdmin>,
		target_version: u16
	) -> Result<()> {
		handle_migrate_strategy(ctx, target_version)
	}

	pub fn average_apr_across_last_n_harvests(
		ctx: Context<ViewStrategy>,
		n: u64
	) -> Result<u64> {
		handle_average_apr_across_last_n_harvests(ctx, n)
	}
}
