/// Basis-point denominator used by every fee ratio.
pub const PERCENT_DIVISOR: u64 = 10_000;

/// Scale of the reported price per full share.
pub const SHARE_PRICE_PRECISION: u128 = 1_000_000_000_000_000_000;

pub const ONE_YEAR: u128 = 365 * 24 * 60 * 60;

/// Withdrawals never pay more than 1% on the deployed portion.
pub const MAX_SECURITY_FEE_BPS: u16 = 100;
pub const DEFAULT_SECURITY_FEE_BPS: u16 = 10;

/// Harvest fees come out of realized profit only; caller + treasury
/// splits may never claim more than 10% of it.
pub const MAX_PROFIT_FEE_BPS: u16 = 1_000;
pub const DEFAULT_CALLER_FEE_BPS: u16 = 50;
pub const DEFAULT_TREASURY_FEE_BPS: u16 = 400;

pub const MAX_DEPOSIT_FEE_BPS: u16 = 1_000;

pub const DEFAULT_UPGRADE_TIMELOCK: i64 = 48 * 60 * 60;

/// Retention of the harvest ledger ring; also the widest APR window.
pub const HARVEST_LOG_CAP: usize = 32;

pub const MAX_STRATEGISTS: usize = 4;

pub const UNCAPPED_TVL: u64 = u64::MAX;
