use anchor_lang::prelude::Pubkey;

pub const VAULT_SIGNER_SEED: &[u8] = b"vault_signer";
pub const STRATEGY_SIGNER_SEED: &[u8] = b"strategy_signer";

/// Seeds for the PDA owning a vault's idle custody.
pub fn vault_signer_seeds<'a>(
	vault: &'a Pubkey,
	nonce: &'a [u8; 1]
) -> [&'a [u8]; 3] {
	[VAULT_SIGNER_SEED, vault.as_ref(), nonce]
}

/// Seeds for the PDA owning a strategy's custody accounts.
pub fn strategy_signer_seeds<'a>(
	strategy: &'a Pubkey,
	nonce: &'a [u8; 1]
) -> [&'a [u8]; 3] {
	[STRATEGY_SIGNER_SEED, strategy.as_ref(), nonce]
}
