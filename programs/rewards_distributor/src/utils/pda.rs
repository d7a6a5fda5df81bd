use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use crate::constants::*;
use crate::error::*;

/// Derives the program address of `seeds`, searching bumps from 255 down.
pub fn try_derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(RewardsDistributorError::AddressDerivationFailed))
}

/// ["RewardsDistributor", base]
pub fn find_rewards_account_address(base: &Pubkey) -> Result<(Pubkey, u8)> {
    try_derive_address(&[REWARDS_DISTRIBUTOR_SEED.as_bytes(), base.as_ref()], &crate::ID)
}

/// ["EpochAccount", rewards_account, epoch_nr (u64 LE)]
pub fn find_epoch_address(rewards_account: &Pubkey, epoch_nr: u64) -> Result<(Pubkey, u8)> {
    try_derive_address(
        &[
            EPOCH_SEED.as_bytes(),
            rewards_account.as_ref(),
            epoch_nr.to_le_bytes().as_ref(),
        ],
        &crate::ID,
    )
}

/// ["ClaimStatus", rewards_account, index (u64 LE), epoch_account]
pub fn find_claim_status_address(
    rewards_account: &Pubkey,
    index: u64,
    epoch_account: &Pubkey,
) -> Result<(Pubkey, u8)> {
    try_derive_address(
        &[
            CLAIM_STATUS_SEED.as_bytes(),
            rewards_account.as_ref(),
            index.to_le_bytes().as_ref(),
            epoch_account.as_ref(),
        ],
        &crate::ID,
    )
}

/// Escrow token account of an epoch: the epoch PDA's associated token account.
pub fn escrow_address(epoch_account: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(epoch_account, mint, token_program)
}
