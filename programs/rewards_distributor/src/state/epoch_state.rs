use anchor_lang::prelude::*;
use crate::error::*;
use crate::merkle::verify_claim_proof;

/**
 * Epoch state account
 *
 * One batch of reward claims committed under a single merkle root.
 *
 * Derivation: ["EpochAccount", rewards_account, epoch_nr (u64 LE)]
 *
 * Lifecycle:
 * 1. Created unapproved by add_epoch (agent)
 * 2. Root and mint may be overwritten by correct_epoch while unapproved
 * 3. Locked and funded by approve_epoch (manager)
 * 4. Claims draw from the escrow until max_total_claim is exhausted
 *
 * Design Notes:
 * - The epoch PDA signs for its escrow token account, so no private key
 *   ever controls the pooled rewards
 */
#[account]
#[derive(Default, Debug)]
pub struct EpochAccount {
    /// Rewards account this epoch belongs to
    pub rewards_account: Pubkey,

    /// Epoch number, starting at 1
    pub epoch_nr: u64,

    /// Bump seed for PDA derivation
    /// - Saved to sign escrow transfers during claims
    pub bump: u8,

    /// The 256-bit merkle root
    pub root: [u8; 32],

    /// Mint of the token distributed in this epoch
    pub mint: Pubkey,

    /// Set by approve_epoch; root and mint are frozen afterwards
    pub is_approved: bool,

    /// Escrow token account funded at approval
    /// - Associated token account of this epoch PDA for `mint`
    pub escrow: Pubkey,

    /// Maximum number of tokens that can ever be claimed from this epoch
    pub max_total_claim: u64,

    /// Total amount of tokens that have been claimed
    pub total_amount_claimed: u64,

    /// Number of leaves that have been claimed
    pub num_nodes_claimed: u64,

    /// Unix timestamp of add_epoch
    pub created_at: i64,
}

impl EpochAccount {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<EpochAccount>();

    pub fn open(
        &mut self,
        rewards_account: Pubkey,
        epoch_nr: u64,
        bump: u8,
        root: [u8; 32],
        mint: Pubkey,
        created_at: i64,
    ) {
        self.rewards_account = rewards_account;
        self.epoch_nr = epoch_nr;
        self.bump = bump;
        self.root = root;
        self.mint = mint;
        self.is_approved = false;
        self.escrow = Pubkey::default();
        self.max_total_claim = 0;
        self.total_amount_claimed = 0;
        self.num_nodes_claimed = 0;
        self.created_at = created_at;
    }

    pub fn correct(&mut self, root: [u8; 32], mint: Option<Pubkey>) -> Result<()> {
        require!(!self.is_approved, RewardsDistributorError::EpochShouldNotBeApproved);
        require!(root != [0; 32], RewardsDistributorError::InvalidRoot);

        self.root = root;
        if let Some(mint) = mint {
            self.mint = mint;
        }
        Ok(())
    }

    pub fn approve(&mut self, mint: &Pubkey, escrow: Pubkey, max_total_claim: u64) -> Result<()> {
        require!(!self.is_approved, RewardsDistributorError::EpochShouldNotBeApproved);
        require_keys_eq!(*mint, self.mint, RewardsDistributorError::InvalidMintAccount);

        self.is_approved = true;
        self.escrow = escrow;
        self.max_total_claim = max_total_claim;
        Ok(())
    }

    /// Checks a claim against this epoch without touching any state.
    pub fn verify_claim(
        &self,
        mint: &Pubkey,
        index: u64,
        receiver: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        require!(self.is_approved, RewardsDistributorError::EpochShouldBeApproved);
        require_keys_eq!(*mint, self.mint, RewardsDistributorError::InvalidMintAccount);
        require!(
            verify_claim_proof(index, receiver, amount, proof, self.root),
            RewardsDistributorError::InvalidProof
        );
        Ok(())
    }

    /// Books a verified claim against the epoch budget.
    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        let total_amount_claimed = self
            .total_amount_claimed
            .checked_add(amount)
            .ok_or(RewardsDistributorError::ArithmeticOverflow)?;
        require!(
            total_amount_claimed <= self.max_total_claim,
            RewardsDistributorError::ExceededMaxClaim
        );
        let num_nodes_claimed = self
            .num_nodes_claimed
            .checked_add(1)
            .ok_or(RewardsDistributorError::ArithmeticOverflow)?;

        self.total_amount_claimed = total_amount_claimed;
        self.num_nodes_claimed = num_nodes_claimed;
        Ok(())
    }
}
