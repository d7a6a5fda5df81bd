use anchor_lang::prelude::*;

/**
 * Claim status account
 *
 * Existence of this account is what marks a leaf as claimed. It is created
 * exactly once by claim; a second creation at the same address fails, and
 * that failure is the only double-claim guard.
 *
 * Derivation: ["ClaimStatus", rewards_account, index (u64 LE), epoch_account]
 *
 * The fields are an audit record of the claim and are never read back by
 * the program.
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Leaf index in the epoch merkle tree
    pub index: u64,
    /// Epoch the leaf belongs to
    pub epoch_nr: u64,
    /// Receiver baked into the leaf
    pub receiver: Pubkey,
    /// Amount of tokens claimed
    pub amount: u64,
    /// When the tokens were claimed
    pub claimed_at: i64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();
}
