use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds for every derived address the program owns, plus the domain
 * separation prefixes of the claim merkle tree.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the rewards account (distributor) PDA
/// - Used in: ["RewardsDistributor", base]
/// - One rewards account per random base key
#[constant]
pub const REWARDS_DISTRIBUTOR_SEED: &str = "RewardsDistributor";

/// Seed for epoch PDA derivation
/// - Used in: ["EpochAccount", rewards_account, epoch_nr (u64 LE)]
/// - The epoch PDA is also the authority of the epoch escrow token account
#[constant]
pub const EPOCH_SEED: &str = "EpochAccount";

/// Seed for claim status PDA derivation
/// - Used in: ["ClaimStatus", rewards_account, index (u64 LE), epoch_account]
/// - The account existing is what marks a leaf as claimed
#[constant]
pub const CLAIM_STATUS_SEED: &str = "ClaimStatus";

/// ===== MERKLE TREE CONSTANTS =====

/// Prefix hashed in front of every leaf
pub const LEAF_PREFIX: &[u8] = &[0];

/// Prefix hashed in front of every internal node
pub const NODE_PREFIX: &[u8] = &[1];
