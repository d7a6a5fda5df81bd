use anchor_lang::prelude::*;

/// Event emitted when a rewards account is initialized
#[event]
pub struct Initialized {
    /// The rewards account public key
    pub rewards_account: Pubkey,
    /// Base key the rewards account is derived from
    pub base: Pubkey,
    /// Manager that initialized the rewards account
    pub manager: Pubkey,
    /// Agent set by the manager
    pub agent: Pubkey,
    /// Current epoch number (always 0)
    pub current_epoch_nr: u64,
}

/// Event emitted when a manager handoff is proposed
#[event]
pub struct NewProposedManager {
    pub rewards_account: Pubkey,
    /// Pubkey that must call accept_manager to take over
    pub proposed_manager: Pubkey,
}

/// Event emitted when the proposed manager accepts the role
#[event]
pub struct AdminUpdated {
    pub rewards_account: Pubkey,
    pub previous_manager: Pubkey,
    pub new_manager: Pubkey,
}

/// Event emitted when the agent is changed
#[event]
pub struct AgentChanged {
    pub rewards_account: Pubkey,
    pub new_agent: Pubkey,
}

/// Event emitted when the program is paused or unpaused
#[event]
pub struct Paused {
    pub rewards_account: Pubkey,
    pub is_paused: bool,
}

/// Event emitted when the agent submits a new epoch
#[event]
pub struct EpochCreated {
    pub rewards_account: Pubkey,
    pub epoch_nr: u64,
    /// Merkle root of the epoch
    pub hash: [u8; 32],
    /// Mint of the token distributed in the epoch
    pub mint: Pubkey,
    /// Unix timestamp of the submission
    pub timestamp: i64,
}

/// Event emitted when an unapproved epoch is corrected
#[event]
pub struct EpochCorrected {
    pub rewards_account: Pubkey,
    pub epoch_nr: u64,
    pub root: [u8; 32],
    pub mint: Pubkey,
}

/// Event emitted when the manager approves and funds an epoch
#[event]
pub struct EpochApproved {
    pub rewards_account: Pubkey,
    pub epoch_nr: u64,
    /// Amount moved into the epoch escrow
    pub max_total_claim: u64,
    /// Escrow token account funded by the approval
    pub escrow: Pubkey,
}

/// Event emitted when a leaf is claimed
#[event]
pub struct ClaimedEvent {
    /// Index of the claim in the merkle tree
    pub index: u64,
    /// Receiver baked into the leaf
    pub receiver: Pubkey,
    /// Amount transferred to the receiver
    pub amount: u64,
    pub epoch_nr: u64,
}
