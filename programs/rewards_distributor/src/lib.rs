use anchor_lang::prelude::*;

declare_id!("2dUMVSQkKUu1YTUrt5xW1w1A27HmnnsoDhn1QKrYPaCS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod merkle;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Rewards Distributor Program
 *
 * Distributes token rewards in discrete, strictly ordered epochs. Each epoch
 * commits to a merkle tree of (index, receiver, amount) leaves; receivers
 * claim their leaf exactly once against the escrow funded at approval.
 *
 * Key Features:
 * - Two roles: a manager (cold, two-phase handoff) and an agent (hot key
 *   submitting epochs)
 * - At most one unapproved epoch in flight; approved epochs are frozen
 * - Domain separated merkle leaves with sorted-pair internal nodes
 * - Existence of a claim status PDA is the double-claim guard
 * - Emergency pause covering every mutation except unpause
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Rewards Account PDA: roles, pause flag and epoch counters
 * - Epoch PDA: root, mint and claim budget; signs for its escrow
 * - Escrow: associated token account of the epoch PDA
 * - Claim Status PDAs: one per (epoch, leaf index)
 *
 * Workflow:
 * 1. Manager initializes the rewards account and names the agent
 * 2. Agent adds an epoch with the merkle root, correcting it if needed
 * 3. Manager approves the epoch and funds its escrow
 * 4. Receivers (or anyone paying on their behalf) claim with merkle proofs
 * 5. Agent adds the next epoch
 */
#[program]
pub mod rewards_distributor {
    use super::*;

    /**
     * Initializes a rewards account
     *
     * The signer becomes the manager. The rewards account lives at the PDA
     * of the base key, so each base key can be initialized once.
     *
     * @param ctx - Account context containing base, rewards account and manager
     * @param agent - Operational key allowed to submit epochs
     *
     * Access Control: Anyone holding a base keypair
     */
    pub fn initialize(ctx: Context<Initialize>, agent: Pubkey) -> Result<()> {
        handle_initialize(ctx, agent)
    }

    /**
     * Proposes a new manager
     *
     * @param proposed_manager - Key that must call accept_manager
     *
     * Access Control: Manager only
     * Errors: Unauthorized, ShouldNotBePaused
     */
    pub fn propose_manager(ctx: Context<ProposeManager>, proposed_manager: Pubkey) -> Result<()> {
        handle_propose_manager(ctx, proposed_manager)
    }

    /**
     * Accepts the manager role
     *
     * Access Control: Proposed manager only
     * Errors: Unauthorized, ShouldNotBePaused
     */
    pub fn accept_manager(ctx: Context<AcceptManager>) -> Result<()> {
        handle_accept_manager(ctx)
    }

    /**
     * Replaces the agent
     *
     * @param new_agent - New operational key
     *
     * Access Control: Manager only
     * Errors: Unauthorized, ShouldNotBePaused
     */
    pub fn change_agent(ctx: Context<ChangeAgent>, new_agent: Pubkey) -> Result<()> {
        handle_change_agent(ctx, new_agent)
    }

    /**
     * Pauses the program
     *
     * Access Control: Manager only
     * Errors: Unauthorized, ShouldNotBePaused (already paused)
     */
    pub fn pause(ctx: Context<SetPause>) -> Result<()> {
        handle_pause(ctx)
    }

    /**
     * Unpauses the program
     *
     * Access Control: Manager only
     * Errors: Unauthorized, ShouldBePaused (not paused)
     */
    pub fn unpause(ctx: Context<SetPause>) -> Result<()> {
        handle_unpause(ctx)
    }

    /**
     * Adds the next epoch
     *
     * @param bump - Canonical bump of the new epoch PDA
     * @param root - Merkle root of the epoch
     *
     * Access Control: Agent only
     * Errors: Unauthorized, ShouldNotBePaused, PreviousEpochIsNotApproved, InvalidBump
     */
    pub fn add_epoch(ctx: Context<AddEpoch>, bump: u8, root: [u8; 32]) -> Result<()> {
        handle_add_epoch(ctx, bump, root)
    }

    /**
     * Corrects the root (and optionally the mint) of an unapproved epoch
     *
     * @param epoch_nr - Epoch to correct
     * @param root - Corrected merkle root
     *
     * Access Control: Agent only
     * Errors: Unauthorized, ShouldNotBePaused, EpochShouldNotBeApproved
     */
    pub fn correct_epoch(ctx: Context<CorrectEpoch>, epoch_nr: u64, root: [u8; 32]) -> Result<()> {
        handle_correct_epoch(ctx, epoch_nr, root)
    }

    /**
     * Approves the current epoch and funds its escrow
     *
     * @param epoch_nr - Epoch to approve
     * @param max_total_claim - Tokens moved from the manager into the escrow
     *
     * Access Control: Manager only
     * Errors: Unauthorized, ShouldNotBePaused, NotCurrentEpoch,
     *   EpochShouldNotBeApproved, InvalidMintAccount
     */
    pub fn approve_epoch(ctx: Context<ApproveEpoch>, epoch_nr: u64, max_total_claim: u64) -> Result<()> {
        handle_approve_epoch(ctx, epoch_nr, max_total_claim)
    }

    /**
     * Claims a leaf of an approved epoch
     *
     * @param index - Leaf index
     * @param epoch_nr - Epoch of the leaf
     * @param amount - Amount in the leaf
     * @param proof - Merkle proof of the leaf
     *
     * Access Control: Any payer with a valid merkle proof
     * Errors: ShouldNotBePaused, EpochShouldBeApproved, InvalidMintAccount,
     *   InvalidProof, AlreadyInUse, ExceededMaxClaim
     */
    pub fn claim(
        ctx: Context<Claim>,
        index: u64,
        epoch_nr: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, index, epoch_nr, amount, proof)
    }
}
