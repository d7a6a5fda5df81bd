use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::EpochAccount;

/**
 * Rewards account (one per distributor instance)
 *
 * Holds the two roles, the pause flag and the epoch counters of one
 * distributor. Every instruction handler funnels its role and ordering
 * checks through the methods below, so the account is the single place
 * that decides whether a call may mutate state.
 *
 * Derivation: ["RewardsDistributor", base]
 *
 * Lifecycle:
 * 1. Created by initialize
 * 2. Roles rotated by propose_manager / accept_manager / change_agent
 * 3. Epoch counters advanced by add_epoch and approve_epoch
 * 4. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct RewardsAccount {
    /// Random base key the PDA is derived from
    pub base: Pubkey,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Administrative owner
    /// - Approves and funds epochs, rotates the agent, pauses the program
    pub manager: Pubkey,

    /// Pending manager of a two-phase handoff
    /// - Pubkey::default() when no handoff is pending
    pub proposed_manager: Pubkey,

    /// Operational signer that submits and corrects epochs
    pub agent: Pubkey,

    /// Emergency stop on every mutation except unpause
    pub is_paused: bool,

    /// Number of the latest epoch created by add_epoch
    pub current_epoch_nr: u64,

    /// Number of the latest epoch approved by the manager
    /// - Invariant: current_approved_epoch <= current_epoch_nr
    pub current_approved_epoch: u64,
}

impl RewardsAccount {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<RewardsAccount>();

    pub fn init(&mut self, base: Pubkey, bump: u8, manager: Pubkey, agent: Pubkey) {
        self.base = base;
        self.bump = bump;
        self.manager = manager;
        self.proposed_manager = Pubkey::default();
        self.agent = agent;
        self.is_paused = false;
        self.current_epoch_nr = 0;
        self.current_approved_epoch = 0;
    }

    pub fn require_manager(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.manager, RewardsDistributorError::Unauthorized);
        Ok(())
    }

    pub fn require_agent(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.agent, RewardsDistributorError::Unauthorized);
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, RewardsDistributorError::ShouldNotBePaused);
        Ok(())
    }

    pub fn has_pending_manager(&self) -> bool {
        self.proposed_manager != Pubkey::default()
    }

    /// Whether the epoch numbered `current_epoch_nr` has been approved.
    /// Only the current epoch can ever be approved, so comparing the two
    /// counters is enough.
    pub fn is_current_epoch_approved(&self) -> bool {
        self.current_approved_epoch == self.current_epoch_nr
    }

    /// Seed of the epoch add_epoch will create. Saturates so that account
    /// validation never overflows; add_epoch then rejects the counter.
    pub fn next_epoch_seed(&self) -> [u8; 8] {
        self.current_epoch_nr.saturating_add(1).to_le_bytes()
    }

    // ===== ROLE MANAGEMENT =====

    pub fn propose_manager(&mut self, signer: &Pubkey, proposed_manager: Pubkey) -> Result<()> {
        self.require_manager(signer)?;
        self.require_not_paused()?;
        require_keys_neq!(
            proposed_manager,
            Pubkey::default(),
            RewardsDistributorError::InvalidProposedManager
        );

        self.proposed_manager = proposed_manager;
        Ok(())
    }

    /// Completes the handoff and returns the previous manager.
    pub fn accept_manager(&mut self, signer: &Pubkey) -> Result<Pubkey> {
        require!(self.has_pending_manager(), RewardsDistributorError::Unauthorized);
        require_keys_eq!(*signer, self.proposed_manager, RewardsDistributorError::Unauthorized);
        self.require_not_paused()?;

        let previous_manager = self.manager;
        self.manager = self.proposed_manager;
        self.proposed_manager = Pubkey::default();
        Ok(previous_manager)
    }

    pub fn change_agent(&mut self, signer: &Pubkey, new_agent: Pubkey) -> Result<()> {
        self.require_manager(signer)?;
        self.require_not_paused()?;
        require_keys_neq!(new_agent, Pubkey::default(), RewardsDistributorError::InvalidAgent);

        self.agent = new_agent;
        Ok(())
    }

    pub fn pause(&mut self, signer: &Pubkey) -> Result<()> {
        self.require_manager(signer)?;
        self.require_not_paused()?;

        self.is_paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, signer: &Pubkey) -> Result<()> {
        self.require_manager(signer)?;
        require!(self.is_paused, RewardsDistributorError::ShouldBePaused);

        self.is_paused = false;
        Ok(())
    }

    // ===== EPOCH LIFECYCLE =====

    /// Opens the next epoch in `epoch`.
    ///
    /// `epoch` must be the freshly created account at the PDA of
    /// `current_epoch_nr + 1`; the caller checks that through seeds.
    /// Returns the new epoch number.
    pub fn add_epoch(
        &mut self,
        signer: &Pubkey,
        rewards_account: Pubkey,
        epoch: &mut EpochAccount,
        bump: u8,
        root: [u8; 32],
        mint: Pubkey,
        created_at: i64,
    ) -> Result<u64> {
        self.require_agent(signer)?;
        self.require_not_paused()?;
        require!(
            self.is_current_epoch_approved(),
            RewardsDistributorError::PreviousEpochIsNotApproved
        );
        require!(root != [0; 32], RewardsDistributorError::InvalidRoot);

        let epoch_nr = self
            .current_epoch_nr
            .checked_add(1)
            .ok_or(RewardsDistributorError::ArithmeticOverflow)?;

        epoch.open(rewards_account, epoch_nr, bump, root, mint, created_at);
        self.current_epoch_nr = epoch_nr;
        Ok(epoch_nr)
    }

    pub fn correct_epoch(
        &self,
        signer: &Pubkey,
        epoch: &mut EpochAccount,
        root: [u8; 32],
        mint: Option<Pubkey>,
    ) -> Result<()> {
        self.require_agent(signer)?;
        self.require_not_paused()?;

        epoch.correct(root, mint)
    }

    /// Locks `epoch` and records it as the latest approved epoch.
    /// The caller moves `max_total_claim` into `escrow` in the same call.
    pub fn approve_epoch(
        &mut self,
        signer: &Pubkey,
        epoch: &mut EpochAccount,
        mint: &Pubkey,
        escrow: Pubkey,
        max_total_claim: u64,
    ) -> Result<()> {
        self.require_manager(signer)?;
        self.require_not_paused()?;
        require!(
            epoch.epoch_nr == self.current_epoch_nr,
            RewardsDistributorError::NotCurrentEpoch
        );

        epoch.approve(mint, escrow, max_total_claim)?;
        self.current_approved_epoch = epoch.epoch_nr;
        Ok(())
    }
}
