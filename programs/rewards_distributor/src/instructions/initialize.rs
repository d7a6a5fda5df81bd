use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing a rewards distributor
 *
 * Creates the rewards account at the PDA of a fresh base key. The signer
 * paying for it becomes the manager. Running it twice for the same base
 * fails because the rewards account already exists.
 *
 * Access Control: Anyone holding a base keypair
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Random base key namespacing this distributor
    /// - Must sign so nobody can squat another party's base
    pub base: Signer<'info>,

    /// The rewards account (PDA)
    /// - Derived from: ["RewardsDistributor", base]
    #[account(
        init,
        payer = manager,
        space = RewardsAccount::LEN,
        seeds = [REWARDS_DISTRIBUTOR_SEED.as_bytes(), base.key().as_ref()],
        bump
    )]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// Becomes the manager of the distributor
    #[account(mut)]
    pub manager: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes the rewards account
 *
 * @param ctx - The account context containing base, rewards account and manager
 * @param agent - Operational key allowed to submit and correct epochs
 */
pub fn handle_initialize(ctx: Context<Initialize>, agent: Pubkey) -> Result<()> {
    require_keys_neq!(agent, Pubkey::default(), RewardsDistributorError::InvalidAgent);

    let base = ctx.accounts.base.key();
    let manager = ctx.accounts.manager.key();
    let rewards_account = &mut ctx.accounts.rewards_account;

    rewards_account.init(base, ctx.bumps.rewards_account, manager, agent);

    emit_cpi!(Initialized {
        rewards_account: rewards_account.key(),
        base,
        manager,
        agent,
        current_epoch_nr: rewards_account.current_epoch_nr,
    });

    Ok(())
}
