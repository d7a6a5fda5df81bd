use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for proposing a new manager
 *
 * First half of the two-phase manager handoff. The proposed key only
 * becomes manager once it signs accept_manager, so a mistyped key can be
 * overwritten by proposing again.
 *
 * Access Control: Manager only, while not paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ProposeManager<'info> {
    /// The rewards account to update
    #[account(mut)]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// Current manager of the distributor
    pub manager: Signer<'info>,
}

pub fn handle_propose_manager(ctx: Context<ProposeManager>, proposed_manager: Pubkey) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    let rewards_account = &mut ctx.accounts.rewards_account;

    rewards_account.propose_manager(&manager, proposed_manager)?;

    emit_cpi!(NewProposedManager {
        rewards_account: rewards_account.key(),
        proposed_manager,
    });

    Ok(())
}
