use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for accepting the manager role
 *
 * Second half of the manager handoff. Clears the pending proposal.
 *
 * Access Control: Proposed manager only, while not paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AcceptManager<'info> {
    /// The rewards account to update
    #[account(mut)]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// Must match the pending proposed_manager
    pub proposed_manager: Signer<'info>,
}

pub fn handle_accept_manager(ctx: Context<AcceptManager>) -> Result<()> {
    let new_manager = ctx.accounts.proposed_manager.key();
    let rewards_account = &mut ctx.accounts.rewards_account;

    let previous_manager = rewards_account.accept_manager(&new_manager)?;

    emit_cpi!(AdminUpdated {
        rewards_account: rewards_account.key(),
        previous_manager,
        new_manager,
    });

    Ok(())
}
