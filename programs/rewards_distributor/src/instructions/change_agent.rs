use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for rotating the agent
 *
 * The agent is the hot key that submits epochs day to day. Rotating it
 * does not touch the manager, so a leaked agent key is contained here.
 *
 * Access Control: Manager only, while not paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ChangeAgent<'info> {
    /// The rewards account to update
    #[account(mut)]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// Current manager of the distributor
    pub manager: Signer<'info>,
}

pub fn handle_change_agent(ctx: Context<ChangeAgent>, new_agent: Pubkey) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    let rewards_account = &mut ctx.accounts.rewards_account;

    rewards_account.change_agent(&manager, new_agent)?;

    emit_cpi!(AgentChanged {
        rewards_account: rewards_account.key(),
        new_agent,
    });

    Ok(())
}
