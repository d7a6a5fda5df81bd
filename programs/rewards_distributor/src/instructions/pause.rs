use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context shared by pause and unpause
 *
 * While paused every instruction except unpause is rejected with
 * ShouldNotBePaused, claims included.
 *
 * Access Control: Manager only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetPause<'info> {
    /// The rewards account to update
    #[account(mut)]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// Current manager of the distributor
    pub manager: Signer<'info>,
}

pub fn handle_pause(ctx: Context<SetPause>) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    let rewards_account = &mut ctx.accounts.rewards_account;

    rewards_account.pause(&manager)?;

    emit_cpi!(Paused {
        rewards_account: rewards_account.key(),
        is_paused: true,
    });

    Ok(())
}

pub fn handle_unpause(ctx: Context<SetPause>) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    let rewards_account = &mut ctx.accounts.rewards_account;

    rewards_account.unpause(&manager)?;

    emit_cpi!(Paused {
        rewards_account: rewards_account.key(),
        is_paused: false,
    });

    Ok(())
}
