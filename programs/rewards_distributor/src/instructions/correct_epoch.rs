use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for correcting an epoch
 *
 * Overwrites the root, and the mint when a new one is supplied, of an epoch
 * the manager has not approved yet. This is the only way to fix a bad
 * submission; once approved the epoch is frozen.
 *
 * Access Control: Agent only, while not paused
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(epoch_nr: u64)]
pub struct CorrectEpoch<'info> {
    /// The rewards account the epoch belongs to
    pub rewards_account: Account<'info, RewardsAccount>,

    /// The epoch account to correct
    /// - Derived from: ["EpochAccount", rewards_account, epoch_nr]
    #[account(
        mut,
        seeds = [
            EPOCH_SEED.as_bytes(),
            rewards_account.key().as_ref(),
            epoch_nr.to_le_bytes().as_ref()
        ],
        bump = epoch_account.bump
    )]
    pub epoch_account: Account<'info, EpochAccount>,

    /// Replacement mint, omitted when only the root changes
    #[account(mint::token_program = token_program)]
    pub new_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Current agent
    pub agent: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_correct_epoch(ctx: Context<CorrectEpoch>, epoch_nr: u64, root: [u8; 32]) -> Result<()> {
    let agent = ctx.accounts.agent.key();
    let new_mint = ctx.accounts.new_mint.as_ref().map(|mint| mint.key());

    let rewards_account = &ctx.accounts.rewards_account;
    let epoch_account = &mut ctx.accounts.epoch_account;

    rewards_account.correct_epoch(&agent, epoch_account, root, new_mint)?;

    emit_cpi!(EpochCorrected {
        rewards_account: rewards_account.key(),
        epoch_nr,
        root,
        mint: epoch_account.mint,
    });

    Ok(())
}
