use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for adding an epoch
 *
 * Creates the epoch account numbered current_epoch_nr + 1 in the
 * unapproved state. Only one unapproved epoch can be in flight: the epoch
 * numbered current_epoch_nr must already be approved.
 *
 * Access Control: Agent only, while not paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddEpoch<'info> {
    /// The rewards account whose epoch counter advances
    #[account(mut)]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// The new epoch account (PDA)
    /// - Derived from: ["EpochAccount", rewards_account, current_epoch_nr + 1]
    #[account(
        init,
        payer = agent,
        space = EpochAccount::LEN,
        seeds = [
            EPOCH_SEED.as_bytes(),
            rewards_account.key().as_ref(),
            rewards_account.next_epoch_seed().as_ref()
        ],
        bump
    )]
    pub epoch_account: Account<'info, EpochAccount>,

    /// Mint of the token distributed in this epoch
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Current agent, pays for the epoch account
    #[account(mut)]
    pub agent: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Adds the next epoch
 *
 * @param ctx - The account context
 * @param bump - Bump the caller derived for the epoch PDA; must be canonical
 * @param root - Merkle root over the (index, receiver, amount) leaves
 */
pub fn handle_add_epoch(ctx: Context<AddEpoch>, bump: u8, root: [u8; 32]) -> Result<()> {
    require!(bump == ctx.bumps.epoch_account, RewardsDistributorError::InvalidBump);

    let agent = ctx.accounts.agent.key();
    let mint = ctx.accounts.mint.key();
    let rewards_account_key = ctx.accounts.rewards_account.key();
    let timestamp = Clock::get()?.unix_timestamp;

    let rewards_account = &mut ctx.accounts.rewards_account;
    let epoch_account = &mut ctx.accounts.epoch_account;

    let epoch_nr = rewards_account.add_epoch(
        &agent,
        rewards_account_key,
        epoch_account,
        bump,
        root,
        mint,
        timestamp,
    )?;

    emit_cpi!(EpochCreated {
        rewards_account: rewards_account_key,
        epoch_nr,
        hash: root,
        mint,
        timestamp,
    });

    Ok(())
}
