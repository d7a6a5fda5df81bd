use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for approving an epoch
 *
 * Freezes the current epoch and funds its escrow. The escrow is the
 * associated token account of the epoch PDA, so only the program can move
 * the pooled tokens, and only through claim.
 *
 * Access Control: Manager only, while not paused
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(epoch_nr: u64)]
pub struct ApproveEpoch<'info> {
    /// The rewards account recording the approval
    #[account(mut)]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// The epoch account to approve
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

    /// The token mint, must match the epoch mint
    #[account(
        mint::token_program = token_program,
        constraint = mint.key() == epoch_account.mint @ RewardsDistributorError::InvalidMintAccount
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Escrow token account of the epoch
    /// - Created on first approval, owned by the epoch PDA
    #[account(
        init_if_needed,
        payer = manager,
        associated_token::mint = mint,
        associated_token::authority = epoch_account,
        associated_token::token_program = token_program,
    )]
    pub escrow: InterfaceAccount<'info, TokenAccount>,

    /// Manager's token account funding the escrow
    #[account(
        mut,
        token::mint = mint,
        token::authority = manager,
        token::token_program = token_program,
    )]
    pub manager_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Current manager
    #[account(mut)]
    pub manager: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated token program for the escrow
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Approves and funds an epoch
 *
 * @param ctx - The account context
 * @param epoch_nr - Epoch to approve, must be the current epoch
 * @param max_total_claim - Amount (base units) moved into the escrow; caps the epoch's claims
 */
pub fn handle_approve_epoch(ctx: Context<ApproveEpoch>, epoch_nr: u64, max_total_claim: u64) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    let mint = ctx.accounts.mint.key();
    let escrow = ctx.accounts.escrow.key();

    // ===== VALIDATION + EFFECTS =====

    let rewards_account = &mut ctx.accounts.rewards_account;
    let epoch_account = &mut ctx.accounts.epoch_account;
    rewards_account.approve_epoch(&manager, epoch_account, &mint, escrow, max_total_claim)?;
    let rewards_account_key = rewards_account.key();

    // ===== INTERACTIONS =====

    transfer_token(
        ctx.accounts.manager.to_account_info(),
        ctx.accounts.manager_token_account.to_account_info(),
        ctx.accounts.escrow.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        max_total_claim,
        ctx.accounts.mint.decimals,
        None, // Manager signs the funding transfer
    )?;

    emit_cpi!(EpochApproved {
        rewards_account: rewards_account_key,
        epoch_nr,
        max_total_claim,
        escrow,
    });

    Ok(())
}
