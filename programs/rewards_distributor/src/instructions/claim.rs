use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{create_pda_account, transfer_token};

/**
 * Account context for claiming a leaf
 *
 * Anyone may submit the claim and pay for it; the tokens always go to the
 * receiver baked into the leaf. The claim status account is created by the
 * handler rather than by an init constraint so the proof is checked first
 * and a replay surfaces as AlreadyInUse.
 *
 * Pause, approval and mint are checked here, ahead of the escrow
 * constraints, so those failures report their own errors.
 *
 * Access Control: Any payer with a valid merkle proof, while not paused
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u64, epoch_nr: u64)]
pub struct Claim<'info> {
    /// The rewards account the epoch belongs to
    #[account(constraint = !rewards_account.is_paused @ RewardsDistributorError::ShouldNotBePaused)]
    pub rewards_account: Account<'info, RewardsAccount>,

    /// The approved epoch holding the root
    /// - Derived from: ["EpochAccount", rewards_account, epoch_nr]
    #[account(
        mut,
        seeds = [
            EPOCH_SEED.as_bytes(),
            rewards_account.key().as_ref(),
            epoch_nr.to_le_bytes().as_ref()
        ],
        bump = epoch_account.bump,
        constraint = epoch_account.is_approved @ RewardsDistributorError::EpochShouldBeApproved
    )]
    pub epoch_account: Account<'info, EpochAccount>,

    /// Claim status for this leaf, must not exist yet
    /// CHECK: Created in the handler; the seeds pin the canonical address
    #[account(
        mut,
        seeds = [
            CLAIM_STATUS_SEED.as_bytes(),
            rewards_account.key().as_ref(),
            index.to_le_bytes().as_ref(),
            epoch_account.key().as_ref()
        ],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,

    /// The token mint, must match the epoch mint
    #[account(
        mint::token_program = token_program,
        constraint = mint.key() == epoch_account.mint @ RewardsDistributorError::InvalidMintAccount
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Escrow token account of the epoch, as recorded at approval
    #[account(
        mut,
        address = epoch_account.escrow,
        token::mint = mint,
        token::authority = epoch_account,
        token::token_program = token_program,
    )]
    pub escrow: InterfaceAccount<'info, TokenAccount>,

    /// Receiver of the leaf, does not need to sign
    /// CHECK: Only used as the leaf account and token account authority
    pub receiver: UncheckedAccount<'info>,

    /// Receiver's associated token account, created if missing
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = receiver,
        associated_token::token_program = token_program,
    )]
    pub receiver_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Pays for the claim status and any missing token account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated token program for the receiver account
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Processes a claim with merkle proof verification
 *
 * @param ctx - The account context
 * @param index - Leaf index in the epoch tree
 * @param epoch_nr - Epoch the leaf belongs to
 * @param amount - Amount baked into the leaf
 * @param proof - Sibling hashes from the leaf to the root
 *
 * Validation Process:
 * 1. Program not paused, epoch approved, mint matches, proof verifies
 * 2. Claim status created at its canonical address (fails on replay)
 * 3. Amount booked against max_total_claim
 * 4. Escrow pays the receiver, signed by the epoch PDA
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    index: u64,
    epoch_nr: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let receiver = ctx.accounts.receiver.key();
    let mint = ctx.accounts.mint.key();
    let rewards_account_key = ctx.accounts.rewards_account.key();
    let epoch_account_key = ctx.accounts.epoch_account.key();

    // ===== VALIDATION PHASE =====

    ctx.accounts.rewards_account.require_not_paused()?;
    ctx.accounts
        .epoch_account
        .verify_claim(&mint, index, &receiver, amount, &proof)?;
    require_keys_neq!(
        ctx.accounts.escrow.key(),
        ctx.accounts.receiver_token_account.key()
    );

    // ===== EFFECTS PHASE =====

    let index_bytes = index.to_le_bytes();
    let claim_status_bump = [ctx.bumps.claim_status];
    let claim_status_seeds: &[&[u8]] = &[
        CLAIM_STATUS_SEED.as_bytes(),
        rewards_account_key.as_ref(),
        index_bytes.as_ref(),
        epoch_account_key.as_ref(),
        &claim_status_bump,
    ];
    create_pda_account(
        &ctx.accounts.payer.to_account_info(),
        &ctx.accounts.claim_status.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        ClaimStatus::LEN,
        &crate::ID,
        claim_status_seeds,
    )?;

    let claim_status = ClaimStatus {
        index,
        epoch_nr,
        receiver,
        amount,
        claimed_at: Clock::get()?.unix_timestamp,
    };
    {
        let mut data = ctx.accounts.claim_status.try_borrow_mut_data()?;
        claim_status.try_serialize(&mut &mut data[..])?;
    }

    ctx.accounts.epoch_account.record_claim(amount)?;

    // ===== INTERACTIONS PHASE =====

    let epoch_nr_bytes = epoch_nr.to_le_bytes();
    let epoch_bump = [ctx.accounts.epoch_account.bump];
    let seeds = &[
        EPOCH_SEED.as_bytes(),
        rewards_account_key.as_ref(),
        epoch_nr_bytes.as_ref(),
        &epoch_bump,
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.epoch_account.to_account_info(),
        ctx.accounts.escrow.to_account_info(),
        ctx.accounts.receiver_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        Some(signer), // Epoch PDA owns the escrow
    )?;

    emit_cpi!(ClaimedEvent {
        index,
        receiver,
        amount,
        epoch_nr,
    });

    Ok(())
}
