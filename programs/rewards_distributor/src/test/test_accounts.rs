use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program;
use std::collections::BTreeSet;
use crate::error::RewardsDistributorError;
use crate::instructions::{ApproveEpoch, ApproveEpochBumps, Claim, ClaimBumps};
use crate::state::*;
use crate::test::assert_error;
use crate::test::fixtures::*;
use crate::test::ledger::TOKEN_PROGRAM;
use crate::utils::*;

/// A rewards account with epoch 1 added but not yet approved.
struct EpochFixture {
    rewards_key: Pubkey,
    rewards: RewardsAccount,
    epoch_key: Pubkey,
    epoch: EpochAccount,
    manager: Pubkey,
    mint: Pubkey,
}

impl EpochFixture {
    fn new() -> Self {
        let base = Pubkey::new_unique();
        let manager = Pubkey::new_unique();
        let agent = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let (rewards_key, bump) = find_rewards_account_address(&base).unwrap();
        let mut rewards = RewardsAccount::default();
        rewards.init(base, bump, manager, agent);

        let (epoch_key, epoch_bump) = find_epoch_address(&rewards_key, 1).unwrap();
        let mut epoch = EpochAccount::default();
        rewards
            .add_epoch(&agent, rewards_key, &mut epoch, epoch_bump, [7; 32], mint, 0)
            .unwrap();

        Self {
            rewards_key,
            rewards,
            epoch_key,
            epoch,
            manager,
            mint,
        }
    }

    fn escrow(&self) -> Pubkey {
        escrow_address(&self.epoch_key, &self.mint, &TOKEN_PROGRAM)
    }

    fn approve(&mut self, max_total_claim: u64) {
        let escrow = self.escrow();
        self.rewards
            .approve_epoch(&self.manager, &mut self.epoch, &self.mint, escrow, max_total_claim)
            .unwrap();
    }
}

struct ClaimInputs {
    mint: Pubkey,
    escrow: Pubkey,
    receiver: Pubkey,
    index: u64,
}

impl ClaimInputs {
    fn for_epoch(fixture: &EpochFixture) -> Self {
        Self {
            mint: fixture.mint,
            escrow: fixture.escrow(),
            receiver: Pubkey::new_unique(),
            index: 0,
        }
    }
}

fn validate_claim(fixture: &EpochFixture, inputs: &ClaimInputs) -> Result<()> {
    install_syscall_stubs();

    let (claim_status, _) =
        find_claim_status_address(&fixture.rewards_key, inputs.index, &fixture.epoch_key).unwrap();
    let receiver_token_account = escrow_address(&inputs.receiver, &inputs.mint, &TOKEN_PROGRAM);

    let mut accounts = account_infos(vec![
        TestAccount::state(fixture.rewards_key, &fixture.rewards),
        TestAccount::state(fixture.epoch_key, &fixture.epoch).writable(),
        TestAccount::unfunded(claim_status).writable(),
        TestAccount::mint(inputs.mint, TOKEN_PROGRAM, 6),
        TestAccount::token_account(inputs.escrow, TOKEN_PROGRAM, inputs.mint, fixture.epoch_key, 100).writable(),
        TestAccount::system(inputs.receiver),
        TestAccount::token_account(receiver_token_account, TOKEN_PROGRAM, inputs.mint, inputs.receiver, 0).writable(),
        TestAccount::system(Pubkey::new_unique()).signer().writable(),
        TestAccount::program(TOKEN_PROGRAM),
        TestAccount::program(anchor_spl::associated_token::ID),
        TestAccount::program(system_program::ID),
        TestAccount::system(event_authority()),
        TestAccount::program(crate::ID),
    ]);
    let ix_data = [inputs.index.to_le_bytes(), fixture.epoch.epoch_nr.to_le_bytes()].concat();

    Claim::try_accounts(
        &crate::ID,
        &mut accounts,
        &ix_data,
        &mut ClaimBumps::default(),
        &mut BTreeSet::new(),
    )
    .map(|_| ())
}

fn validate_approval(fixture: &EpochFixture, mint: Pubkey) -> Result<()> {
    install_syscall_stubs();

    let escrow = escrow_address(&fixture.epoch_key, &mint, &TOKEN_PROGRAM);
    let manager_token_account = escrow_address(&fixture.manager, &mint, &TOKEN_PROGRAM);

    let mut accounts = account_infos(vec![
        TestAccount::state(fixture.rewards_key, &fixture.rewards).writable(),
        TestAccount::state(fixture.epoch_key, &fixture.epoch).writable(),
        TestAccount::mint(mint, TOKEN_PROGRAM, 6),
        TestAccount::token_account(escrow, TOKEN_PROGRAM, mint, fixture.epoch_key, 0).writable(),
        TestAccount::token_account(manager_token_account, TOKEN_PROGRAM, mint, fixture.manager, 1_000).writable(),
        TestAccount::system(fixture.manager).signer().writable(),
        TestAccount::program(TOKEN_PROGRAM),
        TestAccount::program(anchor_spl::associated_token::ID),
        TestAccount::program(system_program::ID),
        TestAccount::system(event_authority()),
        TestAccount::program(crate::ID),
    ]);
    let ix_data = fixture.epoch.epoch_nr.to_le_bytes();

    ApproveEpoch::try_accounts(
        &crate::ID,
        &mut accounts,
        &ix_data,
        &mut ApproveEpochBumps::default(),
        &mut BTreeSet::new(),
    )
    .map(|_| ())
}

// ===== CLAIM ACCOUNTS =====

#[test]
fn test_claim_accounts_valid() {
    let mut fixture = EpochFixture::new();
    fixture.approve(100);
    let inputs = ClaimInputs::for_epoch(&fixture);

    validate_claim(&fixture, &inputs).unwrap();
}

#[test]
fn test_claim_accounts_wrong_mint() {
    let mut fixture = EpochFixture::new();
    fixture.approve(100);
    let inputs = ClaimInputs {
        mint: Pubkey::new_unique(),
        ..ClaimInputs::for_epoch(&fixture)
    };

    assert_error(validate_claim(&fixture, &inputs), RewardsDistributorError::InvalidMintAccount);
}

#[test]
fn test_claim_accounts_unapproved_epoch() {
    let fixture = EpochFixture::new();
    let inputs = ClaimInputs::for_epoch(&fixture);

    assert_error(validate_claim(&fixture, &inputs), RewardsDistributorError::EpochShouldBeApproved);
}

#[test]
fn test_claim_accounts_unapproved_epoch_and_wrong_mint() {
    let fixture = EpochFixture::new();
    let inputs = ClaimInputs {
        mint: Pubkey::new_unique(),
        ..ClaimInputs::for_epoch(&fixture)
    };

    assert_error(validate_claim(&fixture, &inputs), RewardsDistributorError::EpochShouldBeApproved);
}

#[test]
fn test_claim_accounts_while_paused() {
    let mut fixture = EpochFixture::new();
    fixture.approve(100);
    let manager = fixture.manager;
    fixture.rewards.pause(&manager).unwrap();
    let inputs = ClaimInputs::for_epoch(&fixture);

    assert_error(validate_claim(&fixture, &inputs), RewardsDistributorError::ShouldNotBePaused);
}

#[test]
fn test_claim_accounts_wrong_escrow() {
    let mut fixture = EpochFixture::new();
    fixture.approve(100);
    // Right mint and authority, but not the escrow recorded at approval
    let inputs = ClaimInputs {
        escrow: Pubkey::new_unique(),
        ..ClaimInputs::for_epoch(&fixture)
    };

    assert_error(
        validate_claim(&fixture, &inputs),
        anchor_lang::error::ErrorCode::ConstraintAddress,
    );
}

// ===== APPROVE ACCOUNTS =====

#[test]
fn test_approve_accounts_valid() {
    let fixture = EpochFixture::new();

    validate_approval(&fixture, fixture.mint).unwrap();
}

#[test]
fn test_approve_accounts_wrong_mint() {
    let fixture = EpochFixture::new();

    assert_error(
        validate_approval(&fixture, Pubkey::new_unique()),
        RewardsDistributorError::InvalidMintAccount,
    );
}

// ===== CLAIM STATUS CREATION =====

fn create_claim_status(account: TestAccount) -> Result<()> {
    install_syscall_stubs();

    let infos = account_infos(vec![
        TestAccount::system(Pubkey::new_unique()).signer().writable(),
        account.writable(),
        TestAccount::program(system_program::ID),
    ]);
    create_pda_account(
        &infos[0],
        &infos[1],
        &infos[2],
        ClaimStatus::LEN,
        &crate::ID,
        &[b"claim-status-test".as_ref()],
    )
}

#[test]
fn test_create_pda_account_fresh_address() {
    create_claim_status(TestAccount::unfunded(Pubkey::new_unique())).unwrap();
}

#[test]
fn test_create_pda_account_prefunded_address() {
    let account = TestAccount {
        lamports: 1,
        ..TestAccount::system(Pubkey::new_unique())
    };

    create_claim_status(account).unwrap();
}

#[test]
fn test_create_pda_account_existing_claim_status() {
    let status = ClaimStatus {
        index: 3,
        epoch_nr: 1,
        receiver: Pubkey::new_unique(),
        amount: 10,
        claimed_at: 0,
    };

    assert_error(
        create_claim_status(TestAccount::state(Pubkey::new_unique(), &status)),
        RewardsDistributorError::AlreadyInUse,
    );
}

#[test]
fn test_create_pda_account_foreign_owner() {
    let account = TestAccount::new(Pubkey::new_unique(), crate::ID, vec![]);

    assert_error(create_claim_status(account), RewardsDistributorError::AlreadyInUse);
}

#[test]
fn test_create_pda_account_system_owned_with_data() {
    let account = TestAccount::new(Pubkey::new_unique(), system_program::ID, vec![0; 8]);

    assert_error(create_claim_status(account), RewardsDistributorError::AlreadyInUse);
}

// ===== TOKEN TRANSFERS =====

#[test]
fn test_transfer_token_from_manager_and_escrow() {
    install_syscall_stubs();
    let mut fixture = EpochFixture::new();
    fixture.approve(100);
    let receiver = Pubkey::new_unique();

    let infos = account_infos(vec![
        TestAccount::system(fixture.manager).signer(),
        TestAccount::state(fixture.epoch_key, &fixture.epoch),
        TestAccount::token_account(Pubkey::new_unique(), TOKEN_PROGRAM, fixture.mint, fixture.manager, 100).writable(),
        TestAccount::token_account(fixture.escrow(), TOKEN_PROGRAM, fixture.mint, fixture.epoch_key, 0).writable(),
        TestAccount::token_account(Pubkey::new_unique(), TOKEN_PROGRAM, fixture.mint, receiver, 0).writable(),
        TestAccount::mint(fixture.mint, TOKEN_PROGRAM, 6),
        TestAccount::program(TOKEN_PROGRAM),
    ]);
    let [manager, epoch, manager_tokens, escrow, receiver_tokens, mint, token_program] = infos else {
        panic!("unexpected account count");
    };

    // Funding: the manager signs
    transfer_token(
        manager.clone(),
        manager_tokens.clone(),
        escrow.clone(),
        mint.clone(),
        token_program.clone(),
        100,
        6,
        None,
    )
    .unwrap();

    // Payout: the epoch PDA signs with its seeds
    let epoch_nr_bytes = fixture.epoch.epoch_nr.to_le_bytes();
    let epoch_bump = [fixture.epoch.bump];
    let seeds = &[
        crate::constants::EPOCH_SEED.as_bytes(),
        fixture.rewards_key.as_ref(),
        epoch_nr_bytes.as_ref(),
        &epoch_bump,
    ];
    assert_eq!(
        Pubkey::create_program_address(seeds, &crate::ID).unwrap(),
        fixture.epoch_key
    );
    transfer_token(
        epoch.clone(),
        escrow.clone(),
        receiver_tokens.clone(),
        mint.clone(),
        token_program.clone(),
        40,
        6,
        Some(&[&seeds[..]]),
    )
    .unwrap();
}
