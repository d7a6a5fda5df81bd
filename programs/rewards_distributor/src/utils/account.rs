use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use crate::error::*;

/// Creates a program owned PDA, failing if the address is already in use.
///
/// Unlike an `init_if_needed` account this never reuses an existing
/// account: callers rely on the failure to reject a second creation.
/// An address that was only pre-funded with lamports still counts as free
/// and is topped up, allocated and assigned in place.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    require!(
        new_account.data_is_empty() && new_account.owner == &system_program::ID,
        RewardsDistributorError::AlreadyInUse
    );

    let required_lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = new_account.lamports();

    if current_lamports == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
                &[signer_seeds],
            ),
            required_lamports,
            space as u64,
            owner,
        );
    }

    if required_lamports > current_lamports {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
            ),
            required_lamports - current_lamports,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            &[signer_seeds],
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: new_account.clone(),
            },
            &[signer_seeds],
        ),
        owner,
    )
}
