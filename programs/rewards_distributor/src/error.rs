use anchor_lang::prelude::*;

#[error_code]
#[derive(Eq, PartialEq)]
pub enum RewardsDistributorError {
    // Access control errors
    #[msg("Unauthorized signer")]
    Unauthorized,
    #[msg("Proposed manager cannot be the default pubkey")]
    InvalidProposedManager,
    #[msg("Agent cannot be the default pubkey")]
    InvalidAgent,

    // Pause errors
    #[msg("Program should not be paused")]
    ShouldNotBePaused,
    #[msg("Program should be paused")]
    ShouldBePaused,

    // Epoch lifecycle errors
    #[msg("Previous epoch is not approved")]
    PreviousEpochIsNotApproved,
    #[msg("Epoch should not be approved")]
    EpochShouldNotBeApproved,
    #[msg("Epoch should be approved")]
    EpochShouldBeApproved,
    #[msg("Only the current epoch can be approved")]
    NotCurrentEpoch,
    #[msg("Bump does not match the canonical epoch bump")]
    InvalidBump,
    #[msg("Merkle root cannot be empty")]
    InvalidRoot,

    // Claim errors
    #[msg("Mint does not match the epoch mint")]
    InvalidMintAccount,
    #[msg("Invalid Proof")]
    InvalidProof,
    #[msg("Account already in use")]
    AlreadyInUse,
    #[msg("Exceeded Max Claim")]
    ExceededMaxClaim,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("No valid bump found for seeds")]
    AddressDerivationFailed,

    // Off-chain tree construction errors
    #[msg("Cannot build a merkle tree without leaves")]
    EmptyMerkleTree,
    #[msg("Duplicate leaf index")]
    DuplicateLeafIndex,
}
