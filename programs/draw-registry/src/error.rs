use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Capacity must be greater than zero")]
    InvalidCapacity,
    #[msg("Registry account is already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not the registry authority")]
    Unauthorized,
    #[msg("Entries must be inserted at the current count")]
    IndexMismatch,
    #[msg("Registry is full")]
    CapacityExceeded,
    #[msg("Index is not below the number of inserted entries")]
    IndexOutOfRange,
    #[msg("Registry has no entries to draw from")]
    NotPopulated,
    #[msg("Every inserted entry has already been drawn")]
    DrawExhausted,
    #[msg("Account data length does not match the registry capacity")]
    AccountSizeMismatch,
    #[msg("Account data is not a valid registry")]
    InvalidAccountData,
    #[msg("Registry account is not rent exempt")]
    NotRentExempt,
    #[msg("Randomness account could not be parsed")]
    InvalidRandomnessAccount,
    #[msg("Randomness account does not match the commitment")]
    RandomnessAccountMismatch,
    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness is not resolved yet")]
    RandomnessNotResolved,
    #[msg("No pending draw commitment")]
    NoPendingCommitment,
    #[msg("A draw commitment is already pending")]
    CommitmentPending,
    #[msg("Randomness account was reseeded after the commitment")]
    RandomnessReseeded,
    #[msg("Committed randomness is revealed and must be drawn")]
    CommitmentRevealed,
    #[msg("Commitment has not timed out yet")]
    CommitmentNotExpired,
}
