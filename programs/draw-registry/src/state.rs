use anchor_lang::prelude::*;

/// Fixed header of a registry account.
///
/// Only used for its discriminator and the IDL. The account itself is much
/// larger than this struct: the header is followed by a borsh vector of
/// `capacity` 32-byte entries and a borsh vector holding the used-entry
/// bitset. Reads and writes go through [`crate::layout`].
#[account]
pub struct Registry {
    /// The signer allowed to insert entries.
    pub authority: Pubkey,

    /// Maximum number of entries, fixed at initialization.
    pub capacity: u32,

    /// Number of entries inserted so far.
    pub count: u32,
}

/// Binds one Switchboard randomness account to one future draw.
#[account]
#[derive(InitSpace)]
pub struct DrawCommitment {
    /// The registry this commitment draws from.
    pub registry: Pubkey,

    /// The committed Switchboard randomness account.
    pub randomness_account: Pubkey,

    /// Slot the randomness was seeded at.
    pub seed_slot: u64,

    /// Set by `commit_draw`, cleared by `reveal_draw` or `expire_commitment`.
    pub pending: bool,

    pub bump: u8,
}

/// Snapshot returned by the `status` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryStatus {
    pub authority: Pubkey,
    pub capacity: u32,
    pub count: u32,
    pub drawn: u32,
}
