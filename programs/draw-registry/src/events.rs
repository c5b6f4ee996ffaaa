use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub authority: Pubkey,
    pub capacity: u32,
}

#[event]
pub struct EntryInserted {
    pub registry: Pubkey,
    pub index: u32,
    pub key: Pubkey,
}

/// The observable result of a draw.
#[event]
pub struct EntryDrawn {
    pub registry: Pubkey,
    pub index: u32,
    pub key: Pubkey,
    pub drawn: u32,
    pub remaining: u32,
}

#[event]
pub struct DrawCommitted {
    pub registry: Pubkey,
    pub randomness_account: Pubkey,
    pub seed_slot: u64,
}

#[event]
pub struct CommitmentExpired {
    pub registry: Pubkey,
    pub randomness_account: Pubkey,
    pub seed_slot: u64,
}
