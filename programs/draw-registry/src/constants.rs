use crate::state::Registry;
use anchor_lang::Discriminator;

/// Size of one stored entry (a raw 32-byte key).
pub const ENTRY_SIZE: usize = 32;

/// Fixed header in front of the entries vector:
/// tag (8) + authority (32) + capacity (4) + count (4).
pub const HEADER_SIZE: usize = 8 + 32 + 4 + 4;

/// Record-kind tag written at offset 0 of every initialized registry.
pub const REGISTRY_TAG: [u8; 8] = Registry::DISCRIMINATOR;

pub const AUTHORITY_OFFSET: usize = 8;
pub const CAPACITY_OFFSET: usize = 40;
pub const COUNT_OFFSET: usize = 44;
pub const ENTRIES_LEN_OFFSET: usize = HEADER_SIZE;
pub const ENTRIES_OFFSET: usize = ENTRIES_LEN_OFFSET + 4;

/// Length prefix of a borsh vector.
pub const VEC_PREFIX_SIZE: usize = 4;

pub const SEED_DRAW_COMMITMENT: &[u8] = b"draw_commitment";

/// Slots after the seed slot before an unrevealed commitment may be expired.
/// Roughly ten minutes at 400ms slots.
pub const COMMITMENT_TIMEOUT_SLOTS: u64 = 1_500;
