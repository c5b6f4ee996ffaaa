//! Commit/reveal bookkeeping for draws seeded by Switchboard randomness.
//!
//! A commitment binds one randomness account, at one seed slot, to the next
//! committed draw of a registry. It is consumed by exactly one draw, or
//! expired when the oracle never reveals.

use anchor_lang::prelude::*;

use crate::constants::COMMITMENT_TIMEOUT_SLOTS;
use crate::entropy::RandomnessReading;
use crate::error::RegistryError;
use crate::registry::{self, Draw};
use crate::state::{DrawCommitment, RegistryStatus};

/// Arms `commitment` with a randomness account seeded in the previous slot.
pub fn commit(
    commitment: &mut DrawCommitment,
    registry: Pubkey,
    status: &RegistryStatus,
    signer: &Pubkey,
    randomness_account: Pubkey,
    reading: &RandomnessReading,
    current_slot: u64,
) -> Result<()> {
    require_keys_eq!(*signer, status.authority, RegistryError::Unauthorized);
    require_gt!(status.count, 0, RegistryError::NotPopulated);
    require_gt!(status.count, status.drawn, RegistryError::DrawExhausted);
    require!(!commitment.pending, RegistryError::CommitmentPending);

    if reading.seed_slot != current_slot.saturating_sub(1) {
        msg!("Seed slot: {}", reading.seed_slot);
        msg!("Current slot: {}", current_slot);
        return err!(RegistryError::RandomnessAlreadyRevealed);
    }

    commitment.registry = registry;
    commitment.randomness_account = randomness_account;
    commitment.seed_slot = reading.seed_slot;
    commitment.pending = true;
    Ok(())
}

/// Draws from `data` with the committed value and clears the commitment.
///
/// The value is taken from the account whenever the oracle has revealed it,
/// not only in the reveal slot, so a late reveal still lands.
pub fn draw_committed(
    commitment: &mut DrawCommitment,
    randomness_account: &Pubkey,
    reading: &RandomnessReading,
    data: &mut [u8],
) -> Result<Draw> {
    check_pending(commitment, randomness_account, reading)?;

    let draw = registry::draw(data, reading)?;
    commitment.pending = false;
    Ok(draw)
}

/// Clears a pending commitment the oracle never revealed.
///
/// Only possible once `COMMITMENT_TIMEOUT_SLOTS` have passed since the seed
/// slot, and never once a value is revealed: that value must be drawn.
pub fn expire(
    commitment: &mut DrawCommitment,
    randomness_account: &Pubkey,
    reading: &RandomnessReading,
    current_slot: u64,
) -> Result<()> {
    check_pending(commitment, randomness_account, reading)?;
    require!(!reading.is_revealed(), RegistryError::CommitmentRevealed);

    let seed_slot = commitment.seed_slot;
    let deadline = seed_slot.saturating_add(COMMITMENT_TIMEOUT_SLOTS);
    require_gte!(current_slot, deadline, RegistryError::CommitmentNotExpired);

    commitment.pending = false;
    Ok(())
}

fn check_pending(
    commitment: &DrawCommitment,
    randomness_account: &Pubkey,
    reading: &RandomnessReading,
) -> Result<()> {
    require!(commitment.pending, RegistryError::NoPendingCommitment);
    require_keys_eq!(
        *randomness_account,
        commitment.randomness_account,
        RegistryError::RandomnessAccountMismatch
    );
    // a reseeded account no longer holds the committed value
    require_eq!(
        reading.seed_slot,
        commitment.seed_slot,
        RegistryError::RandomnessReseeded
    );
    Ok(())
}
