use anchor_lang::prelude::*;
use solana_program::sysvar::slot_hashes;

use crate::entropy::SlotHashesEntropy;
use crate::events::EntryDrawn;
use crate::registry::{self, Draw};

/// Accounts required to draw with slot-hash entropy.
///
/// Anyone may draw. The seed comes from the SlotHashes sysvar, so the caller
/// cannot choose it, and the used bitset keeps a position from being drawn
/// twice however calls are ordered.
#[derive(Accounts)]
pub struct DrawEntry<'info> {
    /// CHECK: Program owned; decoded and validated by `registry::draw`.
    #[account(mut, owner = crate::ID)]
    pub registry: UncheckedAccount<'info>,

    /// CHECK: Address is verified
    #[account(address = slot_hashes::ID)]
    pub recent_slothashes: UncheckedAccount<'info>,
}

pub fn process_draw(ctx: Context<DrawEntry>) -> Result<Pubkey> {
    let registry_key = ctx.accounts.registry.key();
    let slot_hashes = ctx.accounts.recent_slothashes.try_borrow_data()?;
    let entropy = SlotHashesEntropy {
        slot_hashes: &slot_hashes[..],
        registry: registry_key,
    };

    let mut data = ctx.accounts.registry.try_borrow_mut_data()?;
    let draw = registry::draw(&mut data, &entropy)?;

    announce_draw(registry_key, &draw);
    Ok(draw.key)
}

pub(crate) fn announce_draw(registry: Pubkey, draw: &Draw) {
    msg!("SELECTED {} at index {}", draw.key, draw.index);
    msg!("Drawn: {}, remaining: {}", draw.drawn, draw.remaining);
    emit!(EntryDrawn {
        registry,
        index: draw.index,
        key: draw.key,
        drawn: draw.drawn,
        remaining: draw.remaining,
    });
}
