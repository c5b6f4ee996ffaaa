//! The registry operations.
//!
//! Each operation is a free function over raw account data: it loads and
//! validates the record, runs every precondition check, and only then writes.
//! A rejected call leaves the bytes untouched.

use anchor_lang::prelude::*;

use crate::constants::REGISTRY_TAG;
use crate::entropy::{reduce, EntropySource};
use crate::error::RegistryError;
use crate::layout::{self, RegistryView, RegistryViewMut};
use crate::state::RegistryStatus;

/// Outcome of one successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// Position of the selected entry.
    pub index: u32,
    /// Key stored at that position.
    pub key: Pubkey,
    /// Entries drawn so far, this one included.
    pub drawn: u32,
    /// Entries still available to later draws.
    pub remaining: u32,
}

/// Turns zeroed account data into an empty registry owned by `authority`.
pub fn initialize(data: &mut [u8], authority: &Pubkey, capacity: u32) -> Result<()> {
    require_gt!(capacity, 0, RegistryError::InvalidCapacity);
    require!(
        data.len() < REGISTRY_TAG.len() || layout::is_uninitialized(data),
        RegistryError::AlreadyInitialized
    );
    require_eq!(
        data.len(),
        layout::registry_space(capacity),
        RegistryError::AccountSizeMismatch
    );

    layout::write_empty(data, authority, capacity)
}

/// Appends `key` at `at_index`, which must be the current count. Returns the
/// new count.
pub fn insert(data: &mut [u8], signer: &Pubkey, key: &Pubkey, at_index: u32) -> Result<u32> {
    let mut registry = RegistryViewMut::load(data)?;
    let header = *registry.header();

    require_keys_eq!(*signer, header.authority, RegistryError::Unauthorized);
    require_eq!(at_index, header.count, RegistryError::IndexMismatch);
    require_gt!(header.capacity, header.count, RegistryError::CapacityExceeded);

    registry.write_entry(header.count, key);
    registry.set_count(header.count + 1);
    Ok(header.count + 1)
}

/// Key stored at `index`. Any caller may inspect.
pub fn inspect(data: &[u8], index: u32) -> Result<Pubkey> {
    let registry = RegistryView::load(data)?;
    require_gt!(registry.header().count, index, RegistryError::IndexOutOfRange);
    registry.entry(index)
}

/// Whether the entry at `index` has already been drawn.
pub fn is_drawn(data: &[u8], index: u32) -> Result<bool> {
    let registry = RegistryView::load(data)?;
    require_gt!(registry.header().count, index, RegistryError::IndexOutOfRange);
    Ok(registry.is_used(index))
}

pub fn status(data: &[u8]) -> Result<RegistryStatus> {
    let registry = RegistryView::load(data)?;
    let header = registry.header();
    Ok(RegistryStatus {
        authority: header.authority,
        capacity: header.capacity,
        count: header.count,
        drawn: registry.drawn(),
    })
}

/// Selects one entry that has not been drawn yet and marks it used.
///
/// The seed is reduced to `r` in `[0, count - drawn)` and the `r`-th unused
/// position, counted upward from 0, is selected. Entries never move, so
/// `inspect` keeps returning the same key for every position.
pub fn draw<E>(data: &mut [u8], entropy: &E) -> Result<Draw>
where
    E: EntropySource + ?Sized,
{
    let mut registry = RegistryViewMut::load(data)?;
    let header = *registry.header();

    require_gt!(header.count, 0, RegistryError::NotPopulated);
    let drawn = registry.as_view().drawn();
    require_gt!(header.count, drawn, RegistryError::DrawExhausted);

    let remaining = header.count - drawn;
    let seed = entropy.draw_seed(remaining)?;
    let nth = reduce(&seed, remaining);

    let view = registry.as_view();
    // drawn < count guarantees an unused position below count
    let index = view
        .nth_unused(nth)
        .ok_or(RegistryError::InvalidAccountData)?;
    let key = view.entry(index)?;

    registry.mark_used(index);

    Ok(Draw {
        index,
        key,
        drawn: drawn + 1,
        remaining: remaining - 1,
    })
}
