use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::events::RegistryInitialized;
use crate::registry;

/// Accounts required to initialize a registry.
///
/// The registry account is created by the client beforehand (system program
/// `create_account`) with exactly `layout::registry_space(capacity)` bytes
/// and this program as owner, because a registry can be far larger than an
/// account the program could allocate itself.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the registry authority, the only signer allowed to insert.
    pub authority: Signer<'info>,

    /// CHECK: Must be program owned and still zeroed. Size and tag are
    /// validated by `registry::initialize`.
    #[account(mut, owner = crate::ID)]
    pub registry: UncheckedAccount<'info>,
}

/// Initializes an empty registry with room for `capacity` entries.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `capacity` - Maximum number of entries, fixed for the account's lifetime
pub fn process_initialize(ctx: Context<Initialize>, capacity: u32) -> Result<()> {
    let registry = &ctx.accounts.registry;
    let authority = ctx.accounts.authority.key();

    require!(
        Rent::get()?.is_exempt(registry.lamports(), registry.data_len()),
        RegistryError::NotRentExempt
    );

    let mut data = registry.try_borrow_mut_data()?;
    registry::initialize(&mut data, &authority, capacity)?;

    msg!("Initialized registry with capacity {}", capacity);
    emit!(RegistryInitialized {
        registry: registry.key(),
        authority,
        capacity,
    });

    Ok(())
}
