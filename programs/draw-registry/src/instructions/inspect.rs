use anchor_lang::prelude::*;

use crate::registry;
use crate::state::RegistryStatus;

/// Read-only access to a registry. No signer is needed.
#[derive(Accounts)]
pub struct InspectRegistry<'info> {
    /// CHECK: Program owned; decoded and validated by the registry module.
    #[account(owner = crate::ID)]
    pub registry: UncheckedAccount<'info>,
}

pub fn process_inspect(ctx: Context<InspectRegistry>, index: u32) -> Result<Pubkey> {
    let data = ctx.accounts.registry.try_borrow_data()?;
    let key = registry::inspect(&data, index)?;
    msg!("Entry {}: {}", index, key);
    Ok(key)
}

pub fn process_is_drawn(ctx: Context<InspectRegistry>, index: u32) -> Result<bool> {
    let data = ctx.accounts.registry.try_borrow_data()?;
    let drawn = registry::is_drawn(&data, index)?;
    msg!("Entry {} drawn: {}", index, drawn);
    Ok(drawn)
}

pub fn process_status(ctx: Context<InspectRegistry>) -> Result<RegistryStatus> {
    let data = ctx.accounts.registry.try_borrow_data()?;
    let status = registry::status(&data)?;
    msg!(
        "Capacity: {}, count: {}, drawn: {}",
        status.capacity,
        status.count,
        status.drawn
    );
    Ok(status)
}
