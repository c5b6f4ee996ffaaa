use anchor_lang::prelude::*;

use crate::events::EntryInserted;
use crate::registry;

#[derive(Accounts)]
pub struct InsertEntry<'info> {
    /// Must match the authority stored in the registry.
    pub authority: Signer<'info>,

    /// CHECK: Program owned; decoded and validated by `registry::insert`.
    #[account(mut, owner = crate::ID)]
    pub registry: UncheckedAccount<'info>,
}

/// Appends `key` at `at_index`.
///
/// Insertion is strictly sequential: `at_index` has to equal the current
/// count, so a skipped or repeated key fails the call instead of leaving a
/// gap. Clients usually shuffle their key list before inserting, which hides
/// submission order but is not what makes the draw fair.
pub fn process_insert(ctx: Context<InsertEntry>, key: Pubkey, at_index: u32) -> Result<()> {
    let registry = &ctx.accounts.registry;

    let mut data = registry.try_borrow_mut_data()?;
    let count = registry::insert(&mut data, &ctx.accounts.authority.key(), &key, at_index)?;

    msg!("Inserted entry {} ({} stored)", at_index, count);
    emit!(EntryInserted {
        registry: registry.key(),
        index: at_index,
        key,
    });

    Ok(())
}
