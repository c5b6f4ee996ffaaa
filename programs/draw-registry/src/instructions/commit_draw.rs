use anchor_lang::prelude::*;

use crate::commitment;
use crate::constants::SEED_DRAW_COMMITMENT;
use crate::entropy::RandomnessReading;
use crate::events::DrawCommitted;
use crate::registry;
use crate::state::DrawCommitment;

/// Accounts required to commit a Switchboard randomness account to the
/// registry's next committed draw.
///
/// Ensures:
/// 1. Only the registry authority can commit.
/// 2. The randomness account was seeded in the previous slot, so its value
///    is not known to anyone yet.
/// 3. At most one commitment per registry is pending at a time.
#[derive(Accounts)]
pub struct CommitDraw<'info> {
    /// Registry authority, also pays for the commitment account.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Program owned; decoded and validated in the handler.
    #[account(owner = crate::ID)]
    pub registry: UncheckedAccount<'info>,

    /// Per-registry commitment, reused across draws.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + DrawCommitment::INIT_SPACE,
        seeds = [SEED_DRAW_COMMITMENT, registry.key().as_ref()],
        bump,
    )]
    pub commitment: Account<'info, DrawCommitment>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_commit_draw(ctx: Context<CommitDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let status = registry::status(&ctx.accounts.registry.try_borrow_data()?)?;
    let reading = RandomnessReading::parse(&ctx.accounts.randomness_account_data)?;

    let commitment = &mut ctx.accounts.commitment;
    commitment::commit(
        commitment,
        ctx.accounts.registry.key(),
        &status,
        &ctx.accounts.authority.key(),
        ctx.accounts.randomness_account_data.key(),
        &reading,
        clock.slot,
    )?;
    commitment.bump = ctx.bumps.commitment;

    msg!("Committed randomness account {}", commitment.randomness_account);
    emit!(DrawCommitted {
        registry: commitment.registry,
        randomness_account: commitment.randomness_account,
        seed_slot: commitment.seed_slot,
    });

    Ok(())
}
