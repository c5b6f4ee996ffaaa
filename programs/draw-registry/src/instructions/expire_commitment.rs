use anchor_lang::prelude::*;

use crate::commitment;
use crate::constants::SEED_DRAW_COMMITMENT;
use crate::entropy::RandomnessReading;
use crate::events::CommitmentExpired;
use crate::state::DrawCommitment;

/// Accounts required to clear a commitment the oracle never revealed.
///
/// Anyone may expire once the timeout has passed. A revealed value can only
/// be consumed by `reveal_draw`.
#[derive(Accounts)]
pub struct ExpireCommitment<'info> {
    /// CHECK: Only its address seeds the commitment.
    #[account(owner = crate::ID)]
    pub registry: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SEED_DRAW_COMMITMENT, registry.key().as_ref()],
        bump = commitment.bump,
        has_one = registry,
    )]
    pub commitment: Account<'info, DrawCommitment>,

    /// CHECK: Matched against the commitment and parsed in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_expire_commitment(ctx: Context<ExpireCommitment>) -> Result<()> {
    let clock = Clock::get()?;
    let reading = RandomnessReading::parse(&ctx.accounts.randomness_account_data)?;

    let commitment = &mut ctx.accounts.commitment;
    commitment::expire(
        commitment,
        &ctx.accounts.randomness_account_data.key(),
        &reading,
        clock.slot,
    )?;

    msg!("Expired randomness account {}", commitment.randomness_account);
    emit!(CommitmentExpired {
        registry: commitment.registry,
        randomness_account: commitment.randomness_account,
        seed_slot: commitment.seed_slot,
    });

    Ok(())
}
