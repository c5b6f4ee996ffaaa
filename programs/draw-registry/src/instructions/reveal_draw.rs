use anchor_lang::prelude::*;

use crate::commitment;
use crate::constants::SEED_DRAW_COMMITMENT;
use crate::entropy::RandomnessReading;
use crate::state::DrawCommitment;

use super::draw::announce_draw;

/// Accounts required to perform a committed draw.
///
/// Anyone may reveal once the oracle has resolved the committed randomness,
/// in the reveal slot or any slot after it. The commitment is consumed, so
/// one commitment feeds exactly one draw.
#[derive(Accounts)]
pub struct RevealDraw<'info> {
    /// CHECK: Program owned; decoded and validated by `registry::draw`.
    #[account(mut, owner = crate::ID)]
    pub registry: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SEED_DRAW_COMMITMENT, registry.key().as_ref()],
        bump = commitment.bump,
        has_one = registry,
    )]
    pub commitment: Account<'info, DrawCommitment>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: Matched against the commitment and parsed in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_reveal_draw(ctx: Context<RevealDraw>) -> Result<Pubkey> {
    let reading = RandomnessReading::parse(&ctx.accounts.randomness_account_data)?;

    let registry_key = ctx.accounts.registry.key();
    let mut data = ctx.accounts.registry.try_borrow_mut_data()?;
    let draw = commitment::draw_committed(
        &mut ctx.accounts.commitment,
        &ctx.accounts.randomness_account_data.key(),
        &reading,
        &mut data,
    )?;

    announce_draw(registry_key, &draw);
    Ok(draw.key)
}
