#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod commitment;
pub mod constants;
pub mod entropy;
pub mod error;
pub mod events;
pub mod instructions;
pub mod layout;
pub mod registry;
pub mod state;

use state::RegistryStatus;

declare_id!("dk8hFHDNzKmzQEuc9Fu7iEmv9RmXuuicaKDV6kVVgtt");

#[program]
pub mod draw_registry {
    use super::*;

    /// Turn a zeroed, program-owned account into an empty registry.
    pub fn initialize(ctx: Context<Initialize>, capacity: u32) -> Result<()> {
        process_initialize(ctx, capacity)
    }

    /// Append one key at `at_index`, which must equal the current count.
    pub fn insert(ctx: Context<InsertEntry>, key: Pubkey, at_index: u32) -> Result<()> {
        process_insert(ctx, key, at_index)
    }

    /// Return the key stored at `index`.
    pub fn inspect(ctx: Context<InspectRegistry>, index: u32) -> Result<Pubkey> {
        process_inspect(ctx, index)
    }

    /// Whether the entry at `index` has been drawn.
    pub fn is_drawn(ctx: Context<InspectRegistry>, index: u32) -> Result<bool> {
        process_is_drawn(ctx, index)
    }

    /// Report authority, capacity, count and drawn count.
    pub fn status(ctx: Context<InspectRegistry>) -> Result<RegistryStatus> {
        process_status(ctx)
    }

    /// Draw one unused entry, seeded from the SlotHashes sysvar.
    pub fn draw(ctx: Context<DrawEntry>) -> Result<Pubkey> {
        process_draw(ctx)
    }

    /// Bind a Switchboard randomness account to the next committed draw.
    pub fn commit_draw(ctx: Context<CommitDraw>) -> Result<()> {
        process_commit_draw(ctx)
    }

    /// Draw one unused entry with the committed Switchboard randomness.
    pub fn reveal_draw(ctx: Context<RevealDraw>) -> Result<Pubkey> {
        process_reveal_draw(ctx)
    }

    /// Clear a commitment whose randomness was never revealed.
    pub fn expire_commitment(ctx: Context<ExpireCommitment>) -> Result<()> {
        process_expire_commitment(ctx)
    }
}
