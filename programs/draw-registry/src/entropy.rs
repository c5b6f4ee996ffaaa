//! Entropy sources the selector consumes.
//!
//! The selector never reaches for randomness itself; instructions hand it an
//! [`EntropySource`] built from ledger state, and tests hand it fixed bytes.

use anchor_lang::prelude::*;
use solana_program::keccak::hashv;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::error::RegistryError;

pub trait EntropySource {
    /// Returns a fresh 32-byte seed for one draw. `remaining` is the number
    /// of entries still available to that draw.
    fn draw_seed(&self, remaining: u32) -> Result<[u8; 32]>;
}

impl<F> EntropySource for F
where
    F: Fn(u32) -> Result<[u8; 32]>,
{
    fn draw_seed(&self, remaining: u32) -> Result<[u8; 32]> {
        self(remaining)
    }
}

/// Hashes the `SlotHashes` sysvar together with the registry address and the
/// remaining count, so two draws in the same slot still see different seeds.
pub struct SlotHashesEntropy<'a> {
    pub slot_hashes: &'a [u8],
    pub registry: Pubkey,
}

impl EntropySource for SlotHashesEntropy<'_> {
    fn draw_seed(&self, remaining: u32) -> Result<[u8; 32]> {
        Ok(hashv(&[
            self.slot_hashes,
            self.registry.as_ref(),
            &remaining.to_le_bytes(),
        ])
        .to_bytes())
    }
}

/// The parts of a Switchboard on-demand randomness account a committed draw
/// depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomnessReading {
    pub seed_slot: u64,
    pub reveal_slot: u64,
    pub value: [u8; 32],
}

impl RandomnessReading {
    pub fn parse(randomness_account: &AccountInfo) -> Result<Self> {
        let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
            .map_err(|_| RegistryError::InvalidRandomnessAccount)?;
        Ok(Self {
            seed_slot: randomness_data.seed_slot,
            reveal_slot: randomness_data.reveal_slot,
            value: randomness_data.value,
        })
    }

    /// The oracle writes the value and a reveal slot past the seed slot in
    /// the same update.
    pub fn is_revealed(&self) -> bool {
        self.reveal_slot > self.seed_slot
    }
}

impl EntropySource for RandomnessReading {
    fn draw_seed(&self, _remaining: u32) -> Result<[u8; 32]> {
        require!(self.is_revealed(), RegistryError::RandomnessNotResolved);
        Ok(self.value)
    }
}

/// Reduces a seed to an index in `[0, range)`.
///
/// The default is a plain modulo over the first eight bytes, which favours
/// low indices slightly whenever `range` does not divide 2^64. With the
/// `uniform-draws` feature the same range is rejection sampled instead.
pub fn reduce(seed: &[u8; 32], range: u32) -> u32 {
    debug_assert!(range > 0);
    if cfg!(feature = "uniform-draws") {
        reduce_uniform(seed, range)
    } else {
        reduce_modulo(seed, range)
    }
}

fn first_word(seed: &[u8; 32]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&seed[..8]);
    u64::from_le_bytes(word)
}

pub fn reduce_modulo(seed: &[u8; 32], range: u32) -> u32 {
    (first_word(seed) % range as u64) as u32
}

/// Rejection sampling over 64-bit words of the seed, rehashing the seed
/// whenever all four words fall in the biased tail.
pub fn reduce_uniform(seed: &[u8; 32], range: u32) -> u32 {
    let range = range as u64;
    let zone = u64::MAX - (u64::MAX % range);
    let mut block = *seed;
    loop {
        for chunk in block.chunks_exact(8) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            let candidate = u64::from_le_bytes(word);
            if candidate < zone {
                return (candidate % range) as u32;
            }
        }
        block = hashv(&[block.as_ref()]).to_bytes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_with_word(word: u64) -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&word.to_le_bytes());
        seed
    }

    #[test]
    fn modulo_uses_first_little_endian_word() {
        assert_eq!(reduce_modulo(&seed_with_word(17), 5), 2);
        assert_eq!(reduce_modulo(&seed_with_word(4), 5), 4);
        assert_eq!(reduce_modulo(&seed_with_word(u64::MAX), 1), 0);
    }

    #[test]
    fn uniform_rejects_the_biased_tail() {
        // u64::MAX lands in the tail for range 3, so the second word is used.
        let mut seed = seed_with_word(u64::MAX);
        seed[8..16].copy_from_slice(&7u64.to_le_bytes());
        assert_eq!(reduce_uniform(&seed, 3), 1);
    }

    #[test]
    fn uniform_stays_in_range_after_rehashing() {
        let seed = [0xFF; 32];
        assert!(reduce_uniform(&seed, 3) < 3);
    }

    #[test]
    fn slot_hash_seed_changes_with_remaining() {
        let data = [7u8; 64];
        let source = SlotHashesEntropy {
            slot_hashes: &data,
            registry: Pubkey::new_unique(),
        };
        let a = source.draw_seed(10).unwrap();
        let b = source.draw_seed(9).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, source.draw_seed(10).unwrap());
    }

    #[test]
    fn unrevealed_reading_is_not_a_seed() {
        let mut reading = RandomnessReading {
            seed_slot: 40,
            reveal_slot: 0,
            value: [9u8; 32],
        };
        assert!(reading.draw_seed(1).is_err());
        reading.reveal_slot = 42;
        assert_eq!(reading.draw_seed(1).unwrap(), [9u8; 32]);
    }

    #[test]
    fn closures_are_entropy_sources() {
        let source = |remaining: u32| -> Result<[u8; 32]> { Ok([remaining as u8; 32]) };
        assert_eq!(source.draw_seed(3).unwrap(), [3u8; 32]);
    }
}
