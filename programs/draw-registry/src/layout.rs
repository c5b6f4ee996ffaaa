//! Byte layout of a registry account.
//!
//! ```text
//! 0        tag (8)
//! 8        authority (32)
//! 40       capacity u32
//! 44       count u32
//! 48       entries length u32 (= capacity)
//! 52       capacity * 32 bytes of entries
//! X        bitset length u32 (= ceil(capacity / 8))
//! X + 4    bitset, bit i at byte i / 8, bit i % 8
//! ```
//!
//! All integers are little-endian. The layout matches what borsh would
//! produce for `(tag, Pubkey, u32, u32, Vec<[u8; 32]>, Vec<u8>)`, so clients
//! can decode it without this crate.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::RegistryError;

/// Bytes needed for the used-entry bitset of `capacity` entries.
pub fn bitset_len(capacity: u32) -> usize {
    (capacity as usize).div_ceil(8)
}

/// Exact account size for a registry holding `capacity` entries.
pub fn registry_space(capacity: u32) -> usize {
    ENTRIES_OFFSET + capacity as usize * ENTRY_SIZE + VEC_PREFIX_SIZE + bitset_len(capacity)
}

fn bitset_len_offset(capacity: u32) -> usize {
    ENTRIES_OFFSET + capacity as usize * ENTRY_SIZE
}

fn bitset_offset(capacity: u32) -> usize {
    bitset_len_offset(capacity) + VEC_PREFIX_SIZE
}

fn entry_offset(index: u32) -> usize {
    ENTRIES_OFFSET + index as usize * ENTRY_SIZE
}

/// True while the account has never been initialized (tag still zeroed).
pub fn is_uninitialized(data: &[u8]) -> bool {
    data.len() >= REGISTRY_TAG.len() && data[..REGISTRY_TAG.len()].iter().all(|b| *b == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryHeader {
    pub authority: Pubkey,
    pub capacity: u32,
    pub count: u32,
}

impl RegistryHeader {
    /// Decodes and validates the header against the full account data.
    pub fn read(data: &[u8]) -> Result<Self> {
        require_gte!(data.len(), ENTRIES_OFFSET, RegistryError::AccountSizeMismatch);
        require!(
            data[..REGISTRY_TAG.len()] == REGISTRY_TAG,
            RegistryError::InvalidAccountData
        );

        let authority = read_pubkey_at(data, AUTHORITY_OFFSET)?;
        let capacity = read_u32_at(data, CAPACITY_OFFSET)?;
        let count = read_u32_at(data, COUNT_OFFSET)?;

        require_eq!(
            data.len(),
            registry_space(capacity),
            RegistryError::AccountSizeMismatch
        );
        require_eq!(
            read_u32_at(data, ENTRIES_LEN_OFFSET)?,
            capacity,
            RegistryError::InvalidAccountData
        );
        require_eq!(
            read_u32_at(data, bitset_len_offset(capacity))? as usize,
            bitset_len(capacity),
            RegistryError::InvalidAccountData
        );
        require_gte!(capacity, count, RegistryError::InvalidAccountData);

        Ok(Self {
            authority,
            capacity,
            count,
        })
    }
}

/// Writes a fresh, empty registry over `data`, which must be exactly
/// `registry_space(capacity)` bytes.
pub fn write_empty(data: &mut [u8], authority: &Pubkey, capacity: u32) -> Result<()> {
    require_eq!(
        data.len(),
        registry_space(capacity),
        RegistryError::AccountSizeMismatch
    );

    data.fill(0);
    data[..REGISTRY_TAG.len()].copy_from_slice(&REGISTRY_TAG);
    data[AUTHORITY_OFFSET..CAPACITY_OFFSET].copy_from_slice(authority.as_ref());
    write_u32_at(data, CAPACITY_OFFSET, capacity);
    write_u32_at(data, COUNT_OFFSET, 0);
    write_u32_at(data, ENTRIES_LEN_OFFSET, capacity);
    write_u32_at(data, bitset_len_offset(capacity), bitset_len(capacity) as u32);
    Ok(())
}

/// Read access to a validated registry.
pub struct RegistryView<'a> {
    header: RegistryHeader,
    data: &'a [u8],
}

impl<'a> RegistryView<'a> {
    pub fn load(data: &'a [u8]) -> Result<Self> {
        let header = RegistryHeader::read(data)?;
        Ok(Self { header, data })
    }

    pub fn header(&self) -> &RegistryHeader {
        &self.header
    }

    /// Key stored at `index`. Slots at or past `count` read as zero.
    pub fn entry(&self, index: u32) -> Result<Pubkey> {
        require_gt!(self.header.capacity, index, RegistryError::IndexOutOfRange);
        read_pubkey_at(self.data, entry_offset(index))
    }

    pub fn is_used(&self, index: u32) -> bool {
        bit_is_set(self.bitset(), index)
    }

    /// Number of entries drawn so far.
    pub fn drawn(&self) -> u32 {
        popcount(self.bitset())
    }

    /// Index of the `n`-th (zero based) inserted entry whose used bit is
    /// clear, scanning upward from position 0.
    pub fn nth_unused(&self, n: u32) -> Option<u32> {
        nth_clear_bit(self.bitset(), self.header.count, n)
    }

    fn bitset(&self) -> &[u8] {
        &self.data[bitset_offset(self.header.capacity)..]
    }
}

/// Write access to a validated registry.
///
/// Every setter writes straight into account data, so callers finish all of
/// their checks before calling one.
pub struct RegistryViewMut<'a> {
    header: RegistryHeader,
    data: &'a mut [u8],
}

impl<'a> RegistryViewMut<'a> {
    pub fn load(data: &'a mut [u8]) -> Result<Self> {
        let header = RegistryHeader::read(data)?;
        Ok(Self { header, data })
    }

    pub fn header(&self) -> &RegistryHeader {
        &self.header
    }

    pub fn as_view(&self) -> RegistryView<'_> {
        RegistryView {
            header: self.header,
            data: &*self.data,
        }
    }

    pub fn write_entry(&mut self, index: u32, key: &Pubkey) {
        let offset = entry_offset(index);
        self.data[offset..offset + ENTRY_SIZE].copy_from_slice(key.as_ref());
    }

    pub fn set_count(&mut self, count: u32) {
        write_u32_at(self.data, COUNT_OFFSET, count);
        self.header.count = count;
    }

    pub fn mark_used(&mut self, index: u32) {
        let offset = bitset_offset(self.header.capacity) + index as usize / 8;
        self.data[offset] |= 1 << (index % 8);
    }
}

fn bit_is_set(bitset: &[u8], index: u32) -> bool {
    bitset
        .get(index as usize / 8)
        .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
}

fn popcount(bitset: &[u8]) -> u32 {
    bitset.iter().map(|b| b.count_ones()).sum()
}

fn nth_clear_bit(bitset: &[u8], limit: u32, mut n: u32) -> Option<u32> {
    for (byte_idx, &byte) in bitset.iter().enumerate() {
        let base = byte_idx as u32 * 8;
        if base >= limit {
            break;
        }
        let valid_bits = (limit - base).min(8);
        let mask = if valid_bits == 8 {
            0xFF
        } else {
            (1u8 << valid_bits) - 1
        };
        let free = !byte & mask;
        let free_count = free.count_ones();
        if n >= free_count {
            n -= free_count;
            continue;
        }
        for bit in 0..valid_bits {
            if free & (1 << bit) != 0 {
                if n == 0 {
                    return Some(base + bit);
                }
                n -= 1;
            }
        }
    }
    None
}

fn read_pubkey_at(data: &[u8], offset: usize) -> Result<Pubkey> {
    let bytes: [u8; 32] = data
        .get(offset..offset + ENTRY_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or(RegistryError::InvalidAccountData)?;
    Ok(Pubkey::new_from_array(bytes))
}

fn read_u32_at(data: &[u8], offset: usize) -> Result<u32> {
    let bytes: [u8; 4] = data
        .get(offset..offset + 4)
        .and_then(|s| s.try_into().ok())
        .ok_or(RegistryError::InvalidAccountData)?;
    Ok(u32::from_le_bytes(bytes))
}

fn write_u32_at(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
