use std::collections::HashSet;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use draw_registry::entropy::SlotHashesEntropy;
use draw_registry::error::RegistryError;
use draw_registry::layout::registry_space;
use draw_registry::registry::{draw, initialize, insert, inspect, is_drawn, status};

fn assert_rejected<T: std::fmt::Debug>(result: Result<T>, expected: RegistryError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(err.error_code_number, u32::from(expected)),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

/// Stands in for the ledger: a seed that changes on every call.
struct Counter(std::cell::Cell<u64>);

impl draw_registry::entropy::EntropySource for Counter {
    fn draw_seed(&self, _remaining: u32) -> Result<[u8; 32]> {
        let next = self
            .0
            .get()
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0.set(next);
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&next.to_le_bytes());
        Ok(seed)
    }
}

#[test]
fn ten_entries_five_draws() {
    let authority = Pubkey::new_unique();
    let mut data = vec![0u8; registry_space(10)];
    initialize(&mut data, &authority, 10).unwrap();

    let keys: Vec<Pubkey> = (0..10).map(|_| Pubkey::new_unique()).collect();
    for (i, key) in keys.iter().enumerate() {
        insert(&mut data, &authority, key, i as u32).unwrap();
    }
    assert_eq!(status(&data).unwrap().count, 10);

    let entropy = Counter(std::cell::Cell::new(42));
    let drawn: Vec<Pubkey> = (0..5)
        .map(|_| draw(&mut data, &entropy).unwrap().key)
        .collect();

    assert_eq!(status(&data).unwrap().drawn, 5);
    let unique: HashSet<_> = drawn.iter().collect();
    assert_eq!(unique.len(), 5);
    assert!(drawn.iter().all(|key| keys.contains(key)));

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(inspect(&data, i as u32).unwrap(), *key);
        assert_eq!(is_drawn(&data, i as u32).unwrap(), drawn.contains(key));
    }
}

#[test]
fn draining_the_registry_returns_every_key_once() {
    let authority = Pubkey::new_unique();
    let mut data = vec![0u8; registry_space(17)];
    initialize(&mut data, &authority, 17).unwrap();
    let keys: Vec<Pubkey> = (0..17).map(|_| Pubkey::new_unique()).collect();
    for (i, key) in keys.iter().enumerate() {
        insert(&mut data, &authority, key, i as u32).unwrap();
    }

    let entropy = Counter(std::cell::Cell::new(7));
    let mut drawn: Vec<Pubkey> = (0..17)
        .map(|_| draw(&mut data, &entropy).unwrap().key)
        .collect();
    drawn.sort();
    let mut expected = keys.clone();
    expected.sort();
    assert_eq!(drawn, expected);

    let before = data.clone();
    assert_rejected(draw(&mut data, &entropy), RegistryError::DrawExhausted);
    assert_eq!(data, before);
}

#[test]
fn slot_hash_draws_do_not_repeat_within_a_slot() {
    let authority = Pubkey::new_unique();
    let registry = Pubkey::new_unique();
    let mut data = vec![0u8; registry_space(4)];
    initialize(&mut data, &authority, 4).unwrap();
    for i in 0..4 {
        insert(&mut data, &authority, &Pubkey::new_unique(), i).unwrap();
    }

    // same sysvar contents for every call
    let slot_hashes = [3u8; 40];
    let entropy = SlotHashesEntropy {
        slot_hashes: &slot_hashes,
        registry,
    };
    let indices: HashSet<u32> = (0..4)
        .map(|_| draw(&mut data, &entropy).unwrap().index)
        .collect();
    assert_eq!(indices, (0..4).collect::<HashSet<u32>>());
}

#[test]
fn racing_inserts_at_the_same_index() {
    let authority = Pubkey::new_unique();
    let mut data = vec![0u8; registry_space(3)];
    initialize(&mut data, &authority, 3).unwrap();

    let first = Pubkey::new_unique();
    insert(&mut data, &authority, &first, 0).unwrap();
    assert_rejected(
        insert(&mut data, &authority, &Pubkey::new_unique(), 0),
        RegistryError::IndexMismatch,
    );
    assert_eq!(inspect(&data, 0).unwrap(), first);
    assert_eq!(status(&data).unwrap().count, 1);
}
