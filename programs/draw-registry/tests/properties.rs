use std::collections::HashSet;

use anchor_lang::prelude::*;
use draw_registry::layout::registry_space;
use draw_registry::registry::{draw, initialize, insert, inspect, status};
use proptest::prelude::*;

fn seeded(words: Vec<u64>) -> impl Fn(u32) -> Result<[u8; 32]> {
    let words = std::cell::RefCell::new(words.into_iter().cycle());
    move |_: u32| {
        let mut seed = [0u8; 32];
        let word = words.borrow_mut().next().unwrap_or_default();
        seed[..8].copy_from_slice(&word.to_le_bytes());
        Ok(seed)
    }
}

fn registry_with(capacity: u32, count: u32) -> (Pubkey, Vec<Pubkey>, Vec<u8>) {
    let authority = Pubkey::new_unique();
    let mut data = vec![0u8; registry_space(capacity)];
    initialize(&mut data, &authority, capacity).unwrap();
    let keys: Vec<Pubkey> = (0..count).map(|_| Pubkey::new_unique()).collect();
    for (i, key) in keys.iter().enumerate() {
        insert(&mut data, &authority, key, i as u32).unwrap();
    }
    (authority, keys, data)
}

proptest! {
    #[test]
    fn count_tracks_successful_inserts(capacity in 1u32..40, attempts in prop::collection::vec(0u32..45, 0..80)) {
        let (authority, _, mut data) = registry_with(capacity, 0);
        let mut successes = 0u32;
        for at_index in attempts {
            let before = data.clone();
            match insert(&mut data, &authority, &Pubkey::new_unique(), at_index) {
                Ok(count) => {
                    successes += 1;
                    prop_assert_eq!(count, successes);
                }
                Err(_) => {
                    prop_assert_eq!(&data, &before);
                }
            }
            prop_assert!(status(&data).unwrap().count <= capacity);
        }
        prop_assert_eq!(status(&data).unwrap().count, successes);
    }

    #[test]
    fn draws_never_repeat(capacity in 1u32..64, fill in 0.0f64..=1.0, words in prop::collection::vec(any::<u64>(), 1..16)) {
        let count = ((capacity as f64 * fill) as u32).max(1).min(capacity);
        let (_, keys, mut data) = registry_with(capacity, count);
        let entropy = seeded(words);

        let mut seen = HashSet::new();
        for n in 1..=count {
            let result = draw(&mut data, &entropy).unwrap();
            prop_assert!(seen.insert(result.key));
            prop_assert!(keys.contains(&result.key));
            prop_assert_eq!(result.drawn, n);
            prop_assert_eq!(result.remaining, count - n);
        }

        let before = data.clone();
        prop_assert!(draw(&mut data, &entropy).is_err());
        prop_assert_eq!(data, before);
    }

    #[test]
    fn positions_are_stable_across_draws(capacity in 1u32..48, draws in 0usize..48, words in prop::collection::vec(any::<u64>(), 1..8)) {
        let (_, keys, mut data) = registry_with(capacity, capacity);
        let entropy = seeded(words);
        for _ in 0..draws.min(capacity as usize) {
            draw(&mut data, &entropy).unwrap();
        }
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(inspect(&data, i as u32).unwrap(), *key);
        }
    }
}
