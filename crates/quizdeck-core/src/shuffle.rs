//! Seeded question shuffling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `items` in place with a uniform Fisher-Yates permutation.
///
/// The same seed always produces the same order.
pub fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// A seed taken from the wall clock, so separate runs see different orders.
pub fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let original: Vec<u32> = (0..50).collect();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, 42);

        assert_eq!(shuffled.len(), original.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        shuffle(&mut a, 7);
        shuffle(&mut b, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_changes_order() {
        let original: Vec<u32> = (0..50).collect();
        // Across a handful of seeds at least one must move something.
        let moved = (1..=5).any(|seed| {
            let mut v = original.clone();
            shuffle(&mut v, seed);
            v != original
        });
        assert!(moved);
    }

    #[test]
    fn shuffle_handles_tiny_inputs() {
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, 1);
        assert!(empty.is_empty());

        let mut one = vec![9];
        shuffle(&mut one, 1);
        assert_eq!(one, vec![9]);
    }
}
