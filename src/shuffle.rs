//! Fisher–Yates shuffling.

use alloc::vec::Vec;

use rand::Rng;

/// Shuffles `items` in place.
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen element at or before it. Empty and single-element slices
/// are left as they are.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the original untouched.
#[must_use]
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{DECK_SIZE, build_deck};

    #[test]
    fn copy_leaves_template_untouched() {
        let template = build_deck();
        let before = template.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let shuffled = shuffle(&template, &mut rng);

        assert_eq!(template, before);
        assert_eq!(shuffled.len(), DECK_SIZE);
        assert_ne!(shuffled, template);
    }

    #[test]
    fn same_seed_same_order() {
        let template = build_deck();
        let first = shuffle(&template, &mut ChaCha8Rng::seed_from_u64(11));
        let second = shuffle(&template, &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_and_singleton_are_noops() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle_in_place(&mut empty, &mut rng);

        let mut one = [7_u8];
        shuffle_in_place(&mut one, &mut rng);
        assert_eq!(one, [7]);
    }
}
