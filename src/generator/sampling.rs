/*
sampling.rs

Copyright 2025 Dreamweaver Puzzles contributors

This file is part of Dreamweaver Puzzles.

Dreamweaver Puzzles is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Dreamweaver Puzzles is distributed in the hope that it will be useful, but
WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
details.

You should have received a copy of the GNU General Public License along with
Dreamweaver Puzzles. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Random drawing primitives shared by the generators.
//!
//! None of these functions modify their input: they return new vectors.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Return up to `amount` distinct elements of `items`, in random order.
///
/// When `items` has fewer than `amount` elements, all of them are returned.
pub fn pick_distinct<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], amount: usize) -> Vec<T> {
    let mut picked: Vec<T> = items.to_vec();
    picked.shuffle(rng);
    picked.truncate(amount);
    picked
}

/// Return `len` elements drawn uniformly and independently from `items`.
///
/// The same element can be drawn several times. Return an empty vector if `items` is empty.
pub fn sample_with_replacement<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    len: usize,
) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    (0..len)
        .filter_map(|_| items.choose(rng).cloned())
        .collect()
}

/// Return a random permutation of `0..n`.
pub fn permutation<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}

/// Reorder `items` with the given permutation: element `i` of the result is
/// `items[permutation[i]]`.
pub fn apply_permutation<T: Clone>(items: &[T], permutation: &[usize]) -> Vec<T> {
    permutation.iter().map(|i| items[*i].clone()).collect()
}

/// Return the elements of `items` in random order.
pub fn shuffled<T, R: Rng + ?Sized>(rng: &mut R, mut items: Vec<T>) -> Vec<T> {
    items.shuffle(rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..10).collect();
        for _ in 0..50 {
            let picked = pick_distinct(&mut rng, &items, 4);
            assert_eq!(picked.len(), 4);
            let unique: HashSet<u32> = picked.iter().copied().collect();
            assert_eq!(unique.len(), 4);
        }
        assert_eq!(pick_distinct(&mut rng, &items[..2], 4).len(), 2);
    }

    #[test]
    fn test_sample_with_replacement() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = ['a', 'b'];
        let sample = sample_with_replacement(&mut rng, &items, 4);
        assert_eq!(sample.len(), 4);
        assert!(sample.iter().all(|c| items.contains(c)));
        assert!(sample_with_replacement::<char, _>(&mut rng, &[], 4).is_empty());
    }

    #[test]
    fn test_permutation_is_bijective() {
        let mut rng = StdRng::seed_from_u64(42);
        let perm = permutation(&mut rng, 6);
        let mut sorted = perm.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);

        let items = ["r0", "r1", "r2", "r3", "r4", "r5"];
        let reordered = apply_permutation(&items, &perm);
        for (i, item) in reordered.iter().enumerate() {
            assert_eq!(*item, items[perm[i]]);
        }
    }

    #[test]
    fn test_same_seed_same_draw() {
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        assert_eq!(permutation(&mut rng1, 12), permutation(&mut rng2, 12));
    }
}
