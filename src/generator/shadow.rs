/*
shadow.rs

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

//! Generate shadow rounds: find the token whose silhouette is displayed.

use log::debug;
use rand::Rng;
use serde::Serialize;

use super::pool::Pool;
use super::sampling;
use super::tokens::Token;
use crate::config::SHADOW_OPTION_COUNT;
use crate::game::RoundData;

/// Shadow round.
#[derive(Serialize, Debug, Clone)]
pub struct ShadowRound {
    /// Token displayed as a shadow.
    pub target: Token,

    /// Options, in display order. The target is one of them.
    pub options: Vec<Token>,
}

impl ShadowRound {
    /// Whether the token with the given identifier is the target.
    pub fn select(&self, token_id: &str) -> bool {
        self.target.id == token_id
    }

    /// Return the display position of the target.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|t| t.id == self.target.id)
    }
}

impl RoundData for ShadowRound {
    fn option_count(&self) -> usize {
        self.options.len()
    }

    fn is_correct(&self, option_index: usize) -> bool {
        self.options
            .get(option_index)
            .is_some_and(|t| self.select(&t.id))
    }
}

/// [`ShadowGenerator`] object.
#[derive(Debug, Default)]
pub struct ShadowGenerator;

impl ShadowGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate and return a shadow round.
    ///
    /// With fewer than three tokens in the pool, the round has fewer options.
    pub fn generate<R: Rng + ?Sized>(&self, pool: &Pool, rng: &mut R) -> ShadowRound {
        // A pool always holds at least one token
        let target: Token = pool.tokens()[rng.random_range(0..pool.len())].clone();
        let mut options: Vec<Token> = vec![target.clone()];

        let others: Vec<Token> = pool
            .tokens()
            .iter()
            .filter(|t| t.id != target.id)
            .cloned()
            .collect();
        options.extend(sampling::pick_distinct(
            rng,
            &others,
            SHADOW_OPTION_COUNT - 1,
        ));
        debug!("Shadow target = {target}");

        ShadowRound {
            target,
            options: sampling::shuffled(rng, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::pool::build_pool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_target_present_once() {
        let pool = build_pool(&[]);
        let generator = ShadowGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let round = generator.generate(&pool, &mut rng);
            assert_eq!(round.options.len(), SHADOW_OPTION_COUNT);
            assert_eq!(
                round.options.iter().filter(|t| t.id == round.target.id).count(),
                1
            );
            let ids: HashSet<&str> = round.options.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids.len(), SHADOW_OPTION_COUNT);
            assert!(round.options.iter().all(|t| pool.contains_id(&t.id)));

            let index = round.correct_index().unwrap();
            assert!(round.is_correct(index));
            assert!(!round.is_correct((index + 1) % SHADOW_OPTION_COUNT));
        }
    }

    #[test]
    fn test_small_pool() {
        let pool = Pool::build(&[], 2);
        let mut rng = StdRng::seed_from_u64(1);
        let round = ShadowGenerator::new().generate(&pool, &mut rng);
        assert_eq!(round.options.len(), 2);
        assert!(round.correct_index().is_some());
    }
}
