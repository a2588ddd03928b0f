/*
properties.rs

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

//! Property-based tests over random seeds and galleries.

use chrono::DateTime;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};

use dreamweaver_puzzles::config::{CIPHER_OPTION_COUNT, GameConfig, MEMORY_PAIRS};
use dreamweaver_puzzles::game::{GameKind, RoundData};
use dreamweaver_puzzles::generator::cipher::CipherGenerator;
use dreamweaver_puzzles::generator::matrix::MatrixGenerator;
use dreamweaver_puzzles::generator::memory::{CompareOutcome, MemoryGenerator};
use dreamweaver_puzzles::generator::pool::{Pool, build_pool};
use dreamweaver_puzzles::generator::shadow::ShadowGenerator;
use dreamweaver_puzzles::generator::shapes::Shape;
use dreamweaver_puzzles::generator::tokens::{
    DrawingKind, SavedDrawing, Token, tokens_from_drawings,
};
use dreamweaver_puzzles::round::{PairLevel, ScoreSink, TimerEvent};

/// Strategy: gallery drawings with short identifiers, so that duplicates and collisions with
/// the built-in identifiers happen.
fn gallery_strategy() -> impl Strategy<Value = Vec<SavedDrawing>> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,2}",
            Just(String::from("cat")),
            Just(String::from("fish"))
        ],
        0..16,
    )
    .prop_map(|ids| {
        ids.into_iter()
            .enumerate()
            .map(|(i, id)| SavedDrawing {
                url: format!("data:{id}"),
                id,
                kind: DrawingKind::Drawing,
                timestamp: DateTime::from_timestamp_millis(i as i64 * 1000).unwrap(),
            })
            .collect()
    })
}

fn pool_from(drawings: &[SavedDrawing]) -> Pool {
    build_pool(&tokens_from_drawings(drawings))
}

#[derive(Default)]
struct Counter {
    scores: usize,
}

impl ScoreSink for Counter {
    fn on_score(&mut self, _kind: GameKind) {
        self.scores += 1;
    }
}

proptest! {
    // 1. Pool identifiers are unique, user tokens first, and the pool is never empty
    #[test]
    fn pool_invariants(drawings in gallery_strategy()) {
        let pool = pool_from(&drawings);
        let ids: HashSet<&str> = pool.tokens().iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(ids.len(), pool.len());
        prop_assert!(!pool.tokens().is_empty());

        let distinct_users: HashSet<&str> = drawings.iter().map(|d| d.id.as_str()).collect();
        prop_assert!(pool.len() >= distinct_users.len());
        let first_builtin = pool.tokens().iter().position(|t| !t.is_user()).unwrap_or(pool.len());
        prop_assert!(pool.tokens()[first_builtin..].iter().all(|t| !t.is_user()));
        prop_assert_eq!(first_builtin, distinct_users.len());
    }

    // 2. Cipher mapping is one-to-one and the options are distinct with one correct answer
    #[test]
    fn cipher_round_valid(drawings in gallery_strategy(), seed in any::<u64>()) {
        let pool = pool_from(&drawings);
        let mut rng = StdRng::seed_from_u64(seed);
        let round = CipherGenerator::new().generate(&pool, &mut rng);

        prop_assert!(round.mapping.is_injective());
        prop_assert_eq!(round.mapping.encode(&round.question.tokens), round.answer.clone());
        prop_assert_eq!(round.options.len(), CIPHER_OPTION_COUNT);
        prop_assert_eq!(round.options.iter().filter(|o| o.is_correct).count(), 1);
        let distinct: HashSet<&[Shape]> =
            round.options.iter().map(|o| o.shapes.as_slice()).collect();
        prop_assert_eq!(distinct.len(), CIPHER_OPTION_COUNT);
        for option in &round.options {
            prop_assert!(option.shapes.iter().all(|s| round.active_shapes.contains(s)));
        }
        for row in &round.clue_rows {
            prop_assert!(row.tokens.iter().all(|t| pool.contains_id(&t.id)));
        }
    }

    // 3. Matrix options are three distinct attribute pairs and only the target is correct
    #[test]
    fn matrix_round_valid(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = MatrixGenerator::new().generate(&mut rng);
        let distinct: HashSet<_> = round.options.iter().map(|o| o.attributes).collect();
        prop_assert_eq!(distinct.len(), 3);
        let index = round.correct_index().unwrap();
        prop_assert_eq!(round.options[index].attributes, round.target);
        prop_assert_eq!((0..3).filter(|i| round.is_correct(*i)).count(), 1);
    }

    // 4. The shadow target appears exactly once among the options
    #[test]
    fn shadow_target_once(drawings in gallery_strategy(), seed in any::<u64>()) {
        let pool = pool_from(&drawings);
        let mut rng = StdRng::seed_from_u64(seed);
        let round = ShadowGenerator::new().generate(&pool, &mut rng);
        prop_assert_eq!(round.options.iter().filter(|t| t.id == round.target.id).count(), 1);
        let ids: HashSet<&str> = round.options.iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(ids.len(), round.options.len());
    }

    // 5. Each memory token appears on exactly two cards
    #[test]
    fn memory_pairs(drawings in gallery_strategy(), seed in any::<u64>()) {
        let pool = pool_from(&drawings);
        let mut rng = StdRng::seed_from_u64(seed);
        let board = MemoryGenerator::new().generate(&pool, &mut rng);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in board.cards() {
            *counts.entry(card.token.id.as_str()).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), MEMORY_PAIRS.min(pool.len()));
        prop_assert!(counts.values().all(|c| *c == 2));
        let ids: HashSet<usize> = board.cards().iter().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), board.cards().len());
    }

    // 6. Flipping every pair completes the board and scores exactly once
    #[test]
    fn memory_solved_scores_once(seed in any::<u64>()) {
        let pool = build_pool(&[]);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut level = PairLevel::new(&GameConfig::default());
        let mut counter = Counter::default();

        let tokens: Vec<Token> = level
            .present(&pool, &mut rng)
            .unwrap()
            .cards()
            .iter()
            .map(|c| c.token.clone())
            .collect();
        let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, token) in tokens.iter().enumerate() {
            positions.entry(token.id.clone()).or_default().push(i);
        }

        let mut completed = 0;
        for pair in positions.values() {
            level.flip_card(pair[0]);
            let (_, schedule) = level.flip_card(pair[1]);
            prop_assert!(schedule.is_some());
            if let CompareOutcome::Matched { completed: true } =
                level.fire(TimerEvent::ResolveCompare, &mut counter)
            {
                completed += 1;
            }
        }
        prop_assert_eq!(completed, 1);
        prop_assert_eq!(counter.scores, 1);
        prop_assert_eq!(level.level(), 1);
        prop_assert!(level.board().unwrap().cards().iter().all(|c| c.matched));
    }
}
