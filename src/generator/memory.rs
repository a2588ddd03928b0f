/*
memory.rs

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

//! Memory board: deal pairs of cards and manage the flipping protocol.
//!
//! At most two cards can be face up and unmatched at the same time.
//! When the second card is flipped, a comparison is pending: the board ignores all flips until
//! [`Board::resolve_compare`] is called, which the caller does after a short delay so that the
//! player can see both cards.

use log::debug;
use rand::Rng;
use serde::Serialize;

use super::pool::Pool;
use super::sampling;
use super::tokens::Token;
use crate::config::MEMORY_PAIRS;

/// Memory card.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Card {
    /// Card identifier, unique on the board.
    pub id: usize,

    /// Token printed on the card. Two cards share each token.
    pub token: Token,

    pub face_up: bool,

    pub matched: bool,
}

/// Result of a flip.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The flip is not allowed (matched card, face-up card, comparison pending, or unknown card).
    Ignored,

    /// The card is now face up, waiting for a second card.
    Flipped,

    /// Second card flipped. [`Board::resolve_compare`] must be called after a delay.
    ComparePending {
        /// Whether the two face-up cards carry the same token.
        matching: bool,
    },
}

/// Result of a comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    /// No comparison was pending.
    Nothing,

    /// The two cards are now matched.
    Matched {
        /// Whether all the pairs are now matched.
        completed: bool,
    },

    /// The two cards are face down again.
    Mismatched,
}

/// Memory board.
#[derive(Serialize, Debug, Clone)]
pub struct Board {
    /// Cards, in display order.
    cards: Vec<Card>,

    /// Display positions of the face-up cards that are not matched yet.
    pending: Vec<usize>,

    /// Number of matched pairs.
    matches: usize,

    /// Number of pairs on the board.
    pairs: usize,
}

impl Board {
    /// Create a [`Board`] object from the cards, in display order.
    pub fn new(cards: Vec<Card>) -> Self {
        let pairs: usize = cards.len() / 2;
        Self {
            cards,
            pending: Vec::with_capacity(2),
            matches: 0,
            pairs,
        }
    }

    /// Return a reference to the cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether two cards are face up and waiting for [`Board::resolve_compare`].
    pub fn is_compare_pending(&self) -> bool {
        self.pending.len() >= 2
    }

    /// Return the number of matched pairs.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Return the number of pairs still to find.
    pub fn remaining_pairs(&self) -> usize {
        self.pairs.saturating_sub(self.matches)
    }

    /// Whether all the pairs are matched.
    pub fn is_complete(&self) -> bool {
        self.remaining_pairs() == 0
    }

    /// Flip the card at the given display position.
    pub fn flip_card(&mut self, index: usize) -> FlipOutcome {
        if self.is_compare_pending() {
            debug!("Flip {index} ignored: comparison pending");
            return FlipOutcome::Ignored;
        }
        let card: &mut Card = match self.cards.get_mut(index) {
            Some(c) => c,
            None => return FlipOutcome::Ignored,
        };
        if card.face_up || card.matched {
            debug!("Flip {index} ignored: card already visible");
            return FlipOutcome::Ignored;
        }

        card.face_up = true;
        self.pending.push(index);
        if !self.is_compare_pending() {
            return FlipOutcome::Flipped;
        }

        let matching: bool = self.cards[self.pending[0]].token.id == self.cards[index].token.id;
        debug!(
            "Comparing cards {} and {index}: matching = {matching}",
            self.pending[0]
        );
        FlipOutcome::ComparePending { matching }
    }

    /// Resolve the pending comparison.
    ///
    /// Equal cards become matched. Different cards are turned face down.
    pub fn resolve_compare(&mut self) -> CompareOutcome {
        if !self.is_compare_pending() {
            return CompareOutcome::Nothing;
        }
        let first: usize = self.pending[0];
        let second: usize = self.pending[1];
        self.pending.clear();

        if self.cards[first].token.id == self.cards[second].token.id {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            if self.matches < self.pairs {
                self.matches += 1;
            }
            debug!("Pair {} matched ({}/{})", self.cards[first].token, self.matches, self.pairs);
            CompareOutcome::Matched {
                completed: self.is_complete(),
            }
        } else {
            self.cards[first].face_up = false;
            self.cards[second].face_up = false;
            CompareOutcome::Mismatched
        }
    }
}

/// [`MemoryGenerator`] object.
#[derive(Debug, Default)]
pub struct MemoryGenerator;

impl MemoryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Deal and return a new board.
    ///
    /// With fewer than six tokens in the pool, the board has fewer pairs.
    pub fn generate<R: Rng + ?Sized>(&self, pool: &Pool, rng: &mut R) -> Board {
        let tokens: Vec<Token> = sampling::pick_distinct(rng, pool.tokens(), MEMORY_PAIRS);
        let cards: Vec<Card> = tokens
            .iter()
            .chain(tokens.iter())
            .enumerate()
            .map(|(id, token)| Card {
                id,
                token: token.clone(),
                face_up: false,
                matched: false,
            })
            .collect();
        debug!("Dealing {} cards", cards.len());
        Board::new(sampling::shuffled(rng, cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::pool::build_pool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn deal(seed: u64) -> Board {
        let pool = build_pool(&[]);
        let mut rng = StdRng::seed_from_u64(seed);
        MemoryGenerator::new().generate(&pool, &mut rng)
    }

    /// Return the display positions of the two cards of each pair.
    fn pairs(board: &Board) -> Vec<(usize, usize)> {
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, card) in board.cards().iter().enumerate() {
            positions.entry(card.token.id.as_str()).or_default().push(i);
        }
        positions.values().map(|v| (v[0], v[1])).collect()
    }

    #[test]
    fn test_each_token_twice() {
        for seed in 0..20 {
            let board = deal(seed);
            assert_eq!(board.cards().len(), 2 * MEMORY_PAIRS);
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for card in board.cards() {
                *counts.entry(card.token.id.as_str()).or_default() += 1;
            }
            assert_eq!(counts.len(), MEMORY_PAIRS);
            assert!(counts.values().all(|c| *c == 2));
            assert!(board.cards().iter().all(|c| !c.face_up && !c.matched));
        }
    }

    #[test]
    fn test_match_all_pairs() {
        let mut board = deal(42);
        for (a, b) in pairs(&board) {
            assert_eq!(board.flip_card(a), FlipOutcome::Flipped);
            assert_eq!(
                board.flip_card(b),
                FlipOutcome::ComparePending { matching: true }
            );
            assert!(matches!(
                board.resolve_compare(),
                CompareOutcome::Matched { .. }
            ));
        }
        assert!(board.is_complete());
        assert_eq!(board.matches(), MEMORY_PAIRS);
        assert!(board.cards().iter().all(|c| c.matched));

        // Nothing left to flip, and the counter does not move
        assert_eq!(board.flip_card(0), FlipOutcome::Ignored);
        assert_eq!(board.resolve_compare(), CompareOutcome::Nothing);
        assert_eq!(board.remaining_pairs(), 0);
    }

    #[test]
    fn test_last_pair_completes() {
        let mut board = deal(3);
        let all = pairs(&board);
        let (last, rest) = all.split_last().unwrap();
        for (a, b) in rest {
            board.flip_card(*a);
            board.flip_card(*b);
            assert_eq!(
                board.resolve_compare(),
                CompareOutcome::Matched { completed: false }
            );
        }
        board.flip_card(last.0);
        board.flip_card(last.1);
        assert_eq!(
            board.resolve_compare(),
            CompareOutcome::Matched { completed: true }
        );
    }

    #[test]
    fn test_mismatch_turns_cards_down() {
        let mut board = deal(7);
        let all = pairs(&board);
        let a = all[0].0;
        let b = all[1].0;

        board.flip_card(a);
        assert_eq!(
            board.flip_card(b),
            FlipOutcome::ComparePending { matching: false }
        );
        assert_eq!(board.resolve_compare(), CompareOutcome::Mismatched);
        assert!(!board.cards()[a].face_up);
        assert!(!board.cards()[b].face_up);
        assert_eq!(board.matches(), 0);
    }

    #[test]
    fn test_illegal_flips_ignored() {
        let mut board = deal(11);
        let all = pairs(&board);
        let (a, b) = all[0];
        let c = all[1].0;

        assert_eq!(board.flip_card(a), FlipOutcome::Flipped);
        // Same card twice
        assert_eq!(board.flip_card(a), FlipOutcome::Ignored);
        assert_eq!(board.flip_card(99), FlipOutcome::Ignored);
        board.flip_card(b);
        // Third card while the comparison is pending
        assert_eq!(board.flip_card(c), FlipOutcome::Ignored);
        assert!(!board.cards()[c].face_up);

        board.resolve_compare();
        // Matched card
        assert_eq!(board.flip_card(a), FlipOutcome::Ignored);
    }
}
