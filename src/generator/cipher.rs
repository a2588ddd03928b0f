/*
cipher.rs

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

//! Generate cipher (substitution) rounds.
//!
//! A round is built in five steps:
//!
//! 1. Four distinct tokens and four distinct shapes are drawn, and paired one-to-one into a
//!    [`CipherMapping`].
//! 2. Four clue rows of four tokens are sampled from the mapped tokens. Their encoded shape rows
//!    are presented in a different, random row order, so that the player has to match the rows
//!    by content.
//! 3. A question row is sampled the same way. Encoding it gives the answer.
//! 4. Two distractors are sampled from the active shapes. A distractor equal to the answer or to
//!    another distractor is rejected and sampled again. After
//!    [`crate::config::DISTRACTOR_MAX_ATTEMPTS`] rejections, a distractor is derived from the
//!    answer instead.
//! 5. The three options are shuffled.

use log::{Level, debug, log_enabled};
use rand::Rng;
use serde::Serialize;
use std::time::Instant;

use super::pool::Pool;
use super::sampling;
use super::shapes::Shape;
use super::tokens::Token;
use crate::config::{
    CIPHER_ACTIVE_COUNT, CIPHER_CLUE_ROWS, CIPHER_OPTION_COUNT, CIPHER_ROW_LEN,
    DISTRACTOR_MAX_ATTEMPTS,
};
use crate::game::RoundData;

/// One-to-one mapping from tokens to shapes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CipherMapping {
    /// Token and shape pairs. No token and no shape appears twice.
    pairs: Vec<(Token, Shape)>,
}

impl CipherMapping {
    /// Pair the tokens and the shapes by position.
    ///
    /// Extra elements on the longer side are left unmapped. The caller provides distinct tokens
    /// and distinct shapes.
    pub fn new(tokens: Vec<Token>, shapes: &[Shape]) -> Self {
        Self {
            pairs: tokens.into_iter().zip(shapes.iter().copied()).collect(),
        }
    }

    /// Return the shape for the given token identifier, or None if the token is not mapped.
    pub fn shape_of(&self, token_id: &str) -> Option<Shape> {
        self.pairs
            .iter()
            .find(|(t, _)| t.id == token_id)
            .map(|(_, s)| *s)
    }

    /// Return the mapped tokens.
    pub fn tokens(&self) -> Vec<Token> {
        self.pairs.iter().map(|(t, _)| t.clone()).collect()
    }

    /// Return the mapped shapes.
    pub fn shapes(&self) -> Vec<Shape> {
        self.pairs.iter().map(|(_, s)| *s).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode a row of tokens. Unmapped tokens are skipped.
    pub fn encode(&self, row: &[Token]) -> Vec<Shape> {
        row.iter().filter_map(|t| self.shape_of(&t.id)).collect()
    }

    /// Whether no two tokens share a shape and no token appears twice.
    pub fn is_injective(&self) -> bool {
        for (i, (token, shape)) in self.pairs.iter().enumerate() {
            for (other_token, other_shape) in &self.pairs[i + 1..] {
                if token.id == other_token.id || shape == other_shape {
                    return false;
                }
            }
        }
        true
    }
}

/// Row of tokens (clue or question).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TokenRow {
    pub id: usize,
    pub tokens: Vec<Token>,
}

/// Encoded clue row.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShapeRow {
    /// Identifier of the clue row that this row encodes.
    pub id: usize,

    pub shapes: Vec<Shape>,
}

/// Candidate answer.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CipherOption {
    /// Identifier. The correct option is created first and gets identifier 0.
    pub id: usize,

    pub shapes: Vec<Shape>,

    pub is_correct: bool,
}

/// Cipher round.
#[derive(Serialize, Debug, Clone)]
pub struct CipherRound {
    /// Secret mapping. Not displayed.
    pub mapping: CipherMapping,

    /// Shapes from which the distractors are drawn.
    pub active_shapes: Vec<Shape>,

    /// Clue rows, in display order.
    pub clue_rows: Vec<TokenRow>,

    /// Encoded clue rows, in their own display order.
    pub shape_rows: Vec<ShapeRow>,

    /// Row to decode.
    pub question: TokenRow,

    /// Encoded question row.
    pub answer: Vec<Shape>,

    /// Options, in display order.
    pub options: Vec<CipherOption>,
}

impl CipherRound {
    /// Return the display position of the correct option.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.is_correct)
    }
}

impl RoundData for CipherRound {
    fn option_count(&self) -> usize {
        self.options.len()
    }

    fn is_correct(&self, option_index: usize) -> bool {
        self.options
            .get(option_index)
            .is_some_and(|o| o.is_correct)
    }
}

/// [`CipherGenerator`] object.
#[derive(Debug, Default)]
pub struct CipherGenerator {
    /// Number of distractor candidates drawn for the last round.
    pub iteration: usize,

    /// Number of distractors that had to be derived from the answer for the last round.
    pub fallbacks: usize,

    /// Duration in seconds it took to generate the last round.
    pub duration: f32,
}

impl CipherGenerator {
    /// Create the object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate and return a cipher round.
    ///
    /// Pools with fewer than four tokens produce a smaller mapping. The rows then repeat the
    /// available tokens, and the distractors still use four shapes.
    pub fn generate<R: Rng + ?Sized>(&mut self, pool: &Pool, rng: &mut R) -> CipherRound {
        let start: Instant = Instant::now();
        self.iteration = 0;
        self.fallbacks = 0;

        let tokens: Vec<Token> = sampling::pick_distinct(rng, pool.tokens(), CIPHER_ACTIVE_COUNT);
        let active_shapes: Vec<Shape> =
            sampling::pick_distinct(rng, &Shape::catalog(), CIPHER_ACTIVE_COUNT);
        let mapping: CipherMapping = CipherMapping::new(tokens, &active_shapes);

        if log_enabled!(Level::Debug) {
            for (token, shape) in &mapping.pairs {
                debug!("    {token} -> {}", shape.name());
            }
        }

        let mapped: Vec<Token> = mapping.tokens();
        let clue_rows: Vec<TokenRow> = (0..CIPHER_CLUE_ROWS)
            .map(|id| TokenRow {
                id,
                tokens: sampling::sample_with_replacement(rng, &mapped, CIPHER_ROW_LEN),
            })
            .collect();

        let encoded: Vec<ShapeRow> = clue_rows
            .iter()
            .map(|row| ShapeRow {
                id: row.id,
                shapes: mapping.encode(&row.tokens),
            })
            .collect();
        let row_order: Vec<usize> = sampling::permutation(rng, encoded.len());
        let shape_rows: Vec<ShapeRow> = sampling::apply_permutation(&encoded, &row_order);
        debug!("Shape row order = {row_order:?}");

        let question: TokenRow = TokenRow {
            id: CIPHER_CLUE_ROWS,
            tokens: sampling::sample_with_replacement(rng, &mapped, CIPHER_ROW_LEN),
        };
        let answer: Vec<Shape> = mapping.encode(&question.tokens);

        let mut options: Vec<CipherOption> = Vec::with_capacity(CIPHER_OPTION_COUNT);
        options.push(CipherOption {
            id: 0,
            shapes: answer.clone(),
            is_correct: true,
        });
        for (i, shapes) in self
            .build_distractors(rng, &active_shapes, &answer)
            .into_iter()
            .enumerate()
        {
            options.push(CipherOption {
                id: i + 1,
                shapes,
                is_correct: false,
            });
        }
        let options: Vec<CipherOption> = sampling::shuffled(rng, options);

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Fallbacks = {}  Duration = {}",
            self.iteration, self.fallbacks, self.duration
        );

        CipherRound {
            mapping,
            active_shapes,
            clue_rows,
            shape_rows,
            question,
            answer,
            options,
        }
    }

    /// Return the wrong options for the given answer.
    ///
    /// The returned sequences differ from the answer and from each other in at least one position.
    fn build_distractors<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        active_shapes: &[Shape],
        answer: &[Shape],
    ) -> Vec<Vec<Shape>> {
        // The answer is kept at index 0 so that candidates are compared against it too
        let mut accepted: Vec<Vec<Shape>> = Vec::with_capacity(CIPHER_OPTION_COUNT);
        accepted.push(answer.to_vec());

        while accepted.len() < CIPHER_OPTION_COUNT {
            let mut candidate: Option<Vec<Shape>> = None;

            for _ in 0..DISTRACTOR_MAX_ATTEMPTS {
                self.iteration += 1;
                let shapes: Vec<Shape> =
                    sampling::sample_with_replacement(rng, active_shapes, answer.len());
                if !accepted.contains(&shapes) {
                    candidate = Some(shapes);
                    break;
                }
                debug!("    Distractor {shapes:?} rejected");
            }

            if candidate.is_none() {
                self.fallbacks += 1;
                debug!("    No distractor after {DISTRACTOR_MAX_ATTEMPTS} attempts");
                candidate = derive_distractor(active_shapes, &accepted);
            }

            match candidate {
                Some(shapes) => accepted.push(shapes),
                // Only possible with less than two active shapes
                None => break,
            }
        }
        accepted.split_off(1)
    }
}

/// Derive a distractor from the answer (first element of `accepted`) by replacing a single
/// position with another active shape.
///
/// Candidates are tried position by position. Each one differs from the answer in exactly one
/// position, so two different candidates are always distinct. Return None when every candidate
/// is already in `accepted`.
pub fn derive_distractor(active_shapes: &[Shape], accepted: &[Vec<Shape>]) -> Option<Vec<Shape>> {
    let answer: &Vec<Shape> = accepted.first()?;
    let n: usize = active_shapes.len();

    for position in 0..answer.len() {
        let current: usize = active_shapes
            .iter()
            .position(|s| *s == answer[position])
            .unwrap_or(0);
        for step in 1..n {
            let mut candidate: Vec<Shape> = answer.clone();
            candidate[position] = active_shapes[(current + step) % n];
            if !accepted.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}
