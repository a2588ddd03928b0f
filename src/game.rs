/*
game.rs

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

//! The four mini-games and the [`Puzzle`] trait that the single-answer games implement.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::generator::cipher::{CipherGenerator, CipherRound};
use crate::generator::matrix::{MatrixGenerator, MatrixRound};
use crate::generator::pool::Pool;
use crate::generator::shadow::{ShadowGenerator, ShadowRound};

/// Mini-game identifier.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum GameKind {
    /// Substitution puzzle: decode the question row with the clue rows.
    #[default]
    Cipher,

    /// Visual analogy on a 2x2 grid.
    Matrix,

    /// Find the token matching the shadow.
    Shadow,

    /// Find all the pairs on a board of face-down cards.
    Memory,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameKind::Cipher => write!(f, "Şifreler"),
            GameKind::Matrix => write!(f, "Matris"),
            GameKind::Shadow => write!(f, "Gölgeler"),
            GameKind::Memory => write!(f, "Hafıza"),
        }
    }
}

impl GameKind {
    /// Return all the games, in menu order.
    pub fn all() -> Vec<GameKind> {
        (0..)
            .map_while(GameKind::from_repr)
            .collect::<Vec<GameKind>>()
    }
}

/// A round with a list of options, one of them being the correct answer.
pub trait RoundData {
    /// Number of options presented to the player.
    fn option_count(&self) -> usize;

    /// Whether the option at the given display position is the correct answer.
    ///
    /// Positions out of range are never correct.
    fn is_correct(&self, option_index: usize) -> bool;
}

/// Decide whether the player's choice is the correct answer.
///
/// The decision is pure: the level state machine calls the score sink on the caller's behalf.
pub fn submit_answer<R: RoundData>(round: &R, option_index: usize) -> bool {
    round.is_correct(option_index)
}

/// A single-answer game able to produce rounds from a pool.
pub trait Puzzle {
    type Round: RoundData;

    fn kind(&self) -> GameKind;

    /// Generate a new round.
    ///
    /// The round is a pure function of the pool and of the values drawn from `rng`. The
    /// generator may update its statistics.
    fn generate_round<R: Rng + ?Sized>(&mut self, pool: &Pool, rng: &mut R) -> Self::Round;
}

impl Puzzle for CipherGenerator {
    type Round = CipherRound;

    fn kind(&self) -> GameKind {
        GameKind::Cipher
    }

    fn generate_round<R: Rng + ?Sized>(&mut self, pool: &Pool, rng: &mut R) -> CipherRound {
        self.generate(pool, rng)
    }
}

impl Puzzle for MatrixGenerator {
    type Round = MatrixRound;

    fn kind(&self) -> GameKind {
        GameKind::Matrix
    }

    // The matrix game draws from its own catalogs and ignores the token pool
    fn generate_round<R: Rng + ?Sized>(&mut self, _pool: &Pool, rng: &mut R) -> MatrixRound {
        self.generate(rng)
    }
}

impl Puzzle for ShadowGenerator {
    type Round = ShadowRound;

    fn kind(&self) -> GameKind {
        GameKind::Shadow
    }

    fn generate_round<R: Rng + ?Sized>(&mut self, pool: &Pool, rng: &mut R) -> ShadowRound {
        self.generate(pool, rng)
    }
}
