/*
lib.rs

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

//! Puzzle engine of the Dreamweaver mini-games.
//!
//! * [`generator`] builds the token pool and the rounds of the four games.
//! * [`game`] defines the games and the [`game::Puzzle`] trait.
//! * [`round`] manages the lifecycle of the rounds and the level counters.
//! * [`stars`] and [`saver`] keep the player's rewards.
//!
//! All randomness comes from the [`rand::Rng`] object given by the caller, so that a seeded
//! generator produces reproducible rounds.

pub mod config;
pub mod game;
pub mod generator;
pub mod round;
pub mod saver;
pub mod stars;
