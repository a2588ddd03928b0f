/*
generator.rs

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

//! Build token pools and generate random puzzle rounds.
//!
//! All the games draw their material from a [`pool::Pool`].
//! A pool is built from the player's saved drawings, represented by [`tokens::Token`] objects,
//! completed with built-in icons. You create a pool with [`pool::build_pool`].
//!
//! Each game then has its own generator:
//!
//! * [`cipher::CipherGenerator`] builds a substitution puzzle: a secret mapping from four tokens
//!   to four [`shapes::Shape`] objects, clue rows to decode the mapping, a question row, and
//!   three options.
//!   Wrong options are resampled until they differ from the correct answer and from each other.
//!
//! * [`matrix::MatrixGenerator`] builds a 2x2 analogy grid (object x color) with a missing cell.
//!   The two wrong options are constructed from the grid, so no resampling is needed.
//!
//! * [`shadow::ShadowGenerator`] picks a target token and two other tokens.
//!
//! * [`memory::MemoryGenerator`] deals a [`memory::Board`] of six pairs of cards. The board also
//!   implements the card flipping protocol.
//!
//! The generators never use an ambient random source: every generation method receives the
//! random number generator to use. The shared drawing primitives are in [`sampling`].

pub mod cipher;
pub mod matrix;
pub mod memory;
pub mod pool;
pub mod sampling;
pub mod shadow;
pub mod shapes;
pub mod tokens;
