/*
shapes.rs

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

//! Abstract shapes used as cipher symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Shape catalog.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Star,
    Hexagon,
    Diamond,
    Heart,
}

impl Shape {
    /// Return the seven shapes of the catalog.
    pub fn catalog() -> Vec<Shape> {
        (0..).map_while(Shape::from_repr).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Star => "star",
            Shape::Hexagon => "hexagon",
            Shape::Diamond => "diamond",
            Shape::Heart => "heart",
        }
    }

    /// Display color of the shape.
    pub fn color(&self) -> &'static str {
        match self {
            Shape::Circle => "red",
            Shape::Square => "blue",
            Shape::Triangle => "green",
            Shape::Star => "yellow",
            Shape::Hexagon => "purple",
            Shape::Diamond => "orange",
            Shape::Heart => "pink",
        }
    }

    /// Symbol used by text front ends.
    pub fn symbol(&self) -> char {
        match self {
            Shape::Circle => '●',
            Shape::Square => '■',
            Shape::Triangle => '▲',
            Shape::Star => '★',
            Shape::Hexagon => '⬢',
            Shape::Diamond => '◆',
            Shape::Heart => '♥',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
