/*
matrix.rs

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

//! Generate visual analogy rounds.
//!
//! The grid reads "A in color 1 becomes A in color 2, so B in color 1 becomes ?".
//!
//! ```text
//! (A, C1)  (A, C2)
//! (B, C1)     ?
//! ```
//!
//! The options are the target (B, C2) and two constructed distractors:
//!
//! * wrong color, (B, C1): the input cell repeated, for players who did not apply the color
//!   change;
//! * wrong object, (A, C2): the top-right cell repeated, for players who copy the row above.
//!
//! Both distractors are distinct from the target and from each other as soon as A differs from
//! B and C1 differs from C2, which the initial draw guarantees.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use strum_macros::FromRepr;

use super::sampling;
use crate::game::RoundData;

/// Objects drawn in the grid.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum MatrixIcon {
    Sun,
    Moon,
    Cloud,
    Umbrella,
    Flower,
    Star,
}

impl MatrixIcon {
    pub fn catalog() -> Vec<MatrixIcon> {
        (0..).map_while(MatrixIcon::from_repr).collect()
    }
}

impl fmt::Display for MatrixIcon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            MatrixIcon::Sun => "sun",
            MatrixIcon::Moon => "moon",
            MatrixIcon::Cloud => "cloud",
            MatrixIcon::Umbrella => "umbrella",
            MatrixIcon::Flower => "flower",
            MatrixIcon::Star => "star",
        };
        write!(f, "{name}")
    }
}

/// Colors applied to the objects.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum MatrixColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl MatrixColor {
    pub fn catalog() -> Vec<MatrixColor> {
        (0..).map_while(MatrixColor::from_repr).collect()
    }
}

impl fmt::Display for MatrixColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            MatrixColor::Red => "red",
            MatrixColor::Blue => "blue",
            MatrixColor::Green => "green",
            MatrixColor::Yellow => "yellow",
            MatrixColor::Purple => "purple",
        };
        write!(f, "{name}")
    }
}

/// Object and color pair.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Attributes {
    pub icon: MatrixIcon,
    pub color: MatrixColor,
}

impl Attributes {
    pub fn new(icon: MatrixIcon, color: MatrixColor) -> Self {
        Self { icon, color }
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.color, self.icon)
    }
}

/// Visible grid cell.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct MatrixCell {
    /// Position in the grid, in reading order (0: top left, 1: top right, 2: bottom left).
    pub id: usize,

    pub attributes: Attributes,
}

/// Why an option is wrong.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Distractor {
    /// The color was not changed.
    WrongColor,

    /// The object of the row above was copied.
    WrongObject,
}

/// Candidate answer.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct MatrixOption {
    /// Identifier: 0 for the target, 1 for the wrong color, 2 for the wrong object.
    pub id: usize,

    pub attributes: Attributes,

    pub is_correct: bool,

    /// Distractor rule, None for the target.
    pub distractor: Option<Distractor>,
}

/// Analogy round.
#[derive(Serialize, Debug, Clone)]
pub struct MatrixRound {
    /// The three visible cells.
    pub grid: [MatrixCell; 3],

    /// Hidden bottom right cell.
    pub target: Attributes,

    /// Options, in display order.
    pub options: Vec<MatrixOption>,
}

impl MatrixRound {
    /// Build the round for the given objects and colors, before shuffling the options.
    pub fn from_attributes(
        object_a: MatrixIcon,
        object_b: MatrixIcon,
        color_1: MatrixColor,
        color_2: MatrixColor,
    ) -> Self {
        let target: Attributes = Attributes::new(object_b, color_2);
        Self {
            grid: [
                MatrixCell {
                    id: 0,
                    attributes: Attributes::new(object_a, color_1),
                },
                MatrixCell {
                    id: 1,
                    attributes: Attributes::new(object_a, color_2),
                },
                MatrixCell {
                    id: 2,
                    attributes: Attributes::new(object_b, color_1),
                },
            ],
            target,
            options: vec![
                MatrixOption {
                    id: 0,
                    attributes: target,
                    is_correct: true,
                    distractor: None,
                },
                MatrixOption {
                    id: 1,
                    attributes: Attributes::new(object_b, color_1),
                    is_correct: false,
                    distractor: Some(Distractor::WrongColor),
                },
                MatrixOption {
                    id: 2,
                    attributes: Attributes::new(object_a, color_2),
                    is_correct: false,
                    distractor: Some(Distractor::WrongObject),
                },
            ],
        }
    }

    /// Return the display position of the correct option.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.is_correct)
    }
}

impl RoundData for MatrixRound {
    fn option_count(&self) -> usize {
        self.options.len()
    }

    fn is_correct(&self, option_index: usize) -> bool {
        self.options
            .get(option_index)
            .is_some_and(|o| o.is_correct)
    }
}

/// [`MatrixGenerator`] object.
#[derive(Debug, Default)]
pub struct MatrixGenerator;

impl MatrixGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate and return an analogy round.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> MatrixRound {
        let icons: Vec<MatrixIcon> = sampling::pick_distinct(rng, &MatrixIcon::catalog(), 2);
        let colors: Vec<MatrixColor> = sampling::pick_distinct(rng, &MatrixColor::catalog(), 2);
        debug!(
            "Objects = {} {}  Colors = {} {}",
            icons[0], icons[1], colors[0], colors[1]
        );

        let mut round: MatrixRound =
            MatrixRound::from_attributes(icons[0], icons[1], colors[0], colors[1]);
        round.options = sampling::shuffled(rng, round.options);
        round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_example_round() {
        let round = MatrixRound::from_attributes(
            MatrixIcon::Sun,
            MatrixIcon::Cloud,
            MatrixColor::Red,
            MatrixColor::Blue,
        );
        assert_eq!(
            round.grid.map(|c| c.attributes),
            [
                Attributes::new(MatrixIcon::Sun, MatrixColor::Red),
                Attributes::new(MatrixIcon::Sun, MatrixColor::Blue),
                Attributes::new(MatrixIcon::Cloud, MatrixColor::Red),
            ]
        );
        assert_eq!(
            round.target,
            Attributes::new(MatrixIcon::Cloud, MatrixColor::Blue)
        );
        assert_eq!(
            round.options[1].attributes,
            Attributes::new(MatrixIcon::Cloud, MatrixColor::Red)
        );
        assert_eq!(
            round.options[2].attributes,
            Attributes::new(MatrixIcon::Sun, MatrixColor::Blue)
        );
        assert_eq!(round.correct_index(), Some(0));
    }

    #[test]
    fn test_generated_options_distinct() {
        let generator = MatrixGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let round = generator.generate(&mut rng);
            assert_eq!(round.options.len(), 3);
            assert_eq!(round.options.iter().filter(|o| o.is_correct).count(), 1);
            for (i, a) in round.options.iter().enumerate() {
                for b in &round.options[i + 1..] {
                    assert_ne!(a.attributes, b.attributes);
                }
            }
            let index = round.correct_index().unwrap();
            assert!(round.is_correct(index));
            assert_eq!(round.options[index].attributes, round.target);
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(MatrixIcon::catalog().len(), 6);
        assert_eq!(MatrixColor::catalog().len(), 5);
    }
}
