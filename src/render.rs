/*
render.rs

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

//! Text rendering of the rounds for the terminal front end.

use dreamweaver_puzzles::generator::cipher::CipherRound;
use dreamweaver_puzzles::generator::matrix::MatrixRound;
use dreamweaver_puzzles::generator::memory::{Board, Card};
use dreamweaver_puzzles::generator::shadow::ShadowRound;
use dreamweaver_puzzles::generator::shapes::Shape;
use dreamweaver_puzzles::generator::tokens::Token;

/// Number of memory cards per line.
const BOARD_COLUMNS: usize = 4;

/// Objects that can be printed in the terminal.
pub trait Render {
    fn render(&self) -> String;
}

fn token_row(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:<8}", t.to_string()))
        .collect::<Vec<String>>()
        .join(" ")
        .trim_end()
        .to_string()
}

fn shape_row(shapes: &[Shape]) -> String {
    shapes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

impl Render for CipherRound {
    fn render(&self) -> String {
        let mut out: Vec<String> = vec![String::from("  Clues:")];
        for row in &self.clue_rows {
            out.push(format!("    {}", token_row(&row.tokens)));
        }
        out.push(String::from("  Codes:"));
        for row in &self.shape_rows {
            out.push(format!("    {}", shape_row(&row.shapes)));
        }
        let legend: Vec<String> = self
            .active_shapes
            .iter()
            .map(|s| format!("{s} {} {}", s.color(), s.name()))
            .collect();
        out.push(format!("  Shapes: {}", legend.join(", ")));
        out.push(format!("  Decode: {}", token_row(&self.question.tokens)));
        for (i, option) in self.options.iter().enumerate() {
            out.push(format!("    {}) {}", i + 1, shape_row(&option.shapes)));
        }
        out.join("\n")
    }
}

impl Render for MatrixRound {
    fn render(&self) -> String {
        let mut out: Vec<String> = vec![
            format!("  {:<16} {}", self.grid[0].attributes.to_string(), self.grid[1].attributes),
            format!("  {:<16} ?", self.grid[2].attributes.to_string()),
        ];
        for (i, option) in self.options.iter().enumerate() {
            out.push(format!("    {}) {}", i + 1, option.attributes));
        }
        out.join("\n")
    }
}

impl Render for ShadowRound {
    fn render(&self) -> String {
        let mut out: Vec<String> =
            vec![format!("  Shadow of: {}", "?".repeat(self.target.id.len()))];
        for (i, option) in self.options.iter().enumerate() {
            out.push(format!("    {}) {option}", i + 1));
        }
        out.join("\n")
    }
}

fn card_label(card: &Card) -> String {
    if card.matched {
        format!("({})", card.token)
    } else if card.face_up {
        card.token.to_string()
    } else {
        String::from("#")
    }
}

impl Render for Board {
    fn render(&self) -> String {
        self.cards()
            .chunks(BOARD_COLUMNS)
            .enumerate()
            .map(|(line, cards)| {
                let cells: Vec<String> = cards
                    .iter()
                    .enumerate()
                    .map(|(col, card)| {
                        format!("{:>3}: {:<10}", line * BOARD_COLUMNS + col + 1, card_label(card))
                    })
                    .collect();
                format!("  {}", cells.join(" ").trim_end())
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Print the solution of a round, for the generation mode.
pub fn solution<T: Render>(round: &T, correct_index: Option<usize>) -> String {
    match correct_index {
        Some(i) => format!("{}\n  Answer: {}", round.render(), i + 1),
        None => round.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamweaver_puzzles::generator::cipher::CipherGenerator;
    use dreamweaver_puzzles::generator::pool::build_pool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cipher_legend_shows_colors() {
        let pool = build_pool(&[]);
        let mut rng = StdRng::seed_from_u64(12);
        let round = CipherGenerator::new().generate(&pool, &mut rng);
        let text = round.render();
        for shape in &round.active_shapes {
            assert!(text.contains(&format!("{shape} {} {}", shape.color(), shape.name())));
        }
    }
}
