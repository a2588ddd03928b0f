/*
play.rs

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

//! Interactive terminal session.
//!
//! The session drives the level state machines with the lines typed by the player: the number
//! of an option (or of a memory card), or `q` to quit.
//! Scheduled delays are honored by sleeping before firing the event, so the feedback stays on
//! screen as long as it would in the application.

use log::debug;
use rand::rngs::StdRng;
use std::error::Error;
use std::io::{BufRead, Write};
use std::thread;

use dreamweaver_puzzles::config::GameConfig;
use dreamweaver_puzzles::game::{GameKind, Puzzle};
use dreamweaver_puzzles::generator::cipher::CipherGenerator;
use dreamweaver_puzzles::generator::matrix::MatrixGenerator;
use dreamweaver_puzzles::generator::memory::{Board, CompareOutcome, FlipOutcome};
use dreamweaver_puzzles::generator::pool::Pool;
use dreamweaver_puzzles::generator::shadow::ShadowGenerator;
use dreamweaver_puzzles::round::{AnswerOutcome, Level, PairLevel};
use dreamweaver_puzzles::saver::stars::SaverStars;
use dreamweaver_puzzles::stars::StarLedger;

use crate::render::Render;

/// Player's command.
enum Command {
    Quit,

    /// Option or card, 0-based.
    Choose(usize),

    Unknown,
}

/// Read the next command. Return None at the end of the input.
fn read_command<I: BufRead>(input: &mut I) -> Result<Option<Command>, Box<dyn Error>> {
    print!("> ");
    std::io::stdout().flush()?;

    let mut line: String = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line: &str = line.trim();
    if line == "q" {
        return Ok(Some(Command::Quit));
    }
    Ok(Some(match line.parse::<usize>() {
        Ok(n) if n > 0 => Command::Choose(n - 1),
        _ => Command::Unknown,
    }))
}

/// Terminal session.
pub struct Session<'a, I: BufRead> {
    input: I,
    pool: &'a Pool,
    config: &'a GameConfig,
    rng: &'a mut StdRng,
    ledger: StarLedger,
    saver: Option<SaverStars>,
}

impl<'a, I: BufRead> Session<'a, I> {
    pub fn new(
        input: I,
        pool: &'a Pool,
        config: &'a GameConfig,
        rng: &'a mut StdRng,
        ledger: StarLedger,
        saver: Option<SaverStars>,
    ) -> Self {
        Self {
            input,
            pool,
            config,
            rng,
            ledger,
            saver,
        }
    }

    /// Play the given game until the player quits or the input ends.
    pub fn run(&mut self, kind: GameKind) -> Result<(), Box<dyn Error>> {
        println!(
            "{kind}. Stars: {} ({}, level {})",
            self.ledger.stars(),
            self.ledger.title(),
            self.ledger.level()
        );
        match kind {
            GameKind::Cipher => self.run_level(Level::new(CipherGenerator::new(), self.config)),
            GameKind::Matrix => self.run_level(Level::new(MatrixGenerator::new(), self.config)),
            GameKind::Shadow => self.run_level(Level::new(ShadowGenerator::new(), self.config)),
            GameKind::Memory => self.run_pairs(PairLevel::new(self.config)),
        }
    }

    /// Save the ledger after a reward.
    fn reward(&self) -> Result<(), Box<dyn Error>> {
        println!(
            "  Stars: {} ({}, {:.0}% to the next level)",
            self.ledger.stars(),
            self.ledger.title(),
            self.ledger.progress() * 100.0
        );
        if let Some(saver) = &self.saver {
            saver.save_stars(&self.ledger)?;
        }
        Ok(())
    }

    fn run_level<P: Puzzle>(&mut self, mut level: Level<P>) -> Result<(), Box<dyn Error>>
    where
        P::Round: Render,
    {
        loop {
            let number: u32 = level.level() + 1;
            if let Some(round) = level.present(self.pool, &mut *self.rng) {
                println!("\nLevel {number}\n{}", round.render());
            }

            let index: usize = match read_command(&mut self.input)? {
                None | Some(Command::Quit) => return Ok(()),
                Some(Command::Unknown) => continue,
                Some(Command::Choose(i)) => i,
            };

            match level.submit_answer(index, &mut self.ledger) {
                AnswerOutcome::Ignored => println!("  No such option"),
                AnswerOutcome::Correct { schedule } => {
                    println!("  Correct!");
                    self.reward()?;
                    thread::sleep(schedule.delay);
                    level.fire(schedule.event);
                }
                AnswerOutcome::Incorrect { schedule } => {
                    println!("  Try again");
                    if let Some(s) = schedule {
                        thread::sleep(s.delay);
                        level.fire(s.event);
                    }
                }
            }
        }
    }

    fn run_pairs(&mut self, mut level: PairLevel) -> Result<(), Box<dyn Error>> {
        loop {
            let number: u32 = level.level() + 1;
            if let Some(board) = level.present(self.pool, &mut *self.rng) {
                println!("\nLevel {number}\n{}", board.render());
            }

            let index: usize = match read_command(&mut self.input)? {
                None | Some(Command::Quit) => return Ok(()),
                Some(Command::Unknown) => continue,
                Some(Command::Choose(i)) => i,
            };

            let (outcome, schedule) = level.flip_card(index);
            if outcome == FlipOutcome::Ignored {
                println!("  Choose another card");
                continue;
            }
            let schedule = match schedule {
                Some(s) => s,
                None => continue,
            };

            // Show both cards before the comparison
            if let Some(board) = level.board() {
                println!("{}", board.render());
            }
            thread::sleep(schedule.delay);
            match level.fire(schedule.event, &mut self.ledger) {
                CompareOutcome::Matched { completed: true } => {
                    println!("  All pairs found!");
                    self.reward()?;
                }
                CompareOutcome::Matched { completed: false } => {
                    let remaining: usize = level.board().map_or(0, Board::remaining_pairs);
                    println!("  Pair found, {remaining} left");
                }
                CompareOutcome::Mismatched => println!("  Not a pair"),
                CompareOutcome::Nothing => debug!("Nothing to compare"),
            }
        }
    }
}
