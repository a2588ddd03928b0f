/*
round.rs

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

//! Manage the lifecycle of the rounds and the level counter.
//!
//! The state machines never wait. When feedback must stay on screen for a while, they return a
//! [`Schedule`] and the caller fires the scheduled [`TimerEvent`] once the delay has expired.
//! Input received in the meantime is ignored, which prevents scoring a round twice.
//!
//! * [`Level`] drives the single-answer games (cipher, matrix, shadow):
//!   `Idle -> Presented -> Correct | Incorrect`.
//!   A correct answer calls the [`ScoreSink`] and schedules [`TimerEvent::NextLevel`], after
//!   which the level counter is incremented and the machine is idle again.
//!   A wrong answer schedules [`TimerEvent::ClearShake`], or returns to `Presented` right away
//!   for games without shake feedback.
//!
//! * [`PairLevel`] drives the memory game:
//!   `Idle -> Presented -> ComparePending -> Presented ... -> Completed`.

use log::debug;
use rand::Rng;
use std::time::Duration;

use crate::config::GameConfig;
use crate::game::{GameKind, Puzzle, RoundData};
use crate::generator::memory::{Board, CompareOutcome, FlipOutcome, MemoryGenerator};
use crate::generator::pool::Pool;

/// Receive the successfully completed rounds.
pub trait ScoreSink {
    /// Called exactly once per solved round.
    fn on_score(&mut self, kind: GameKind);
}

/// Event fired by the caller when a scheduled delay expires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Leave the success feedback and move to the next level.
    NextLevel,

    /// Stop the shake feedback of a wrong answer.
    ClearShake,

    /// Compare the two face-up memory cards.
    ResolveCompare,
}

/// Delayed event requested by a state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub delay: Duration,
    pub event: TimerEvent,
}

/// State of a single-answer level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No round on display. Call [`Level::present`].
    Idle,

    /// Waiting for the player's answer.
    Presented,

    /// Solved. Waiting for [`TimerEvent::NextLevel`].
    Correct,

    /// Wrong answer. Waiting for [`TimerEvent::ClearShake`].
    Incorrect {
        /// Display position of the wrong option, which shakes.
        option: usize,
    },
}

/// Result of [`Level::submit_answer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No round is waiting for an answer, or the option does not exist.
    Ignored,

    Correct { schedule: Schedule },

    /// The schedule is None when the game has no shake feedback.
    Incorrect { schedule: Option<Schedule> },
}

/// Level state machine for the single-answer games.
pub struct Level<P: Puzzle> {
    puzzle: P,

    /// Delay between a correct answer and the next level.
    correct_delay: Duration,

    /// Shake feedback duration.
    shake_delay: Option<Duration>,

    /// Level counter. Only incremented after a correct answer.
    level: u32,

    phase: Phase,

    /// Round on display.
    round: Option<P::Round>,

    /// Number of wrong answers for the current round.
    mistakes: usize,
}

impl<P: Puzzle> Level<P> {
    /// Create a [`Level`] object, in the idle state.
    pub fn new(puzzle: P, config: &GameConfig) -> Self {
        let kind: GameKind = puzzle.kind();
        Self {
            puzzle,
            correct_delay: config.correct_delay(kind),
            shake_delay: config.shake_delay(kind),
            level: 0,
            phase: Phase::Idle,
            round: None,
            mistakes: 0,
        }
    }

    pub fn kind(&self) -> GameKind {
        self.puzzle.kind()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Return the round on display.
    pub fn round(&self) -> Option<&P::Round> {
        self.round.as_ref()
    }

    /// Return a reference to the generator.
    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }

    /// Generate the round for the current level and display it.
    ///
    /// Only effective in the idle state. Return the round on display.
    pub fn present<R: Rng + ?Sized>(&mut self, pool: &Pool, rng: &mut R) -> Option<&P::Round> {
        if self.phase == Phase::Idle {
            debug!("{}: presenting level {}", self.kind(), self.level);
            self.round = Some(self.puzzle.generate_round(pool, rng));
            self.mistakes = 0;
            self.phase = Phase::Presented;
        }
        self.round.as_ref()
    }

    /// Process the player's choice.
    ///
    /// A correct answer calls `score` once. Answers given while feedback is on display are
    /// ignored.
    pub fn submit_answer<S: ScoreSink + ?Sized>(
        &mut self,
        option_index: usize,
        score: &mut S,
    ) -> AnswerOutcome {
        if self.phase != Phase::Presented {
            debug!("{}: answer {option_index} ignored in {:?}", self.kind(), self.phase);
            return AnswerOutcome::Ignored;
        }
        let round: &P::Round = match &self.round {
            Some(r) => r,
            None => return AnswerOutcome::Ignored,
        };
        if option_index >= round.option_count() {
            return AnswerOutcome::Ignored;
        }

        if round.is_correct(option_index) {
            self.phase = Phase::Correct;
            score.on_score(self.kind());
            debug!("{}: level {} solved", self.kind(), self.level);
            return AnswerOutcome::Correct {
                schedule: Schedule {
                    delay: self.correct_delay,
                    event: TimerEvent::NextLevel,
                },
            };
        }

        self.mistakes += 1;
        match self.shake_delay {
            Some(delay) => {
                self.phase = Phase::Incorrect {
                    option: option_index,
                };
                AnswerOutcome::Incorrect {
                    schedule: Some(Schedule {
                        delay,
                        event: TimerEvent::ClearShake,
                    }),
                }
            }
            None => AnswerOutcome::Incorrect { schedule: None },
        }
    }

    /// Apply an expired delay. Return whether the event matched the current state.
    pub fn fire(&mut self, event: TimerEvent) -> bool {
        match (self.phase, event) {
            (Phase::Correct, TimerEvent::NextLevel) => {
                self.level += 1;
                self.round = None;
                self.phase = Phase::Idle;
                true
            }
            (Phase::Incorrect { .. }, TimerEvent::ClearShake) => {
                self.phase = Phase::Presented;
                true
            }
            _ => {
                debug!("{}: stale {event:?} in {:?}", self.kind(), self.phase);
                false
            }
        }
    }
}

/// State of a memory level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PairPhase {
    /// No board on display. Call [`PairLevel::present`].
    Idle,

    /// Waiting for the player to flip cards.
    Presented,

    /// Two cards are face up. Waiting for [`TimerEvent::ResolveCompare`].
    ComparePending,

    /// All the pairs are matched.
    Completed,
}

/// Level state machine for the memory game.
pub struct PairLevel {
    generator: MemoryGenerator,

    match_delay: Duration,

    mismatch_delay: Duration,

    /// Level counter. Incremented when a board is completed.
    level: u32,

    phase: PairPhase,

    board: Option<Board>,
}

impl PairLevel {
    /// Create a [`PairLevel`] object, in the idle state.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            generator: MemoryGenerator::new(),
            match_delay: config.memory_match_delay(),
            mismatch_delay: config.memory_mismatch_delay(),
            level: 0,
            phase: PairPhase::Idle,
            board: None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> PairPhase {
        self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Deal a new board when idle or after a completed board. Return the board on display.
    pub fn present<R: Rng + ?Sized>(&mut self, pool: &Pool, rng: &mut R) -> Option<&Board> {
        if matches!(self.phase, PairPhase::Idle | PairPhase::Completed) {
            debug!("{}: dealing level {}", GameKind::Memory, self.level);
            self.board = Some(self.generator.generate(pool, rng));
            self.phase = PairPhase::Presented;
        }
        self.board.as_ref()
    }

    /// Flip a card.
    ///
    /// When the flip starts a comparison, the returned schedule gives the delay before
    /// [`TimerEvent::ResolveCompare`] must be fired: short for two equal cards, longer otherwise.
    pub fn flip_card(&mut self, index: usize) -> (FlipOutcome, Option<Schedule>) {
        if self.phase != PairPhase::Presented {
            return (FlipOutcome::Ignored, None);
        }
        let board: &mut Board = match self.board.as_mut() {
            Some(b) => b,
            None => return (FlipOutcome::Ignored, None),
        };

        let outcome: FlipOutcome = board.flip_card(index);
        match outcome {
            FlipOutcome::ComparePending { matching } => {
                self.phase = PairPhase::ComparePending;
                let delay: Duration = if matching {
                    self.match_delay
                } else {
                    self.mismatch_delay
                };
                (
                    outcome,
                    Some(Schedule {
                        delay,
                        event: TimerEvent::ResolveCompare,
                    }),
                )
            }
            _ => (outcome, None),
        }
    }

    /// Apply an expired delay. `score` is called once when the last pair is matched.
    pub fn fire<S: ScoreSink + ?Sized>(
        &mut self,
        event: TimerEvent,
        score: &mut S,
    ) -> CompareOutcome {
        if self.phase != PairPhase::ComparePending || event != TimerEvent::ResolveCompare {
            debug!("{}: stale {event:?} in {:?}", GameKind::Memory, self.phase);
            return CompareOutcome::Nothing;
        }
        let outcome: CompareOutcome = match self.board.as_mut() {
            Some(b) => b.resolve_compare(),
            None => CompareOutcome::Nothing,
        };

        self.phase = match outcome {
            CompareOutcome::Matched { completed: true } => {
                score.on_score(GameKind::Memory);
                self.level += 1;
                PairPhase::Completed
            }
            _ => PairPhase::Presented,
        };
        outcome
    }
}
