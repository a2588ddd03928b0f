/*
stars.rs

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

//! Accumulate the stars earned by the player.
//!
//! The main object, [`StarLedger`], receives the solved rounds through the
//! [`crate::round::ScoreSink`] trait and converts them into stars, using the rewards from
//! [`crate::config::GameConfig`].
//! The player level and title are derived from the total.
//! See the [`crate::saver::stars`] module that saves and restores the [`StarLedger`] object.

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::GameConfig;
use crate::game::GameKind;
use crate::round::ScoreSink;

/// Number of stars per player level.
const STARS_PER_LEVEL: u32 = 50;

/// Star ledger.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StarLedger {
    /// Total number of stars.
    stars: u32,

    /// Number of solved rounds per game.
    solved: HashMap<GameKind, u32>,

    /// Time of the last reward.
    last_award: Option<DateTime<Local>>,

    /// Rewards per game. Not saved: they come from the current configuration.
    #[serde(skip)]
    rewards: GameConfig,
}

impl StarLedger {
    /// Create an empty [`StarLedger`] object.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rewards: config.clone(),
            ..Default::default()
        }
    }

    /// Replace the rewards, for a ledger restored from disk.
    pub fn set_config(&mut self, config: &GameConfig) {
        self.rewards = config.clone();
    }

    /// Add stars, for example when the player creates a new character.
    pub fn add(&mut self, amount: u32) {
        self.stars = self.stars.saturating_add(amount);
        self.last_award = Some(Local::now());
    }

    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Return the number of solved rounds for the game.
    pub fn solved(&self, kind: GameKind) -> u32 {
        self.solved.get(&kind).copied().unwrap_or(0)
    }

    pub fn last_award(&self) -> Option<DateTime<Local>> {
        self.last_award
    }

    /// Return the player level. The first level is 1.
    pub fn level(&self) -> u32 {
        self.stars / STARS_PER_LEVEL + 1
    }

    /// Return the progress toward the next level, between 0 and 1.
    pub fn progress(&self) -> f32 {
        (self.stars % STARS_PER_LEVEL) as f32 / STARS_PER_LEVEL as f32
    }

    /// Return the title for the player level.
    pub fn title(&self) -> &'static str {
        match self.level() {
            1 => "Çırak",
            2 => "Kaşif",
            3 => "Usta",
            4 => "Büyücü",
            _ => "Efsane",
        }
    }
}

impl ScoreSink for StarLedger {
    fn on_score(&mut self, kind: GameKind) {
        let reward: u32 = self.rewards.reward(kind);
        self.add(reward);
        *self.solved.entry(kind).or_insert(0) += 1;
        debug!("{kind}: +{reward} stars, total = {}", self.stars);
    }
}
