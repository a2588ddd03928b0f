/*
config.rs

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

//! Build constants and runtime game settings.
//!
//! The constants describe the fixed shape of the puzzles (row lengths, option counts, board
//! size). They are not meant to be changed at run time.
//!
//! [`GameConfig`] groups the values that a front end may tune: the minimum pool size, the
//! feedback delays, and the number of stars each game awards.
//! The defaults reproduce the behavior of the original activity app.
//! A JSON file can override any subset of the fields.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::game::GameKind;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Dreamweaver Puzzles contributors
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>";

/// Minimum number of tokens in a pool, when enough built-in tokens are available.
pub const POOL_MIN_SIZE: usize = 10;

/// Number of tokens (and shapes) taking part in a cipher mapping.
pub const CIPHER_ACTIVE_COUNT: usize = 4;

/// Length of the clue rows, the question row, and the option sequences.
pub const CIPHER_ROW_LEN: usize = 4;

/// Number of clue rows in a cipher round.
pub const CIPHER_CLUE_ROWS: usize = 4;

/// Number of options presented for a cipher round (one correct, the others distractors).
pub const CIPHER_OPTION_COUNT: usize = 3;

/// Number of resampling attempts for one distractor before the deterministic construction
/// takes over.
pub const DISTRACTOR_MAX_ATTEMPTS: usize = 100;

/// Number of options presented for a shadow round.
pub const SHADOW_OPTION_COUNT: usize = 3;

/// Number of distinct tokens on a memory board. Each one appears twice.
pub const MEMORY_PAIRS: usize = 6;

/// Runtime settings, in milliseconds for the delays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Minimum pool size. Built-in tokens are added until the pool reaches that size.
    pub pool_min_size: usize,

    /// Delay between a correct cipher answer and the next level.
    pub cipher_correct_ms: u64,

    /// Delay between a correct matrix answer and the next level.
    pub matrix_correct_ms: u64,

    /// Delay between a correct shadow answer and the next level.
    pub shadow_correct_ms: u64,

    /// Duration of the shake feedback after a wrong answer.
    pub shake_ms: u64,

    /// Delay before two equal memory cards are marked as matched.
    pub memory_match_ms: u64,

    /// Delay before two different memory cards are turned face down again.
    pub memory_mismatch_ms: u64,

    /// Stars awarded for a solved cipher round.
    pub cipher_reward: u32,

    /// Stars awarded for a solved matrix round.
    pub matrix_reward: u32,

    /// Stars awarded for a solved shadow round.
    pub shadow_reward: u32,

    /// Stars awarded for a completed memory board.
    pub memory_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pool_min_size: POOL_MIN_SIZE,
            cipher_correct_ms: 1500,
            matrix_correct_ms: 1000,
            shadow_correct_ms: 1500,
            shake_ms: 500,
            memory_match_ms: 500,
            memory_mismatch_ms: 1000,
            cipher_reward: 15,
            matrix_reward: 10,
            shadow_reward: 10,
            memory_reward: 20,
        }
    }
}

impl GameConfig {
    /// Load the settings from a JSON file.
    ///
    /// Return None if the file does not exist. Missing fields keep their default values.
    pub fn load(path: &Path) -> Result<Option<GameConfig>, Box<dyn Error>> {
        let file: File = match File::open(path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let config: GameConfig = serde_json::from_reader(BufReader::new(file))?;
        debug!("Configuration loaded from {path:?}: {config:?}");
        Ok(Some(config))
    }

    /// Return the delay between a correct answer and the next level.
    ///
    /// For the memory game, this is the delay before the last pair is marked as matched.
    pub fn correct_delay(&self, kind: GameKind) -> Duration {
        Duration::from_millis(match kind {
            GameKind::Cipher => self.cipher_correct_ms,
            GameKind::Matrix => self.matrix_correct_ms,
            GameKind::Shadow => self.shadow_correct_ms,
            GameKind::Memory => self.memory_match_ms,
        })
    }

    /// Return the shake feedback duration for the game, or None if the game does not shake.
    ///
    /// A wrong shadow answer is only highlighted, and the player can choose again right away.
    pub fn shake_delay(&self, kind: GameKind) -> Option<Duration> {
        match kind {
            GameKind::Cipher | GameKind::Matrix => Some(Duration::from_millis(self.shake_ms)),
            GameKind::Shadow | GameKind::Memory => None,
        }
    }

    pub fn memory_match_delay(&self) -> Duration {
        Duration::from_millis(self.memory_match_ms)
    }

    pub fn memory_mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.memory_mismatch_ms)
    }

    /// Return the number of stars awarded for a solved round of the game.
    pub fn reward(&self, kind: GameKind) -> u32 {
        match kind {
            GameKind::Cipher => self.cipher_reward,
            GameKind::Matrix => self.matrix_reward,
            GameKind::Shadow => self.shadow_reward,
            GameKind::Memory => self.memory_reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"shake_ms": 250, "memory_reward": 30}"#).unwrap();
        assert_eq!(config.shake_ms, 250);
        assert_eq!(config.memory_reward, 30);
        assert_eq!(config.pool_min_size, POOL_MIN_SIZE);
        assert_eq!(config.cipher_correct_ms, 1500);
    }

    #[test]
    fn test_delays_per_game() {
        let config = GameConfig::default();
        assert_eq!(
            config.correct_delay(GameKind::Matrix),
            Duration::from_millis(1000)
        );
        assert_eq!(
            config.shake_delay(GameKind::Cipher),
            Some(Duration::from_millis(500))
        );
        assert_eq!(config.shake_delay(GameKind::Shadow), None);
        assert_eq!(config.reward(GameKind::Memory), 20);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("dreamweaver-puzzles-no-such-config.json");
        assert!(GameConfig::load(&path).unwrap().is_none());
    }
}
