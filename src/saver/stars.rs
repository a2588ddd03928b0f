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

//! Save and restore the star ledger.
//!
//! The saved object is a serialization of the [`StarLedger`] object in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::stars::StarLedger;

/// Object to save and restore the star ledger.
pub struct SaverStars {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverStars {
    /// Create a [`SaverStars`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Stars file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`StarLedger`] object from the save file.
    ///
    /// Return None if the file does not exist.
    pub fn get_stars(&self) -> Result<Option<StarLedger>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let ledger: StarLedger = serde_json::from_reader(reader)?;
        Ok(Some(ledger))
    }

    /// Save the provided [`StarLedger`] object.
    pub fn save_stars(&self, ledger: &StarLedger) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, ledger)?;
        writer.flush()?;
        debug!("{} stars saved", ledger.stars());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::GameKind;
    use crate::round::ScoreSink;

    #[test]
    fn test_save_and_restore() {
        let path = std::env::temp_dir()
            .join(format!("dreamweaver-stars-{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let saver = SaverStars::new(path.clone());
        assert!(saver.get_stars().unwrap().is_none());

        let mut ledger = StarLedger::new(&GameConfig::default());
        ledger.on_score(GameKind::Cipher);
        saver.save_stars(&ledger).unwrap();

        let restored = saver.get_stars().unwrap().unwrap();
        assert_eq!(restored.stars(), 15);
        assert_eq!(restored.solved(GameKind::Cipher), 1);

        let _ = std::fs::remove_file(&path);
    }
}
