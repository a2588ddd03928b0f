/*
drawings.rs

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

//! Read the drawings saved in the gallery.
//!
//! The gallery writes a JSON array of [`SavedDrawing`] objects. This module only reads it: the
//! games never modify the gallery.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;

use crate::generator::tokens::{SavedDrawing, Token, tokens_from_drawings};

/// Object to read the gallery file.
pub struct SaverDrawings {
    /// Path to the gallery file.
    save_file: PathBuf,
}

impl SaverDrawings {
    /// Create a [`SaverDrawings`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Drawings file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the saved drawings.
    ///
    /// Return an empty list if the file does not exist.
    pub fn get_drawings(&self) -> Result<Vec<SavedDrawing>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(Vec::new()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let drawings: Vec<SavedDrawing> = serde_json::from_reader(reader)?;
        debug!("{} drawings loaded", drawings.len());
        Ok(drawings)
    }

    /// Return the player's tokens, newest first.
    pub fn current_saved_tokens(&self) -> Result<Vec<Token>, Box<dyn Error>> {
        Ok(tokens_from_drawings(&self.get_drawings()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_gallery() {
        let path = std::env::temp_dir().join(format!(
            "dreamweaver-drawings-{}.json",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"id":"old","url":"data:a","type":"drawing","timestamp":1000}},
                {{"id":"new","url":"data:b","type":"magic","timestamp":2000}}]"#
        )
        .unwrap();
        drop(file);

        let saver = SaverDrawings::new(path.clone());
        let ids: Vec<String> = saver
            .current_saved_tokens()
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["new", "old"]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_gallery() {
        let saver = SaverDrawings::new(PathBuf::from("/nonexistent/dreamweaver/gallery.json"));
        assert!(saver.get_drawings().unwrap().is_empty());
    }
}
