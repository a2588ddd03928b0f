/*
tokens.rs

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

//! Selectable tokens: the player's drawings and the built-in icons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// How a saved drawing was created.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DrawingKind {
    /// Drawn by hand on the canvas.
    Drawing,

    /// Produced by the image generation service.
    Magic,
}

/// A drawing saved in the gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedDrawing {
    pub id: String,

    /// Image URL (usually a data URL).
    pub url: String,

    #[serde(rename = "type")]
    pub kind: DrawingKind,

    /// Creation time, stored as milliseconds since the Unix epoch.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Built-in icons used when the player has not drawn enough characters.
///
/// The order of the variants is the order in which they fill a pool.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BuiltIn {
    Cat,
    Dog,
    Fish,
    Rabbit,
    Bird,
    Snail,
}

impl BuiltIn {
    /// Return the built-in catalog, in pool filling order.
    pub fn catalog() -> Vec<BuiltIn> {
        (0..).map_while(BuiltIn::from_repr).collect()
    }

    /// Stable token identifier.
    pub fn id(&self) -> &'static str {
        match self {
            BuiltIn::Cat => "cat",
            BuiltIn::Dog => "dog",
            BuiltIn::Fish => "fish",
            BuiltIn::Rabbit => "rabbit",
            BuiltIn::Bird => "bird",
            BuiltIn::Snail => "snail",
        }
    }
}

/// What the presentation layer draws for a token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Renderable {
    /// Image from the gallery.
    Image {
        url: String,
        kind: DrawingKind,
        created: DateTime<Utc>,
    },

    /// Built-in icon.
    Icon(BuiltIn),
}

/// Selectable unit used as puzzle material.
///
/// Tokens are built fresh for every pool and never modified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    /// Identifier, unique within a pool.
    pub id: String,

    pub renderable: Renderable,
}

impl Token {
    /// Create the token for a built-in icon.
    pub fn builtin(icon: BuiltIn) -> Self {
        Self {
            id: String::from(icon.id()),
            renderable: Renderable::Icon(icon),
        }
    }

    /// Create the token for a saved drawing.
    pub fn from_drawing(drawing: &SavedDrawing) -> Self {
        Self {
            id: drawing.id.clone(),
            renderable: Renderable::Image {
                url: drawing.url.clone(),
                kind: drawing.kind,
                created: drawing.timestamp,
            },
        }
    }

    /// Whether the token comes from the player's gallery.
    pub fn is_user(&self) -> bool {
        matches!(self.renderable, Renderable::Image { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Convert the saved drawings into tokens, newest first.
pub fn tokens_from_drawings(drawings: &[SavedDrawing]) -> Vec<Token> {
    let mut sorted: Vec<&SavedDrawing> = drawings.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.into_iter().map(Token::from_drawing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn drawing(id: &str, millis: i64) -> SavedDrawing {
        SavedDrawing {
            id: String::from(id),
            url: format!("data:image/png;base64,{id}"),
            kind: DrawingKind::Drawing,
            timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
        }
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<&str> = BuiltIn::catalog().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec!["cat", "dog", "fish", "rabbit", "bird", "snail"]);
    }

    #[test]
    fn test_tokens_newest_first() {
        let drawings = vec![drawing("a", 1000), drawing("b", 3000), drawing("c", 2000)];
        let ids: Vec<String> = tokens_from_drawings(&drawings)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_saved_drawing_json() {
        let json = r#"{"id":"d1","url":"blob:x","type":"magic","timestamp":1700000000000}"#;
        let d: SavedDrawing = serde_json::from_str(json).unwrap();
        assert_eq!(d.kind, DrawingKind::Magic);
        assert_eq!(d.timestamp.timestamp_millis(), 1_700_000_000_000);
        assert!(Token::from_drawing(&d).is_user());
        assert!(!Token::builtin(BuiltIn::Fish).is_user());
    }
}
