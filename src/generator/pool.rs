/*
pool.rs

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

//! Working set of tokens for a game session.

use log::debug;
use serde::Serialize;
use std::collections::HashSet;

use super::tokens::{BuiltIn, Token};
use crate::config::POOL_MIN_SIZE;

/// Pool object.
///
/// The order of the tokens does not matter for the games, only the membership.
/// A pool is never empty.
#[derive(Serialize, Debug, Clone)]
pub struct Pool {
    /// Tokens, user tokens first.
    tokens: Vec<Token>,

    /// Identifiers of the tokens, to speed up the duplicate lookup.
    #[serde(skip)]
    ids: HashSet<String>,
}

impl PartialEq for Pool {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Pool {
    /// Build a pool from the user tokens, which must be sorted newest first.
    ///
    /// Built-in tokens are then added in catalog order, skipping the ones whose identifier is
    /// already in the pool, until the pool holds `min_size` tokens or the catalog is exhausted.
    /// User tokens with a duplicated identifier are dropped.
    /// The pool always holds at least one token, whatever the requested minimum size.
    pub fn build(user_tokens: &[Token], min_size: usize) -> Self {
        let min_size: usize = min_size.max(1);
        let builtins: Vec<BuiltIn> = BuiltIn::catalog();

        // The minimum size comes from the settings and can be anything
        let capacity: usize = user_tokens.len() + builtins.len();
        let mut pool: Pool = Pool {
            tokens: Vec::with_capacity(capacity),
            ids: HashSet::with_capacity(capacity),
        };

        for token in user_tokens {
            if !pool.push(token.clone()) {
                debug!("Duplicated user token {} ignored", token.id);
            }
        }

        for icon in builtins {
            if pool.len() >= min_size {
                break;
            }
            pool.push(Token::builtin(icon));
        }
        debug!(
            "Pool built: {} tokens ({} from the user)",
            pool.len(),
            pool.tokens.iter().filter(|t| t.is_user()).count()
        );
        pool
    }

    /// Add a token unless its identifier is already in the pool.
    fn push(&mut self, token: Token) -> bool {
        if self.ids.contains(&token.id) {
            return false;
        }
        self.ids.insert(token.id.clone());
        self.tokens.push(token);
        true
    }

    /// Get the number of tokens in the pool.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Return a reference to the tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether a token with the given identifier is in the pool.
    pub fn contains_id(&self, id: &str) -> bool {
        self.tokens.iter().any(|t| t.id == id)
    }
}

/// Build a pool with the default minimum size.
pub fn build_pool(user_tokens: &[Token]) -> Pool {
    Pool::build(user_tokens, POOL_MIN_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::generator::tokens::{DrawingKind, Renderable};
    use chrono::Utc;

    fn user_token(id: &str) -> Token {
        Token {
            id: String::from(id),
            renderable: Renderable::Image {
                url: format!("blob:{id}"),
                kind: DrawingKind::Drawing,
                created: Utc::now(),
            },
        }
    }

    fn ids(pool: &Pool) -> Vec<&str> {
        pool.tokens().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_user_tokens() {
        let pool = build_pool(&[]);
        assert_eq!(ids(&pool), vec!["cat", "dog", "fish", "rabbit", "bird", "snail"]);
    }

    #[test]
    fn test_user_tokens_first_then_builtins() {
        let users: Vec<Token> = ["u3", "u2", "u1"].iter().map(|i| user_token(i)).collect();
        let pool = build_pool(&users);
        assert_eq!(
            ids(&pool),
            vec!["u3", "u2", "u1", "cat", "dog", "fish", "rabbit", "bird", "snail"]
        );
    }

    #[test]
    fn test_fill_stops_at_min_size() {
        let users: Vec<Token> = (0..7).map(|i| user_token(&format!("u{i}"))).collect();
        let pool = build_pool(&users);
        assert_eq!(pool.len(), 10);
        assert_eq!(&ids(&pool)[7..], &["cat", "dog", "fish"]);
    }

    #[test]
    fn test_large_user_list_kept_whole() {
        let users: Vec<Token> = (0..12).map(|i| user_token(&format!("u{i}"))).collect();
        let pool = build_pool(&users);
        assert_eq!(pool.len(), 12);
        assert!(pool.tokens().iter().all(|t| t.is_user()));
    }

    #[test]
    fn test_colliding_builtin_skipped() {
        let users = vec![user_token("dog"), user_token("u1"), user_token("u1")];
        let pool = build_pool(&users);
        assert_eq!(
            ids(&pool),
            vec!["dog", "u1", "cat", "fish", "rabbit", "bird", "snail"]
        );
        assert!(pool.tokens()[0].is_user());
    }

    #[test]
    fn test_huge_min_size_stops_at_catalog() {
        let pool = Pool::build(&[], usize::MAX);
        assert_eq!(ids(&pool), vec!["cat", "dog", "fish", "rabbit", "bird", "snail"]);

        let users = vec![user_token("u1")];
        let pool = Pool::build(&users, usize::MAX);
        assert_eq!(pool.len(), 7);
    }

    #[test]
    fn test_huge_min_size_from_settings() {
        let config: GameConfig =
            serde_json::from_str(r#"{"pool_min_size": 18446744073709551615}"#).unwrap();
        let pool = Pool::build(&[], config.pool_min_size);
        assert_eq!(pool.len(), BuiltIn::catalog().len());
    }
}
