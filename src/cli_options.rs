/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the puzzles.
//! In generation mode, the program prints random rounds, optionally as JSON, and some statistics
//! about the generators. In play mode, it runs an interactive session in the terminal.
//!
//! # Examples
//!
//! List the games:
//!
//! ```
//! $ dreamweaver-puzzles --ls
//! cipher     Şifreler
//! matrix     Matris
//! shadow     Gölgeler
//! memory     Hafıza
//! ```
//!
//! Generate three reproducible cipher rounds from the gallery drawings, and print statistics:
//!
//! ```
//! $ dreamweaver-puzzles -g cipher -c 3 --seed 42 --drawings gallery.json -s
//! ```
//!
//! Play the memory game and keep the stars between sessions:
//!
//! ```
//! $ dreamweaver-puzzles -g memory --play --stars stars.json
//! ```

use clap::{CommandFactory, Parser, ValueEnum};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::HashSet;
use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use dreamweaver_puzzles::config::{COPYRIGHT_NOTICE, GameConfig};
use dreamweaver_puzzles::game::{GameKind, RoundData};
use dreamweaver_puzzles::generator::cipher::{CipherGenerator, CipherRound};
use dreamweaver_puzzles::generator::matrix::MatrixGenerator;
use dreamweaver_puzzles::generator::memory::MemoryGenerator;
use dreamweaver_puzzles::generator::pool::Pool;
use dreamweaver_puzzles::generator::shadow::ShadowGenerator;
use dreamweaver_puzzles::generator::shapes::Shape;
use dreamweaver_puzzles::generator::tokens::Token;
use dreamweaver_puzzles::saver::drawings::SaverDrawings;
use dreamweaver_puzzles::saver::stars::SaverStars;
use dreamweaver_puzzles::stars::StarLedger;

use crate::play::Session;
use crate::render::{self, Render};

/// Generate and play Dreamweaver puzzles in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the games
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Game to generate rounds for
    #[arg(value_enum, short, long, group = "generate")]
    game: Option<GameKind>,

    /// Number of rounds to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Print some statistics after generating the rounds
    #[arg(short, long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Seed for the random number generator, for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Print the rounds in JSON format
    #[arg(long, default_value_t = false, requires = "generate")]
    json: bool,

    /// JSON file with the drawings saved in the gallery
    #[arg(long)]
    drawings: Option<PathBuf>,

    /// JSON file with the game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play the game interactively instead of printing rounds
    #[arg(short, long, default_value_t = false, requires = "generate")]
    play: bool,

    /// JSON file where the stars are kept between sessions
    #[arg(long, requires = "play")]
    stars: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Generation statistics.
#[derive(Default)]
struct Stats {
    /// Total generation time in seconds.
    total: f32,

    /// Longest generation time in seconds.
    max: f32,

    /// Distractor candidates drawn (cipher only).
    iterations: usize,

    /// Distractors derived from the answer (cipher only).
    fallbacks: usize,

    /// Rounds that failed the sanity checks.
    errors: usize,
}

impl Stats {
    fn add_duration(&mut self, duration: f32) {
        self.total += duration;
        if duration > self.max {
            self.max = duration;
        }
    }
}

/// Print a round, as text or JSON.
fn print_round<T: Render + Serialize>(
    i: usize,
    round: &T,
    correct_index: Option<usize>,
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(round)?);
    } else {
        println!("Round {}\n{}\n", i + 1, render::solution(round, correct_index));
    }
    Ok(())
}

/// Verify the cipher round invariants. Return the list of violations.
fn check_cipher(round: &CipherRound) -> Vec<&'static str> {
    let mut errors: Vec<&'static str> = Vec::new();
    if !round.mapping.is_injective() {
        errors.push("mapping is not one-to-one");
    }
    if round.options.iter().filter(|o| o.is_correct).count() != 1 {
        errors.push("not exactly one correct option");
    }
    let distinct: HashSet<&[Shape]> = round.options.iter().map(|o| o.shapes.as_slice()).collect();
    if distinct.len() != round.options.len() {
        errors.push("duplicated options");
    }
    if round.mapping.encode(&round.question.tokens) != round.answer {
        errors.push("answer does not encode the question");
    }
    errors
}

/// Verify that exactly one option of the round is correct.
fn check_single_answer<R: RoundData>(round: &R) -> Vec<&'static str> {
    let correct: usize = (0..round.option_count())
        .filter(|i| round.is_correct(*i))
        .count();
    if correct == 1 {
        Vec::new()
    } else {
        vec!["not exactly one correct option"]
    }
}

/// Generate and print the requested rounds.
fn generate(
    kind: GameKind,
    pool: &Pool,
    rng: &mut StdRng,
    count: usize,
    json: bool,
) -> Result<Stats, serde_json::Error> {
    let mut stats: Stats = Stats::default();
    let mut cipher: CipherGenerator = CipherGenerator::new();
    let matrix: MatrixGenerator = MatrixGenerator::new();
    let shadow: ShadowGenerator = ShadowGenerator::new();
    let memory: MemoryGenerator = MemoryGenerator::new();

    for i in 0..count {
        debug!("Iteration {i}");
        let start: Instant = Instant::now();
        let errors: Vec<&'static str> = match kind {
            GameKind::Cipher => {
                let round: CipherRound = cipher.generate(pool, rng);
                stats.iterations += cipher.iteration;
                stats.fallbacks += cipher.fallbacks;
                print_round(i, &round, round.correct_index(), json)?;
                check_cipher(&round)
            }
            GameKind::Matrix => {
                let round = matrix.generate(rng);
                print_round(i, &round, round.correct_index(), json)?;
                check_single_answer(&round)
            }
            GameKind::Shadow => {
                let round = shadow.generate(pool, rng);
                print_round(i, &round, round.correct_index(), json)?;
                check_single_answer(&round)
            }
            GameKind::Memory => {
                let board = memory.generate(pool, rng);
                print_round(i, &board, None, json)?;
                if board.cards().len() % 2 == 0 {
                    Vec::new()
                } else {
                    vec!["odd number of cards"]
                }
            }
        };
        stats.add_duration(start.elapsed().as_secs_f32());

        if !errors.is_empty() {
            eprintln!("Round {}: {}", i + 1, errors.join(", "));
            stats.errors += 1;
        }
    }
    Ok(stats)
}

/// Load the settings, or return the default settings when no file is given.
fn load_config(path: Option<PathBuf>) -> Option<GameConfig> {
    let path: PathBuf = match path {
        Some(p) => p,
        None => return Some(GameConfig::default()),
    };
    match GameConfig::load(&path) {
        Ok(Some(config)) => Some(config),
        Ok(None) => {
            eprintln!("Configuration file {path:?} not found");
            None
        }
        Err(e) => {
            eprintln!("Cannot read the configuration file {path:?}: {e}");
            None
        }
    }
}

/// Load the star ledger, or start a new one when the file does not exist yet.
fn load_ledger(saver: Option<&SaverStars>, config: &GameConfig) -> Option<StarLedger> {
    let saver: &SaverStars = match saver {
        Some(s) => s,
        None => return Some(StarLedger::new(config)),
    };
    match saver.get_stars() {
        Ok(Some(mut ledger)) => {
            ledger.set_config(config);
            Some(ledger)
        }
        Ok(None) => Some(StarLedger::new(config)),
        Err(e) => {
            eprintln!("Cannot read the stars: {e}");
            None
        }
    }
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the games
    //
    if args.ls {
        for kind in GameKind::all() {
            let name: String = kind
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            println!("{name:<10} {kind}");
        }
        return 0;
    }

    let kind: GameKind = match args.game {
        Some(k) => k,
        None => {
            let _ = Args::command().print_help();
            return 0;
        }
    };

    let config: GameConfig = match load_config(args.config) {
        Some(c) => c,
        None => return 1,
    };

    //
    // Build the pool from the gallery drawings, if any
    //
    let user_tokens: Vec<Token> = match &args.drawings {
        Some(path) => match SaverDrawings::new(path.clone()).current_saved_tokens() {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("Cannot read the drawings from {path:?}: {e}");
                return 1;
            }
        },
        None => Vec::new(),
    };
    let pool: Pool = Pool::build(&user_tokens, config.pool_min_size);

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    //
    // Interactive session
    //
    if args.play {
        let saver: Option<SaverStars> = args.stars.map(SaverStars::new);
        let ledger: StarLedger = match load_ledger(saver.as_ref(), &config) {
            Some(l) => l,
            None => return 1,
        };
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), &pool, &config, &mut rng, ledger, saver);
        return match session.run(kind) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    //
    // Generate the rounds
    //
    let stats: Stats = match generate(kind, &pool, &mut rng, args.count, args.json) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Cannot serialize the round: {e}");
            return 1;
        }
    };

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
         fallbacks = {}
            errors = {}",
            stats.total,
            stats.total / args.count as f32,
            stats.max,
            stats.iterations / args.count,
            stats.fallbacks,
            stats.errors
        );
    }
    if stats.errors > 0 { 1 } else { 0 }
}
