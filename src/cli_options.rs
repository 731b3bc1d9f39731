/*
cli_options.rs

Copyright 2026 Hervé Quatremain

This file is part of Hashido.

Hashido is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hashido is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hashido. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The command-line tool generates random puzzles, verifies them, and
//! prints them as text grids or JSON. It is intended for developers tuning
//! the generator and for embedding applications that want ready-made
//! puzzles.
//!
//! # Examples
//!
//! List the difficulty levels:
//!
//! ```text
//! $ hashido --ls
//! easy: 5x5 grid, 6 to 9 houses, max degree 4
//! medium: 7x7 grid, 8 to 12 houses, max degree 6
//! hard: 10x10 grid, 12 to 18 houses, max degree 8
//! ```
//!
//! Generate three hard puzzles from a fixed seed and print statistics:
//!
//! ```text
//! $ hashido -f hard -c 3 -s 42 --summary
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;

use crate::checker;
use crate::generator::cables::Cables;
use crate::generator::puzzles::{Difficulty, Parameters, Puzzle};
use crate::generator::random_layout::RandomLayout;

/// Build and verify random Hashido puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the difficulty levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Difficulty level for the puzzles
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random source, for reproducible puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the puzzles as JSON instead of text grids
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the difficulty levels
    //
    if args.ls {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let p: Parameters = difficulty.parameters();
            println!(
                "{}: {}x{} grid, {} to {} houses, max degree {}",
                difficulty.to_string().to_lowercase(),
                p.grid_size,
                p.grid_size,
                p.min_houses,
                p.max_houses,
                p.max_degree
            );
        }
        return 0;
    }

    //
    // Generate, verify, and print the puzzles
    //
    let mut seeded: Option<StdRng> = args.seed.map(StdRng::seed_from_u64);
    let mut layout: RandomLayout = RandomLayout::new(args.difficulty);

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;

    for i in 0..args.count {
        debug!("Puzzle {i}");

        let puzzle: Puzzle = match seeded.as_mut() {
            Some(rng) => layout.generate(rng),
            None => layout.generate(&mut rand::rng()),
        };
        total += layout.duration;
        if layout.duration > max {
            max = layout.duration;
        }
        attempts += layout.attempts;

        verify(&puzzle);
        if args.json {
            match serde_json::to_string_pretty(&puzzle) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Cannot serialize the puzzle: {e}");
                    return 1;
                }
            }
        } else {
            print_grid(&puzzle);
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
    total time = {}s
  average time = {}s
      max time = {}s
total attempts = {attempts}",
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

/// Verify the invariants of a generated puzzle.
///
/// The checks catch generator bugs, not user errors: a violation panics.
fn verify(puzzle: &Puzzle) {
    let max_degree: usize = puzzle.difficulty.parameters().max_degree;

    for house in puzzle.houses.iter() {
        if house.required == 0 || house.required > max_degree {
            eprintln!(
                "House {} at ({}, {}) requires {} cable ends",
                house.id, house.pos.x, house.pos.y, house.required
            );
            panic!("Bug: house degree out of range in generated puzzle");
        }
    }

    let solution: Cables = Cables::from(puzzle.solution.clone());
    if !checker::is_solved(&puzzle.houses, &solution) {
        eprintln!("Solution cables: {:?}", puzzle.solution);
        panic!("Bug: the solution does not solve the generated puzzle");
    }
}

/// Print the puzzle as a text grid: each house shows its required degree.
fn print_grid(puzzle: &Puzzle) {
    let grid_size: usize = puzzle.difficulty.parameters().grid_size;
    let mut rows: Vec<Vec<char>> = vec![vec!['.'; grid_size]; grid_size];

    for house in puzzle.houses.iter() {
        rows[house.pos.y][house.pos.x] =
            char::from_digit(house.required as u32, 10).unwrap_or('?');
    }

    println!("{} ({} houses)", puzzle.difficulty, puzzle.houses.len());
    for row in rows {
        println!("{}", row.iter().collect::<String>());
    }
    println!();
}
