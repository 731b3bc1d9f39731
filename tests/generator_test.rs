/*
generator_test.rs

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

//! Properties of the random puzzle generator.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use hashido::checker;
use hashido::generator::cables::Cables;
use hashido::generator::puzzles::{self, Difficulty, Puzzle};
use hashido::generator::random_layout::RandomLayout;

const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

fn generate(difficulty: Difficulty, seed: u64) -> Puzzle {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    RandomLayout::new(difficulty).generate(&mut rng)
}

#[test]
fn solution_connects_and_solves_the_puzzle() {
    for difficulty in DIFFICULTIES {
        for seed in 0..200 {
            let puzzle: Puzzle = generate(difficulty, seed);
            let solution: Cables = Cables::from(puzzle.solution.clone());

            assert!(
                checker::all_connected(&puzzle.houses, &solution),
                "disconnected solution for {difficulty} seed {seed}"
            );
            assert!(
                checker::is_solved(&puzzle.houses, &solution),
                "solution does not solve {difficulty} seed {seed}"
            );
        }
    }
}

#[test]
fn house_degrees_stay_in_range() {
    for difficulty in DIFFICULTIES {
        let max_degree: usize = difficulty.parameters().max_degree;

        for seed in 0..200 {
            let puzzle: Puzzle = generate(difficulty, seed);

            for house in puzzle.houses.iter() {
                assert!(
                    house.required >= 1 && house.required <= max_degree,
                    "house {} requires {} cable ends for {difficulty} seed {seed}",
                    house.id,
                    house.required
                );
            }
        }
    }
}

#[test]
fn houses_stay_on_the_grid() {
    for difficulty in DIFFICULTIES {
        let grid_size: usize = difficulty.parameters().grid_size;

        for seed in 0..200 {
            let puzzle: Puzzle = generate(difficulty, seed);

            for house in puzzle.houses.iter() {
                assert!(house.pos.x < grid_size && house.pos.y < grid_size);
            }
        }
    }
}

#[test]
fn houses_never_share_a_cell() {
    // Statistical fuzz over 10,000 generations across the three levels.
    for seed in 0..10_000u64 {
        let difficulty: Difficulty = DIFFICULTIES[seed as usize % DIFFICULTIES.len()];
        let puzzle: Puzzle = generate(difficulty, seed);
        let cells: HashSet<(usize, usize)> = puzzle
            .houses
            .iter()
            .map(|house| (house.pos.x, house.pos.y))
            .collect();

        assert_eq!(
            cells.len(),
            puzzle.houses.len(),
            "two houses share a cell for {difficulty} seed {seed}"
        );
    }
}

#[test]
fn same_seed_same_puzzle() {
    for difficulty in DIFFICULTIES {
        assert_eq!(generate(difficulty, 42), generate(difficulty, 42));
    }
}

#[test]
fn house_count_matches_the_difficulty() {
    for difficulty in DIFFICULTIES {
        let params = difficulty.parameters();

        for seed in 0..50 {
            let puzzle: Puzzle = generate(difficulty, seed);

            // The fallback puzzle has four houses; any other outcome must
            // honor the parameter range.
            if puzzle.houses.len() != 4 {
                assert!(puzzle.houses.len() >= params.min_houses);
                assert!(puzzle.houses.len() <= params.max_houses);
            }
        }
    }
}

#[test]
fn difficulty_round_trips_through_its_integer_representation() {
    for (repr, difficulty) in DIFFICULTIES.iter().enumerate() {
        assert_eq!(Difficulty::from_repr(repr as i32), Some(*difficulty));
    }
    assert_eq!(Difficulty::from_repr(3), None);
}

#[test]
fn fallback_puzzle_is_solvable() {
    let puzzle: Puzzle = puzzles::fallback_puzzle(Difficulty::Easy);

    assert_eq!(puzzle.houses.len(), 4);
    for house in puzzle.houses.iter() {
        assert_eq!(house.required, 2);
    }

    let solution: Cables = Cables::from(puzzle.solution.clone());
    assert!(checker::is_solved(&puzzle.houses, &solution));
}
