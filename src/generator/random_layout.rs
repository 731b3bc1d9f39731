/*
random_layout.rs

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

//! Generate a random puzzle layout.
//!
//! An attempt places houses on random cells, connects them with a
//! crossing-free spanning tree built from shuffled candidate cables, adds a
//! bounded number of extra cables, and derives the required degree of every
//! house from the cables that fit under the degree cap. An attempt that
//! ends up with too few houses, a disconnected tree, or a house without a
//! cable is thrown away and a new attempt starts with fresh randomness.
//! After [`MAX_ATTEMPTS`] failed attempts, the predefined fallback puzzle
//! from [`super::puzzles`] is returned, so generation never fails.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::cables::Cable;
use super::disjoint_set::DisjointSet;
use super::geometry::{self, Point};
use super::houses::Houses;
use super::puzzles::{self, Difficulty, Parameters, Puzzle};

/// Number of layout attempts before giving up and returning the fallback
/// puzzle.
pub const MAX_ATTEMPTS: usize = 100;

/// Number of random cells to try when placing one house.
const MAX_PLACEMENT_TRIES: usize = 50;

/// Number of extra cables added on top of the spanning tree, as a fraction
/// of the tree size.
const EXTRA_CABLE_RATIO: f64 = 0.3;

/// Probability for a spanning-tree cable to be a double cable.
const DOUBLE_TREE_PROBABILITY: f64 = 0.3;

/// Probability for an extra cable to be a double cable.
const DOUBLE_EXTRA_PROBABILITY: f64 = 0.4;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum LayoutError {
    /// Fewer houses than the difficulty minimum could be placed.
    PlacementExhausted,

    /// The candidate cables do not connect all the houses.
    Disconnected,

    /// A house lost all its cables to the degree cap.
    IsolatedHouse,
}

/// Candidate cable: two aligned houses with no house between them.
#[derive(Debug, Copy, Clone)]
struct Candidate {
    /// First house.
    house1: usize,

    /// Second house.
    house2: usize,

    /// Manhattan length of the cable. Only used for tracing; candidates are
    /// walked in random order.
    length: usize,
}

/// [`RandomLayout`] object.
pub struct RandomLayout {
    /// Difficulty level to generate for.
    difficulty: Difficulty,

    /// Generation parameters of the difficulty level.
    params: Parameters,

    /// Number of attempts it took to generate the last puzzle.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last puzzle.
    pub duration: f32,

    /// Time when the generation started. Used to compute the
    /// [`RandomLayout::duration`].
    start: Instant,
}

impl RandomLayout {
    /// Create the object.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            params: difficulty.parameters(),
            attempts: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a puzzle.
    ///
    /// The method cannot fail: if no valid layout comes out of
    /// [`MAX_ATTEMPTS`] attempts, the predefined fallback puzzle is
    /// returned verbatim.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Puzzle {
        self.attempts = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        while self.attempts < MAX_ATTEMPTS {
            self.attempts += 1;
            match self.attempt(rng) {
                Ok(puzzle) => {
                    self.duration = self.start.elapsed().as_secs_f32();
                    debug!(
                        "Attempts = {}  Duration = {}  Houses = {}",
                        self.attempts,
                        self.duration,
                        puzzle.houses.len()
                    );
                    return puzzle;
                }
                Err(e) => {
                    debug!("Attempt {} failed: {e:?}", self.attempts);
                }
            }
        }

        self.duration = self.start.elapsed().as_secs_f32();
        debug!("Giving up after {} attempts, using the fallback puzzle", self.attempts);
        puzzles::fallback_puzzle(self.difficulty)
    }

    /// Run one layout attempt.
    fn attempt<R: Rng>(&self, rng: &mut R) -> Result<Puzzle, LayoutError> {
        let mut houses: Houses = self.place_houses(rng)?;

        let mut candidates: Vec<Candidate> = Self::candidates(&houses);
        candidates.shuffle(rng);

        let mut accepted: Vec<Cable> = self.spanning_tree(&houses, &candidates, rng)?;
        self.add_extra_cables(&houses, &candidates, &mut accepted, rng);

        let solution: Vec<Cable> = self.derive_degrees(&mut houses, &accepted);
        if houses.iter().any(|h| h.required == 0) {
            return Err(LayoutError::IsolatedHouse);
        }

        // The degree cap can also split the graph without isolating any
        // house. The puzzle is only valid if the kept cables still connect
        // every house.
        let mut components: DisjointSet = DisjointSet::new(houses.len());
        for cable in &solution {
            components.union(cable.house1, cable.house2);
        }
        if components.count() != 1 {
            return Err(LayoutError::Disconnected);
        }

        Ok(Puzzle {
            difficulty: self.difficulty,
            houses,
            solution,
        })
    }

    /// Place a random number of houses on random unoccupied cells.
    fn place_houses<R: Rng>(&self, rng: &mut R) -> Result<Houses, LayoutError> {
        let target: usize = rng.random_range(self.params.min_houses..=self.params.max_houses);
        let mut houses: Houses = Houses::new();

        for _ in 0..target {
            for _ in 0..MAX_PLACEMENT_TRIES {
                let pos: Point = Point::new(
                    rng.random_range(0..self.params.grid_size),
                    rng.random_range(0..self.params.grid_size),
                );
                if houses.push(pos).is_some() {
                    break;
                }
            }
        }

        if houses.len() < self.params.min_houses {
            return Err(LayoutError::PlacementExhausted);
        }
        debug!("Placed {} houses (target {target})", houses.len());
        Ok(houses)
    }

    /// Enumerate the candidate cables: every unordered house pair that is
    /// aligned and has no other house between them.
    fn candidates(houses: &Houses) -> Vec<Candidate> {
        let mut ret: Vec<Candidate> = Vec::new();

        for id1 in 0..houses.len() {
            for id2 in id1 + 1..houses.len() {
                let p1: Point = houses.get(id1).pos;
                let p2: Point = houses.get(id2).pos;

                if !p1.aligned(&p2) || houses.house_between(id1, id2) {
                    continue;
                }
                ret.push(Candidate {
                    house1: id1,
                    house2: id2,
                    length: p1.manhattan(&p2),
                });
            }
        }
        ret
    }

    /// Build a crossing-free spanning tree over the shuffled candidates.
    ///
    /// # Errors
    ///
    /// Return [`LayoutError::Disconnected`] if the candidates cannot
    /// connect all the houses into a single component.
    fn spanning_tree<R: Rng>(
        &self,
        houses: &Houses,
        candidates: &[Candidate],
        rng: &mut R,
    ) -> Result<Vec<Cable>, LayoutError> {
        let mut components: DisjointSet = DisjointSet::new(houses.len());
        let mut accepted: Vec<Cable> = Vec::with_capacity(houses.len());

        for candidate in candidates {
            if components.find(candidate.house1) == components.find(candidate.house2) {
                continue;
            }
            if Self::crosses_accepted(houses, &accepted, candidate) {
                continue;
            }
            components.union(candidate.house1, candidate.house2);
            let multiplicity: u8 = if rng.random_bool(DOUBLE_TREE_PROBABILITY) {
                2
            } else {
                1
            };
            debug!(
                "Tree cable {}-{} x{multiplicity} (length {})",
                candidate.house1, candidate.house2, candidate.length
            );
            accepted.push(Cable::new(candidate.house1, candidate.house2, multiplicity));
        }

        if components.count() != 1 {
            return Err(LayoutError::Disconnected);
        }
        Ok(accepted)
    }

    /// Add extra cables on top of the spanning tree.
    ///
    /// The target count is a fixed fraction of the tree size. Candidates
    /// whose pair is already cabled, or that would cross an accepted cable,
    /// are skipped.
    fn add_extra_cables<R: Rng>(
        &self,
        houses: &Houses,
        candidates: &[Candidate],
        accepted: &mut Vec<Cable>,
        rng: &mut R,
    ) {
        let target: usize = (EXTRA_CABLE_RATIO * accepted.len() as f64) as usize;
        let mut added: usize = 0;

        for candidate in candidates {
            if added >= target {
                break;
            }
            if accepted
                .iter()
                .any(|c| c.house1 == candidate.house1 && c.house2 == candidate.house2)
            {
                continue;
            }
            if Self::crosses_accepted(houses, accepted, candidate) {
                continue;
            }
            let multiplicity: u8 = if rng.random_bool(DOUBLE_EXTRA_PROBABILITY) {
                2
            } else {
                1
            };
            debug!(
                "Extra cable {}-{} x{multiplicity} (length {})",
                candidate.house1, candidate.house2, candidate.length
            );
            accepted.push(Cable::new(candidate.house1, candidate.house2, multiplicity));
            added += 1;
        }
    }

    /// Whether the candidate would cross an accepted cable.
    ///
    /// Cables that share a house with the candidate are exempt from the
    /// test: segments meeting at a common house never count as crossing.
    fn crosses_accepted(houses: &Houses, accepted: &[Cable], candidate: &Candidate) -> bool {
        let p1: Point = houses.get(candidate.house1).pos;
        let p2: Point = houses.get(candidate.house2).pos;

        accepted.iter().any(|cable| {
            if cable.house1 == candidate.house1
                || cable.house1 == candidate.house2
                || cable.house2 == candidate.house1
                || cable.house2 == candidate.house2
            {
                return false;
            }
            geometry::segments_cross(
                &p1,
                &p2,
                &houses.get(cable.house1).pos,
                &houses.get(cable.house2).pos,
            )
        })
    }

    /// Derive the required degree of every house from the accepted cables.
    ///
    /// The cables are walked in the order they were accepted. A cable that
    /// would push either of its houses above the degree cap is silently
    /// dropped; the kept cables form the solution.
    fn derive_degrees(&self, houses: &mut Houses, accepted: &[Cable]) -> Vec<Cable> {
        houses.clear_required();
        let mut solution: Vec<Cable> = Vec::with_capacity(accepted.len());

        for cable in accepted {
            let multiplicity: usize = cable.multiplicity as usize;

            if houses.get(cable.house1).required + multiplicity > self.params.max_degree
                || houses.get(cable.house2).required + multiplicity > self.params.max_degree
            {
                debug!(
                    "Dropping cable {}-{} x{multiplicity}: degree cap",
                    cable.house1, cable.house2
                );
                continue;
            }
            houses.get_mut(cable.house1).required += multiplicity;
            houses.get_mut(cable.house2).required += multiplicity;
            solution.push(*cable);
        }
        solution
    }
}
