/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The game owns the houses of the active puzzle and the board with the
//! player's cables. Each player action flows through the same steps: the
//! caller asks [`Game::check_cable`] whether the cable is legal, applies it
//! with [`Game::toggle_cable`], and reads the solved state that the game
//! recomputed. A new puzzle fully replaces the previous one.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::checker;
use crate::checkpoint::CheckPoint;
use crate::generator::houses::Houses;
use crate::generator::puzzles::{Difficulty, Puzzle};
use crate::moves::Moves;

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Game {
    /// Houses of the active puzzle.
    houses: Houses,

    /// Difficulty level of the active puzzle.
    difficulty: Difficulty,

    /// Cables placed by the player.
    pub board: Board,

    /// Undo and redo lists.
    pub moves: Moves,

    /// List of checkpoints set by the player.
    checkpoints: Vec<CheckPoint>,

    /// Whether a puzzle has been started.
    pub started: bool,

    /// Whether the current placement solves the puzzle. Updated after every
    /// mutation; [`Game::is_solved`] recomputes it from the cable set.
    pub solved: bool,
}

impl Game {
    /// Create a [`Game`] object.
    pub fn new() -> Self {
        Self {
            houses: Houses::new(),
            difficulty: Difficulty::default(),
            board: Board::new(),
            moves: Moves::new(),
            checkpoints: Vec::new(),
            started: false,
            solved: false,
        }
    }

    /// Clear all resources.
    pub fn clear(&mut self) {
        self.houses = Houses::new();
        self.difficulty = Difficulty::default();
        self.board = Board::new();
        self.moves.clear();
        self.checkpoints.clear();
        self.started = false;
        self.solved = false;
    }

    /// Provide the generated [`Puzzle`] object to play.
    ///
    /// Only the houses and their required degrees are kept: the solution
    /// cables that the generator produced are dropped here, and the player
    /// starts from an empty board.
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        self.clear();
        debug!(
            "Starting a {} puzzle with {} houses ({} solution cables dropped)",
            puzzle.difficulty,
            puzzle.houses.len(),
            puzzle.solution.len()
        );
        self.houses = puzzle.houses;
        self.difficulty = puzzle.difficulty;
        self.houses.clear_current();
        self.started = true;
    }

    /// Houses of the active puzzle.
    pub fn houses(&self) -> &Houses {
        &self.houses
    }

    /// Difficulty level of the active puzzle.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether a cable between the two houses would be legal. Pure query,
    /// no mutation.
    pub fn check_cable(&self, house1: usize, house2: usize) -> bool {
        self.board.legal(&self.houses, house1, house2)
    }

    /// Cycle the cable between the two houses and return the new
    /// multiplicity (0 when the cable was removed).
    ///
    /// The move is recorded in the undo list and the solved state is
    /// re-evaluated.
    pub fn toggle_cable(&mut self, house1: usize, house2: usize) -> u8 {
        let previous: u8 = self.board.multiplicity(house1, house2);
        let multiplicity: u8 = self.board.toggle(&mut self.houses, house1, house2);

        self.moves.record(house1, house2, previous, multiplicity);
        self.update_solved();
        multiplicity
    }

    /// Set the multiplicity of the cable between the two houses.
    ///
    /// The change is not recorded in the undo list: undo itself replays
    /// previous multiplicities through this operation, and so can the
    /// session layer of an embedding application.
    pub fn set_cable(&mut self, house1: usize, house2: usize, multiplicity: u8) {
        self.board
            .set_multiplicity(&mut self.houses, house1, house2, multiplicity);
        self.update_solved();
    }

    /// Undo the last move.
    pub fn undo(&mut self) {
        if let Some(op) = self.moves.undo() {
            self.board
                .set_multiplicity(&mut self.houses, op.house1, op.house2, op.previous);
            self.update_solved();
        }
    }

    /// Redo the last undone move.
    pub fn redo(&mut self) {
        if let Some(op) = self.moves.redo() {
            self.board
                .set_multiplicity(&mut self.houses, op.house1, op.house2, op.applied);
            self.update_solved();
        }
    }

    /// Whether the puzzle is successfully solved.
    ///
    /// The verdict is recomputed from the cable set on every call.
    pub fn is_solved(&mut self) -> bool {
        self.update_solved();
        self.solved
    }

    /// Restart the game status (placed cables), but keep the puzzle.
    pub fn reset(&mut self) {
        self.board.reset(&mut self.houses);
        self.moves.clear();
        self.checkpoints.clear();
        self.solved = false;
    }

    /// Return the number of checkpoints that the player created.
    pub fn checkpoints_len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Set a checkpoint.
    pub fn set_checkpoint(&mut self) {
        self.checkpoints.push(CheckPoint::new(self));
    }

    /// Revert back to the last checkpoint.
    pub fn undo_checkpoint(&mut self) {
        // The checkpoint is removed
        if let Some(c) = self.checkpoints.pop() {
            self.board = c.board;
            self.moves = c.moves;
            self.refresh_current();
            self.update_solved();
        }
    }

    /// Re-evaluate the solved state from the cable set.
    fn update_solved(&mut self) {
        self.solved = checker::is_solved(&self.houses, self.board.cables());
    }

    /// Rebuild the current-degree counters after the board was replaced
    /// wholesale.
    fn refresh_current(&mut self) {
        for id in 0..self.houses.len() {
            self.houses.get_mut(id).current = self.board.cables().degree(id);
        }
    }
}
