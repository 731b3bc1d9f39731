/*
moves.rs

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

//! Manage the player's cable moves.
//!
//! The module manages the undo and redo lists. Each move records the
//! multiplicity of a cable before and after the player touched it; undo
//! restores the previous multiplicity, redo re-applies the new one. The
//! lists only hold the records: the game replays them through the board's
//! set-multiplicity operation.

use serde::{Deserialize, Serialize};

/// Cable parameters for an undo and redo operation.
/// The object stores the multiplicity change that the player performed.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    /// First house of the cable.
    pub house1: usize,

    /// Second house of the cable.
    pub house2: usize,

    /// Multiplicity before the move (0 when the cable was absent).
    pub previous: u8,

    /// Multiplicity after the move (0 when the move removed the cable).
    pub applied: u8,
}

/// Manage the moves that the player performed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Moves {
    /// List of undo operations.
    undo_op: Vec<Move>,

    /// List of redo operations.
    redo_op: Vec<Move>,
}

impl Moves {
    /// Create a [`Moves`] object.
    pub fn new() -> Self {
        Self {
            undo_op: Vec::new(),
            redo_op: Vec::new(),
        }
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.undo_op.clear();
        self.redo_op.clear();
    }

    /// Record a move and add it to the undo list.
    ///
    /// A new move invalidates the redo list.
    pub fn record(&mut self, house1: usize, house2: usize, previous: u8, applied: u8) {
        self.undo_op.push(Move {
            house1,
            house2,
            previous,
            applied,
        });
        self.redo_op.clear();
    }

    /// Pop the last move for undoing.
    ///
    /// The move is transferred to the redo list. The caller restores the
    /// cable to [`Move::previous`].
    pub fn undo(&mut self) -> Option<Move> {
        let op: Move = self.undo_op.pop()?;
        self.redo_op.push(op);
        Some(op)
    }

    /// Pop the last undone move for redoing.
    ///
    /// The move is transferred back to the undo list. The caller restores
    /// the cable to [`Move::applied`].
    pub fn redo(&mut self) -> Option<Move> {
        let op: Move = self.redo_op.pop()?;
        self.undo_op.push(op);
        Some(op)
    }

    /// Return the length of the undo list.
    pub fn undo_len(&self) -> usize {
        self.undo_op.len()
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.redo_op.len()
    }
}
