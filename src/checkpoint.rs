/*
checkpoint.rs

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

//! Game checkpoint.
//!
//! Players can take checkpoints when resolving a puzzle so that they can
//! revert back to a well-known state if need be.
//! A checkpoint saves the currently placed cables and the undo and redo
//! lists.
//!
//! See [`crate::game`] where the checkpoints are organized as a stack: a
//! player can create several checkpoints, and can revert back to the last
//! checkpoint, which is then deleted.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game::Game;
use crate::moves::Moves;

/// Checkpoint representation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CheckPoint {
    /// Cable state at the time of the checkpoint.
    pub board: Board,

    /// Undo and redo lists at the time of the checkpoint.
    pub moves: Moves,
}

impl CheckPoint {
    /// Create a [`CheckPoint`] object for the provided [`Game`] object.
    pub fn new(game: &Game) -> Self {
        Self {
            board: game.board.clone(),
            moves: game.moves.clone(),
        }
    }
}
