/*
puzzles.rs

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

//! Puzzle representation and difficulty levels.
//!
//! Each difficulty level fixes the grid size, the house count range, and
//! the maximum number of cable ends per house. The module also provides the
//! predefined fallback puzzle that [`super::random_layout`] returns when
//! random generation keeps failing, so that asking for a puzzle can never
//! fail.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::cables::Cable;
use super::geometry::Point;
use super::houses::Houses;

/// Puzzle difficulty level.
///
/// Embedding applications that store the selected level as an integer (in a
/// settings backend, for example) can map it back with
/// [`Difficulty::from_repr`].
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Generation parameters of a difficulty level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Width and height of the square grid.
    pub grid_size: usize,

    /// Minimum number of houses to place.
    pub min_houses: usize,

    /// Maximum number of houses to place.
    pub max_houses: usize,

    /// Maximum number of cable ends per house.
    pub max_degree: usize,
}

impl Difficulty {
    /// Generation parameters for the difficulty level.
    pub fn parameters(&self) -> Parameters {
        match self {
            Difficulty::Easy => Parameters {
                grid_size: 5,
                min_houses: 6,
                max_houses: 9,
                max_degree: 4,
            },
            Difficulty::Medium => Parameters {
                grid_size: 7,
                min_houses: 8,
                max_houses: 12,
                max_degree: 6,
            },
            Difficulty::Hard => Parameters {
                grid_size: 10,
                min_houses: 12,
                max_houses: 18,
                max_degree: 8,
            },
        }
    }
}

/// A generated puzzle.
///
/// The solution cables are the ones that the generator used to derive the
/// required degrees. The session layer drops them when the puzzle starts:
/// the player only receives the houses and their required degrees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Difficulty level that the puzzle was generated for.
    pub difficulty: Difficulty,

    /// Houses with their required degrees.
    pub houses: Houses,

    /// Solution cables, in the order the generator accepted them.
    pub solution: Vec<Cable>,
}

/// Return the predefined fallback puzzle.
///
/// Four houses on a square, each requiring two cable ends, connected by a
/// four-cycle of single cables. The puzzle is returned verbatim when the
/// random generator exhausts its allowed attempts.
pub fn fallback_puzzle(difficulty: Difficulty) -> Puzzle {
    let mut houses: Houses = Houses::new();

    for pos in [
        Point::new(1, 1),
        Point::new(3, 1),
        Point::new(1, 3),
        Point::new(3, 3),
    ] {
        if let Some(id) = houses.push(pos) {
            houses.get_mut(id).required = 2;
        }
    }

    Puzzle {
        difficulty,
        houses,
        solution: vec![
            Cable::new(0, 1, 1),
            Cable::new(1, 3, 1),
            Cable::new(3, 2, 1),
            Cable::new(2, 0, 1),
        ],
    }
}
