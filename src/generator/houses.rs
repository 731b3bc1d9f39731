/*
houses.rs

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

//! Houses of a puzzle.
//!
//! A house is a cell on the grid that requires an exact number of cables.
//! The [`Houses`] object is the single arena shared by the generator, the
//! board, and the win checker: every component addresses a house by its
//! identifier and resolves it through this object, so there is never more
//! than one instance of a house.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::geometry::Point;

/// One house on the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct House {
    /// House identifier, which is also its slot in the arena.
    pub id: usize,

    /// Position on the grid.
    pub pos: Point,

    /// Number of cable ends that the house requires. Fixed once the puzzle
    /// is generated.
    pub required: usize,

    /// Number of cable ends currently attached to the house. Only the board
    /// updates this counter; the win checker recomputes it from scratch.
    pub current: usize,
}

/// Arena of the houses of one puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<House>", into = "Vec<House>")]
pub struct Houses {
    /// Houses, indexed by their identifier.
    houses: Vec<House>,

    /// Occupied cells, pointing back to the house identifier. The map
    /// guarantees at most one house per cell.
    occupied: HashMap<Point, usize>,
}

impl From<Vec<House>> for Houses {
    fn from(houses: Vec<House>) -> Self {
        let occupied: HashMap<Point, usize> = houses.iter().map(|h| (h.pos, h.id)).collect();
        Self { houses, occupied }
    }
}

impl From<Houses> for Vec<House> {
    fn from(houses: Houses) -> Self {
        houses.houses
    }
}

impl Houses {
    /// Create an empty [`Houses`] object.
    pub fn new() -> Self {
        Self {
            houses: Vec::new(),
            occupied: HashMap::new(),
        }
    }

    /// Number of houses.
    pub fn len(&self) -> usize {
        self.houses.len()
    }

    /// Whether the puzzle has no houses.
    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }

    /// Add a house at the given cell and return its identifier, or None if
    /// the cell is already occupied.
    pub fn push(&mut self, pos: Point) -> Option<usize> {
        if self.occupied.contains_key(&pos) {
            return None;
        }
        let id: usize = self.houses.len();
        self.houses.push(House {
            id,
            pos,
            required: 0,
            current: 0,
        });
        self.occupied.insert(pos, id);
        Some(id)
    }

    /// Whether the given cell holds a house.
    pub fn is_occupied(&self, pos: &Point) -> bool {
        self.occupied.contains_key(pos)
    }

    /// Return the house with the given identifier.
    pub fn get(&self, id: usize) -> &House {
        &self.houses[id]
    }

    /// Return the house with the given identifier for update.
    pub fn get_mut(&mut self, id: usize) -> &mut House {
        &mut self.houses[id]
    }

    /// Iterate over the houses in identifier order.
    pub fn iter(&self) -> std::slice::Iter<'_, House> {
        self.houses.iter()
    }

    /// Whether any house lies strictly between the two given houses on
    /// their grid line.
    pub fn house_between(&self, id1: usize, id2: usize) -> bool {
        let p1: Point = self.houses[id1].pos;
        let p2: Point = self.houses[id2].pos;

        self.houses
            .iter()
            .filter(|h| h.id != id1 && h.id != id2)
            .any(|h| super::geometry::is_between(&p1, &p2, &h.pos))
    }

    /// Reset the current degree of every house to zero.
    pub fn clear_current(&mut self) {
        for house in self.houses.iter_mut() {
            house.current = 0;
        }
    }

    /// Reset the required degree of every house to zero.
    pub fn clear_required(&mut self) {
        for house in self.houses.iter_mut() {
            house.required = 0;
        }
    }
}
