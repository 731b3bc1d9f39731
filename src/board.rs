/*
board.rs

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

//! Cables placed by the player, and the legality of new cables.
//!
//! The board owns the current cable state. Before placing a cable the
//! caller asks [`Board::legal`]; the mutation operations themselves are
//! unconditional so that undo can always restore a previous state. Every
//! mutation keeps the per-house current-degree counters in sync; those
//! counters feed the rendering layer, while the win checker recomputes the
//! degrees from the cable set itself.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::cables::Cables;
use crate::generator::geometry::{self, Point};
use crate::generator::houses::Houses;

/// Cable state of the puzzle being played.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Board {
    /// Cables placed by the player.
    cables: Cables,
}

impl Board {
    /// Create a [`Board`] object with no cables.
    pub fn new() -> Self {
        Self {
            cables: Cables::new(),
        }
    }

    /// Whether a cable between the two houses would be legal.
    ///
    /// A cable is legal when the houses are aligned, no other house lies
    /// between them, and the segment does not cross an already placed cable.
    /// Placed cables that share one of the two houses are exempt from the
    /// crossing test; in particular, changing the multiplicity of an
    /// existing cable is always legal.
    pub fn legal(&self, houses: &Houses, house1: usize, house2: usize) -> bool {
        if house1 == house2 {
            return false;
        }

        let p1: Point = houses.get(house1).pos;
        let p2: Point = houses.get(house2).pos;

        if !p1.aligned(&p2) || houses.house_between(house1, house2) {
            return false;
        }

        !self.cables.iter().any(|cable| {
            if cable.house1 == house1
                || cable.house1 == house2
                || cable.house2 == house1
                || cable.house2 == house2
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

    /// Cycle the cable between the two houses through absent, single, and
    /// double, and return the new multiplicity (0 when the cable was
    /// removed).
    ///
    /// The operation is unconditional: callers that want to block illegal
    /// cables ask [`Board::legal`] first.
    pub fn toggle(&mut self, houses: &mut Houses, house1: usize, house2: usize) -> u8 {
        let previous: u8 = self.cables.get(house1, house2);
        let multiplicity: u8 = self.cables.toggle(house1, house2);

        debug!("Cable {house1}-{house2}: x{previous} -> x{multiplicity}");
        Self::update_current(houses, house1, house2, previous, multiplicity);
        multiplicity
    }

    /// Set the multiplicity of the cable between the two houses.
    ///
    /// A multiplicity of 0 removes the cable. Undo replays previous
    /// multiplicities through this operation.
    pub fn set_multiplicity(
        &mut self,
        houses: &mut Houses,
        house1: usize,
        house2: usize,
        multiplicity: u8,
    ) {
        let previous: u8 = self.cables.get(house1, house2);

        self.cables.set(house1, house2, multiplicity);
        Self::update_current(houses, house1, house2, previous, multiplicity);
    }

    /// Multiplicity of the cable between the two houses, or 0 if the pair
    /// is not cabled.
    pub fn multiplicity(&self, house1: usize, house2: usize) -> u8 {
        self.cables.get(house1, house2)
    }

    /// Read-only snapshot of the placed cables, for the win checker and the
    /// rendering layer.
    pub fn cables(&self) -> &Cables {
        &self.cables
    }

    /// Remove all the cables and reset the current-degree counters.
    pub fn reset(&mut self, houses: &mut Houses) {
        self.cables.clear();
        houses.clear_current();
    }

    /// Apply a multiplicity change to the current-degree counters of both
    /// houses.
    fn update_current(
        houses: &mut Houses,
        house1: usize,
        house2: usize,
        previous: u8,
        multiplicity: u8,
    ) {
        for house in [house1, house2] {
            let h = houses.get_mut(house);
            h.current = h.current + usize::from(multiplicity) - usize::from(previous);
        }
    }
}
