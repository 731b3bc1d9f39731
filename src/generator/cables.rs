/*
cables.rs

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

//! Cables between houses.
//!
//! A cable connects two distinct houses and carries a multiplicity of one or
//! two. The [`Cables`] object stores at most one entry per unordered house
//! pair: the pair is keyed with the smaller identifier first, so the cable
//! from house 3 to house 1 and the cable from house 1 to house 3 are the
//! same entry. A multiplicity of zero is never stored; removing the cable
//! removes the entry.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of parallel cables between two houses.
pub const MAX_MULTIPLICITY: u8 = 2;

/// One cable between two houses.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cable {
    /// First house. Always the smaller identifier.
    pub house1: usize,

    /// Second house.
    pub house2: usize,

    /// Number of parallel cables, 1 or 2.
    pub multiplicity: u8,
}

impl Cable {
    /// Create a [`Cable`] object. The houses can be given in any order.
    pub fn new(house1: usize, house2: usize, multiplicity: u8) -> Self {
        let (house1, house2) = key(house1, house2);
        Self {
            house1,
            house2,
            multiplicity,
        }
    }
}

/// Canonical key for the unordered house pair.
fn key(house1: usize, house2: usize) -> (usize, usize) {
    if house1 <= house2 {
        (house1, house2)
    } else {
        (house2, house1)
    }
}

/// Represent the cables placed between the houses.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<Cable>", into = "Vec<Cable>")]
pub struct Cables {
    /// For each unordered house pair, the multiplicity of the cable.
    cables: HashMap<(usize, usize), u8>,
}

impl From<Vec<Cable>> for Cables {
    fn from(cables: Vec<Cable>) -> Self {
        let mut ret: Cables = Cables::new();
        for c in cables {
            ret.set(c.house1, c.house2, c.multiplicity);
        }
        ret
    }
}

impl From<Cables> for Vec<Cable> {
    fn from(cables: Cables) -> Self {
        let mut ret: Vec<Cable> = cables.iter().collect();
        ret.sort_by_key(|c| (c.house1, c.house2));
        ret
    }
}

impl Cables {
    /// Create an empty [`Cables`] object.
    pub fn new() -> Self {
        Self {
            cables: HashMap::new(),
        }
    }

    /// Remove all the cables from the object.
    pub fn clear(&mut self) {
        self.cables.clear();
    }

    /// Number of cabled house pairs. Parallel cables count as one pair.
    pub fn len(&self) -> usize {
        self.cables.len()
    }

    /// Whether no cable is placed.
    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }

    /// Multiplicity of the cable between the two houses, or 0 if the pair
    /// is not cabled.
    pub fn get(&self, house1: usize, house2: usize) -> u8 {
        self.cables.get(&key(house1, house2)).copied().unwrap_or(0)
    }

    /// Set the multiplicity of the cable between the two houses.
    ///
    /// A multiplicity of 0 removes the cable.
    pub fn set(&mut self, house1: usize, house2: usize, multiplicity: u8) {
        let k: (usize, usize) = key(house1, house2);
        if multiplicity == 0 {
            self.cables.remove(&k);
        } else {
            self.cables.insert(k, multiplicity.min(MAX_MULTIPLICITY));
        }
    }

    /// Cycle the cable between the two houses through absent, single, and
    /// double, and return the new multiplicity (0 when the cable was
    /// removed).
    pub fn toggle(&mut self, house1: usize, house2: usize) -> u8 {
        let new_multiplicity: u8 = match self.get(house1, house2) {
            m if m >= MAX_MULTIPLICITY => 0,
            m => m + 1,
        };
        self.set(house1, house2, new_multiplicity);
        new_multiplicity
    }

    /// Sum of the multiplicities of the cables attached to the given house.
    pub fn degree(&self, house: usize) -> usize {
        self.cables
            .iter()
            .filter(|((h1, h2), _)| *h1 == house || *h2 == house)
            .map(|(_, m)| *m as usize)
            .sum()
    }

    /// Iterate over the cables, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Cable> + '_ {
        self.cables.iter().map(|((house1, house2), m)| Cable {
            house1: *house1,
            house2: *house2,
            multiplicity: *m,
        })
    }

    /// Print the cables.
    pub fn debug(&self) {
        let mut v: Vec<Cable> = self.iter().collect();

        v.sort_by_key(|c| (c.house1, c.house2));
        for c in v {
            debug!("{:>3} <> {:<3} x{}", c.house1, c.house2, c.multiplicity);
        }
    }
}
