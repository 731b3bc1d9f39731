/*
geometry.rs

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

//! Grid geometry primitives.
//!
//! Cables in Hashido are always orthogonal: the two houses that a cable
//! connects share a column or a row. The predicates in this module decide
//! whether two houses are aligned, whether a house sits on the segment
//! between two other houses, and whether a vertical and a horizontal
//! segment cross each other.

use serde::{Deserialize, Serialize};

/// Position of a house on the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column, from 0 to the grid size excluded.
    pub x: usize,

    /// Row, from 0 to the grid size excluded.
    pub y: usize,
}

impl Point {
    /// Create a [`Point`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the two points share a column or a row.
    ///
    /// The method is never called with equal points: two houses cannot
    /// occupy the same cell.
    pub fn aligned(&self, other: &Point) -> bool {
        self.x == other.x || self.y == other.y
    }

    /// Manhattan distance to the other point.
    pub fn manhattan(&self, other: &Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Whether `candidate` lies strictly between `u` and `v` on their grid line.
///
/// When `u` and `v` share a column, `candidate` must be on that column with
/// its row strictly inside the row interval. Same reasoning for a shared
/// row. Points that are not aligned with both ends never qualify.
pub fn is_between(u: &Point, v: &Point, candidate: &Point) -> bool {
    if u.x == v.x {
        candidate.x == u.x && strictly_inside(u.y, v.y, candidate.y)
    } else if u.y == v.y {
        candidate.y == u.y && strictly_inside(u.x, v.x, candidate.x)
    } else {
        false
    }
}

/// Whether the segment `a1`-`a2` crosses the segment `b1`-`b2`.
///
/// The predicate is only meaningful when one segment is vertical and the
/// other horizontal. Parallel segments never cross. The intervals are open:
/// a segment ending on the other segment's line does not count as a
/// crossing, so cables that share a house are never reported as crossing
/// each other.
pub fn segments_cross(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> bool {
    let a_vertical: bool = a1.x == a2.x;
    let b_vertical: bool = b1.x == b2.x;

    if a_vertical == b_vertical {
        return false;
    }

    // Sort out which segment is the vertical one
    let (v1, v2, h1, h2) = if a_vertical {
        (a1, a2, b1, b2)
    } else {
        (b1, b2, a1, a2)
    };

    strictly_inside(h1.x, h2.x, v1.x) && strictly_inside(v1.y, v2.y, h1.y)
}

/// Whether `value` lies in the open interval between `bound1` and `bound2`.
fn strictly_inside(bound1: usize, bound2: usize, value: usize) -> bool {
    bound1.min(bound2) < value && value < bound1.max(bound2)
}
