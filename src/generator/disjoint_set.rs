/*
disjoint_set.rs

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

//! Disjoint-set structure for the spanning-tree construction.
//!
//! The generator creates a fresh [`DisjointSet`] for every layout attempt
//! and discards it once the spanning tree is built. The structure tracks the
//! number of live components: when [`DisjointSet::count`] reaches 1, every
//! house is connected to every other house.

/// Disjoint-set (union-find) over the houses of one layout attempt.
#[derive(Debug)]
pub struct DisjointSet {
    /// Parent slot of each element. An element is a root when it is its own
    /// parent.
    parent: Vec<usize>,

    /// Number of live components.
    count: usize,
}

impl DisjointSet {
    /// Create a [`DisjointSet`] object with `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            count: n,
        }
    }

    /// Return the root of the component that contains `element`.
    ///
    /// The visited chain is compressed so that later lookups are direct.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root: usize = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current: usize = element;
        while self.parent[current] != root {
            let next: usize = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the components of the two elements.
    ///
    /// Return `true` if the two elements were in different components, in
    /// which case the component count decreases by one.
    pub fn union(&mut self, element1: usize, element2: usize) -> bool {
        let root1: usize = self.find(element1);
        let root2: usize = self.find(element2);

        if root1 == root2 {
            return false;
        }
        self.parent[root2] = root1;
        self.count -= 1;
        true
    }

    /// Number of live components.
    pub fn count(&self) -> usize {
        self.count
    }
}
