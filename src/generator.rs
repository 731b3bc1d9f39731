/*
generator.rs

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

//! Generate random puzzles.
//!
//! A puzzle is a set of houses on a grid, each with a required number of
//! cable ends. You create a puzzle by creating a
//! [`random_layout::RandomLayout`] object for a [`puzzles::Difficulty`]
//! level and by using its [`random_layout::RandomLayout::generate`] method.
//! The method retries failed layout attempts with fresh randomness; if no
//! attempt succeeds within the allowed attempts, a predefined fallback puzzle from
//! [`puzzles`] is returned, so the method itself cannot fail.
//!
//! The randomness source is passed in by the caller. The application passes
//! [`rand::rng`]; tests pass a seeded [`rand::rngs::StdRng`] to reproduce a
//! layout exactly.
//!
//! The generated [`puzzles::Puzzle`] object carries the solution cables
//! that the generator used to derive the house degrees. They are only
//! meaningful during generation: the game drops them when the puzzle
//! starts, and the player reconstructs a (not necessarily identical)
//! solution from the degrees alone.

pub mod cables;
pub mod disjoint_set;
pub mod geometry;
pub mod houses;
pub mod puzzles;
pub mod random_layout;
