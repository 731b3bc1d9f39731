/*
lib.rs

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

//! Hashido puzzle engine.
//!
//! Hashido generates and validates puzzles in the style of Hashiwokakero
//! ("Bridges"): houses on a grid, each requiring an exact number of
//! orthogonal cables to other houses, connected into a single non-crossing
//! graph with at most two parallel cables per house pair.
//!
//! The [`generator`] module produces puzzles, the [`board`] module validates
//! and applies the player's cables, the [`checker`] module decides the
//! solved state, and the [`game`] module ties them together for an embedding
//! application. Rendering, input capture, and timers are left to the
//! embedding application.

pub mod board;
pub mod checker;
pub mod checkpoint;
pub mod cli_options;
pub mod game;
pub mod generator;
pub mod moves;
pub mod saver;
