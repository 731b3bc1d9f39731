/*
board_test.rs

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

//! Legality and mutation behavior of the board.

use rstest::rstest;

use hashido::board::Board;
use hashido::generator::geometry::Point;
use hashido::generator::houses::Houses;

fn houses_at(cells: &[(usize, usize)]) -> Houses {
    let mut houses: Houses = Houses::new();

    for (x, y) in cells {
        houses.push(Point::new(*x, *y));
    }
    houses
}

#[rstest]
#[case(&[(0, 0), (4, 0)], 0, 1, true)] // aligned on a row
#[case(&[(2, 1), (2, 4)], 0, 1, true)] // aligned on a column
#[case(&[(0, 0), (1, 2)], 0, 1, false)] // not aligned
#[case(&[(1, 0), (1, 1), (1, 2)], 0, 2, false)] // house in between
fn legality_is_symmetric(
    #[case] cells: &[(usize, usize)],
    #[case] house1: usize,
    #[case] house2: usize,
    #[case] expected: bool,
) {
    let houses: Houses = houses_at(cells);
    let board: Board = Board::new();

    assert_eq!(board.legal(&houses, house1, house2), expected);
    assert_eq!(board.legal(&houses, house2, house1), expected);
}

#[test]
fn crossing_cable_is_illegal() {
    // Horizontal cable from (0,1) to (2,1); the vertical candidate from
    // (1,0) to (1,2) passes through its middle.
    let mut houses: Houses = houses_at(&[(0, 1), (2, 1), (1, 0), (1, 2)]);
    let mut board: Board = Board::new();

    assert!(board.legal(&houses, 2, 3));
    board.toggle(&mut houses, 0, 1);
    assert!(!board.legal(&houses, 2, 3));
    assert!(!board.legal(&houses, 3, 2));
}

#[test]
fn cable_sharing_a_house_is_exempt_from_the_crossing_test() {
    let mut houses: Houses = houses_at(&[(0, 0), (2, 0), (0, 2)]);
    let mut board: Board = Board::new();

    board.toggle(&mut houses, 0, 1);
    // The candidate shares house 0 with the placed cable.
    assert!(board.legal(&houses, 0, 2));
    // Changing the multiplicity of the placed cable itself stays legal.
    assert!(board.legal(&houses, 0, 1));
}

#[test]
fn intervening_house_blocks_only_the_long_cable() {
    let houses: Houses = houses_at(&[(1, 0), (1, 1), (1, 2)]);
    let board: Board = Board::new();

    assert!(!board.legal(&houses, 0, 2));
    assert!(board.legal(&houses, 0, 1));
    assert!(board.legal(&houses, 1, 2));
}

#[test]
fn a_house_is_never_legal_with_itself() {
    let houses: Houses = houses_at(&[(0, 0), (4, 0)]);
    let board: Board = Board::new();

    assert!(!board.legal(&houses, 0, 0));
}

#[test]
fn toggle_cycles_through_the_multiplicities() {
    let mut houses: Houses = houses_at(&[(0, 0), (3, 0)]);
    let mut board: Board = Board::new();

    assert_eq!(board.toggle(&mut houses, 0, 1), 1);
    assert_eq!(board.toggle(&mut houses, 0, 1), 2);
    assert_eq!(board.toggle(&mut houses, 0, 1), 0);
    assert!(board.cables().is_empty());
}

#[test]
fn toggle_updates_the_current_degrees() {
    let mut houses: Houses = houses_at(&[(0, 0), (3, 0), (0, 3)]);
    let mut board: Board = Board::new();

    board.toggle(&mut houses, 0, 1);
    board.toggle(&mut houses, 0, 1);
    board.toggle(&mut houses, 0, 2);
    assert_eq!(houses.get(0).current, 3);
    assert_eq!(houses.get(1).current, 2);
    assert_eq!(houses.get(2).current, 1);

    board.toggle(&mut houses, 0, 1);
    assert_eq!(houses.get(0).current, 1);
    assert_eq!(houses.get(1).current, 0);
}

#[test]
fn set_multiplicity_restores_a_previous_state() {
    let mut houses: Houses = houses_at(&[(0, 0), (3, 0)]);
    let mut board: Board = Board::new();

    board.set_multiplicity(&mut houses, 0, 1, 2);
    assert_eq!(board.multiplicity(0, 1), 2);
    assert_eq!(houses.get(0).current, 2);

    board.set_multiplicity(&mut houses, 0, 1, 0);
    assert_eq!(board.multiplicity(0, 1), 0);
    assert_eq!(houses.get(0).current, 0);
    assert!(board.cables().is_empty());
}

#[test]
fn unordered_pairs_share_one_cable() {
    let mut houses: Houses = houses_at(&[(0, 0), (3, 0)]);
    let mut board: Board = Board::new();

    board.toggle(&mut houses, 1, 0);
    assert_eq!(board.multiplicity(0, 1), 1);
    assert_eq!(board.multiplicity(1, 0), 1);
    assert_eq!(board.cables().len(), 1);
}

#[test]
fn reset_clears_cables_and_counters() {
    let mut houses: Houses = houses_at(&[(0, 0), (3, 0)]);
    let mut board: Board = Board::new();

    board.toggle(&mut houses, 0, 1);
    board.reset(&mut houses);
    assert!(board.cables().is_empty());
    assert_eq!(houses.get(0).current, 0);
    assert_eq!(houses.get(1).current, 0);
}
