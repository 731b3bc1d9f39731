/*
game_test.rs

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

//! Behavior of a full game session.

use std::fs;
use std::path::PathBuf;

use hashido::game::Game;
use hashido::generator::puzzles::{Difficulty, fallback_puzzle};
use hashido::saver::game::SaverGame;

/// The fallback puzzle: a square of four houses, each requiring two cable
/// ends. House identifiers follow the insertion order: 0 = (1,1),
/// 1 = (3,1), 2 = (1,3), 3 = (3,3).
const CYCLE: [(usize, usize); 4] = [(0, 1), (1, 3), (3, 2), (2, 0)];

fn square_game() -> Game {
    let mut game: Game = Game::new();
    game.set_puzzle(fallback_puzzle(Difficulty::Easy));
    game
}

#[test]
fn completing_the_cycle_solves_the_puzzle() {
    let mut game: Game = square_game();

    for (house1, house2) in CYCLE {
        assert!(!game.is_solved());
        assert!(game.check_cable(house1, house2));
        assert_eq!(game.toggle_cable(house1, house2), 1);
    }
    assert!(game.is_solved());
}

#[test]
fn a_missing_cable_leaves_the_puzzle_unsolved() {
    let mut game: Game = square_game();

    // Three cables out of four: the two houses missing the fourth cable
    // are one cable end short.
    for (house1, house2) in &CYCLE[..3] {
        game.toggle_cable(*house1, *house2);
    }
    assert!(!game.is_solved());
}

#[test]
fn the_solution_cables_are_dropped_at_start() {
    let game: Game = square_game();

    assert!(game.board.cables().is_empty());
    assert_eq!(game.houses().len(), 4);
    for house in game.houses().iter() {
        assert_eq!(house.current, 0);
    }
}

#[test]
fn set_cable_round_trip_restores_the_win_state() {
    let mut game: Game = square_game();

    for (house1, house2) in CYCLE {
        game.toggle_cable(house1, house2);
    }
    assert!(game.is_solved());

    // Doubling one cable breaks the degrees; restoring the previous
    // multiplicity restores the solved state exactly.
    game.set_cable(0, 1, 2);
    assert_eq!(game.board.multiplicity(0, 1), 2);
    assert!(!game.is_solved());

    game.set_cable(0, 1, 1);
    assert_eq!(game.board.multiplicity(0, 1), 1);
    assert!(game.is_solved());
}

#[test]
fn undo_and_redo_replay_the_last_move() {
    let mut game: Game = square_game();

    game.toggle_cable(0, 1);
    game.toggle_cable(0, 1);
    assert_eq!(game.board.multiplicity(0, 1), 2);
    assert_eq!(game.moves.undo_len(), 2);

    game.undo();
    assert_eq!(game.board.multiplicity(0, 1), 1);
    assert_eq!(game.moves.redo_len(), 1);

    game.redo();
    assert_eq!(game.board.multiplicity(0, 1), 2);
    assert_eq!(game.moves.redo_len(), 0);
}

#[test]
fn a_new_move_invalidates_the_redo_list() {
    let mut game: Game = square_game();

    game.toggle_cable(0, 1);
    game.undo();
    assert_eq!(game.moves.redo_len(), 1);

    game.toggle_cable(1, 3);
    assert_eq!(game.moves.redo_len(), 0);
}

#[test]
fn reset_keeps_the_puzzle_but_clears_the_cables() {
    let mut game: Game = square_game();

    for (house1, house2) in CYCLE {
        game.toggle_cable(house1, house2);
    }
    game.reset();

    assert!(game.board.cables().is_empty());
    assert!(!game.is_solved());
    assert_eq!(game.houses().len(), 4);
    assert_eq!(game.moves.undo_len(), 0);
    for house in game.houses().iter() {
        assert_eq!(house.required, 2);
        assert_eq!(house.current, 0);
    }
}

#[test]
fn checkpoints_restore_the_cable_state() {
    let mut game: Game = square_game();

    game.toggle_cable(0, 1);
    game.set_checkpoint();
    assert_eq!(game.checkpoints_len(), 1);

    game.toggle_cable(1, 3);
    game.toggle_cable(3, 2);
    game.undo_checkpoint();

    assert_eq!(game.checkpoints_len(), 0);
    assert_eq!(game.board.multiplicity(0, 1), 1);
    assert_eq!(game.board.multiplicity(1, 3), 0);
    assert_eq!(game.board.multiplicity(3, 2), 0);
    assert_eq!(game.houses().get(1).current, 1);
    assert_eq!(game.houses().get(3).current, 0);
}

#[test]
fn an_empty_game_is_never_solved() {
    let mut game: Game = Game::new();

    assert!(!game.is_solved());
}

#[test]
fn a_saved_game_restores_to_the_same_state() {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("hashido-saver-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("cannot create the test directory");

    let mut game: Game = square_game();
    game.toggle_cable(0, 1);
    game.toggle_cable(1, 3);

    let saver: SaverGame = SaverGame::new(dir.clone());
    saver.save_game(&game).expect("cannot save the game");

    let mut restored: Game = saver
        .get_game()
        .expect("cannot load the game")
        .expect("no saved game found");

    assert_eq!(restored.houses().len(), 4);
    assert_eq!(restored.board.multiplicity(0, 1), 1);
    assert_eq!(restored.board.multiplicity(1, 3), 1);
    assert_eq!(restored.moves.undo_len(), 2);
    assert_eq!(restored.houses().get(1).current, 2);
    assert!(!restored.is_solved());

    saver.delete_save();
    assert!(saver.get_game().expect("cannot reload").is_none());
    let _ = fs::remove_dir_all(&dir);
}
