//! Game session management for Sudotty.
//!
//! This crate wraps a generated puzzle in a playable session: a working
//! grid of [`CellState`] cells, a cursor that only rests on editable
//! cells, value entry with optional auto-lock of correct guesses, and a
//! comparator against the stored solution.
//!
//! # Examples
//!
//! ```
//! use sudotty_game::{Direction, Game};
//! use sudotty_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate_with_seed(42).unwrap();
//! let mut game = Game::new(puzzle);
//!
//! game.move_cursor(Direction::Right);
//! assert!(!game.cell(game.cursor()).is_locked());
//! ```

pub mod cell;
pub mod game;

pub use self::{
    cell::CellState,
    game::{Direction, Game, GameError},
};
