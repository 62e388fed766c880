//! Core data structures for the Sudotty game.
//!
//! This crate provides the board-shaped containers shared by puzzle
//! generation and game play:
//!
//! - [`Position`]: an (x, y) board coordinate with row-major linear
//!   index conversions
//! - [`Grid`]: a generic square container with bounds-asserted access
//! - [`DigitGrid`]: a square grid of optional digits, used both for
//!   solutions (fully filled) and problems (clues only)
//!
//! The containers are pure data; fill order, constraint checking, and
//! play rules live in the `sudotty-generator` and `sudotty-game` crates.
//!
//! # Examples
//!
//! ```
//! use sudotty_core::{DigitGrid, Position};
//!
//! let mut grid = DigitGrid::empty(9);
//! grid.set(Position::new(4, 4), Some(5));
//!
//! assert_eq!(grid.get(Position::new(4, 4)), Some(5));
//! assert_eq!(grid.section_size(), 3);
//! ```

pub mod digit_grid;
pub mod grid;
pub mod position;

pub use self::{
    digit_grid::{DigitGrid, ParseGridError},
    grid::Grid,
    position::Position,
};
