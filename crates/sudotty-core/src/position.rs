//! Board position types.

use std::fmt::{self, Display};

/// An (x, y) coordinate on a square board.
///
/// `x` is the column and `y` the row, both starting at 0 in the top-left
/// corner. The board size is not part of the position; conversions to and
/// from the row-major linear index take it as a parameter, since the same
/// coordinate type serves every supported board size.
///
/// # Examples
///
/// ```
/// use sudotty_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.to_linear(9), 40); // row 4, column 4 -> 4*9 + 4
/// assert_eq!(Position::from_linear(40, 9), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index (0-based).
    pub x: u8,
    /// Row index (0-based).
    pub y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Converts this position to its row-major linear index on an
    /// `n`-by-`n` board.
    ///
    /// The linear index is the canonical fill order used by the puzzle
    /// generator: `y * n + x`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    #[must_use]
    pub fn to_linear(self, n: u8) -> usize {
        assert!(
            self.x < n && self.y < n,
            "position ({}, {}) outside {n}x{n} board",
            self.x,
            self.y
        );
        usize::from(self.y) * usize::from(n) + usize::from(self.x)
    }

    /// Converts a row-major linear index on an `n`-by-`n` board back to
    /// a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `n * n`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_linear(index: usize, n: u8) -> Self {
        let size = usize::from(n);
        assert!(index < size * size, "index {index} outside {n}x{n} board");
        Self::new((index % size) as u8, (index / size) as u8)
    }

    /// Returns an iterator over all positions of an `n`-by-`n` board in
    /// row-major order.
    pub fn all(n: u8) -> impl Iterator<Item = Self> {
        let size = usize::from(n);
        (0..size * size).map(move |i| Self::from_linear(i, n))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_linear_round_trip_corners() {
        assert_eq!(Position::new(0, 0).to_linear(9), 0);
        assert_eq!(Position::new(8, 0).to_linear(9), 8);
        assert_eq!(Position::new(0, 8).to_linear(9), 72);
        assert_eq!(Position::new(8, 8).to_linear(9), 80);
        assert_eq!(Position::from_linear(80, 9), Position::new(8, 8));
    }

    #[test]
    fn test_all_is_row_major() {
        let positions: Vec<_> = Position::all(4).collect();
        assert_eq!(positions.len(), 16);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(1, 0));
        assert_eq!(positions[4], Position::new(0, 1));
        assert_eq!(positions[15], Position::new(3, 3));
    }

    #[test]
    #[should_panic(expected = "outside 9x9 board")]
    fn test_out_of_bounds_panics() {
        let _ = Position::new(9, 0).to_linear(9);
    }

    proptest! {
        #[test]
        fn prop_linear_round_trip(x in 0u8..9, y in 0u8..9) {
            let pos = Position::new(x, y);
            prop_assert_eq!(Position::from_linear(pos.to_linear(9), 9), pos);
        }

        #[test]
        fn prop_index_round_trip(index in 0usize..81) {
            prop_assert_eq!(Position::from_linear(index, 9).to_linear(9), index);
        }
    }
}
