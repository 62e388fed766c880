//! Generic square grid container.

use crate::Position;

/// A square, heap-backed container indexed by [`Position`].
///
/// The size is fixed at construction and every access is bounds-asserted.
/// `Grid` is pure data: it knows nothing about sudoku rules, fill order,
/// or cell editability.
///
/// # Examples
///
/// ```
/// use sudotty_core::{Grid, Position};
///
/// let mut grid = Grid::filled(3, 0u8);
/// *grid.get_mut(Position::new(2, 1)) = 7;
/// assert_eq!(*grid.get(Position::new(2, 1)), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: u8,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates an `n`-by-`n` grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    #[must_use]
    pub fn filled(n: u8, value: T) -> Self {
        assert!(n > 0, "grid size must be at least 1");
        Self {
            size: n,
            cells: vec![value; usize::from(n) * usize::from(n)],
        }
    }
}

impl<T> Grid<T> {
    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns a reference to the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> &T {
        &self.cells[pos.to_linear(self.size)]
    }

    /// Returns a mutable reference to the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn get_mut(&mut self, pos: Position) -> &mut T {
        let index = pos.to_linear(self.size);
        &mut self.cells[index]
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(usize::from(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_and_access() {
        let mut grid = Grid::filled(4, false);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().count(), 16);

        *grid.get_mut(Position::new(3, 0)) = true;
        assert!(*grid.get(Position::new(3, 0)));
        assert!(!*grid.get(Position::new(0, 3)));
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut grid = Grid::filled(2, 0u8);
        *grid.get_mut(Position::new(0, 0)) = 1;
        *grid.get_mut(Position::new(1, 0)) = 2;
        *grid.get_mut(Position::new(0, 1)) = 3;
        *grid.get_mut(Position::new(1, 1)) = 4;

        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 board")]
    fn test_access_out_of_bounds_panics() {
        let grid = Grid::filled(2, 0u8);
        let _ = grid.get(Position::new(2, 0));
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 1")]
    fn test_zero_size_panics() {
        let _ = Grid::filled(0, 0u8);
    }
}
