//! Admissibility checks against a partially filled grid.
//!
//! The backtracking search fills the board strictly in row-major order, so
//! when it considers a candidate for a cell, only the cells *before* that
//! cell in fill order hold final values. Everything at or after the current
//! cell may contain stale leftovers from abandoned branches and must never
//! be read. The checks below make that prefix discipline explicit: they
//! skip rows and columns the fill has not reached yet instead of relying on
//! loop bounds to happen to exclude them.

use sudotty_core::{DigitGrid, Position};

/// Checks whether `digit` can be placed at `pos` given the already-placed
/// row-major prefix of `grid`.
///
/// Pure predicate; the grid is never modified. Cells at or after `pos` in
/// row-major order are ignored even if they hold values.
///
/// # Panics
///
/// Panics if `pos` is outside the grid.
#[must_use]
pub fn fits_prefix(grid: &DigitGrid, pos: Position, digit: u8) -> bool {
    fits_row_prefix(grid, pos, digit)
        && fits_column_prefix(grid, pos, digit)
        && fits_section_prefix(grid, pos, digit)
}

/// Row check: the cells left of `pos` in its row.
fn fits_row_prefix(grid: &DigitGrid, pos: Position, digit: u8) -> bool {
    (0..pos.x).all(|x| grid.get(Position::new(x, pos.y)) != Some(digit))
}

/// Column check: the cells above `pos` in its column.
fn fits_column_prefix(grid: &DigitGrid, pos: Position, digit: u8) -> bool {
    (0..pos.y).all(|y| grid.get(Position::new(pos.x, y)) != Some(digit))
}

/// Section check: the filled portion of the section containing `pos`.
fn fits_section_prefix(grid: &DigitGrid, pos: Position, digit: u8) -> bool {
    let section = grid.section_size();
    let top = (pos.y / section) * section;
    let left = (pos.x / section) * section;

    for y in top..top + section {
        if pos.y < y {
            // Rows below the current one have not been reached yet.
            return true;
        }
        for x in left..left + section {
            if y == pos.y && x >= pos.x {
                // Columns at or after the current cell in its own row
                // have not been reached yet.
                break;
            }
            if grid.get(Position::new(x, y)) == Some(digit) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills the first `prefix` cells of a 9×9 grid from a solved board.
    fn prefix_grid(prefix: usize) -> DigitGrid {
        let solved: DigitGrid = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        "
        .parse()
        .unwrap();

        let mut grid = DigitGrid::empty(9);
        for i in 0..prefix {
            let pos = Position::from_linear(i, 9);
            grid.set(pos, solved.get(pos));
        }
        grid
    }

    #[test]
    fn test_empty_grid_admits_everything() {
        let grid = DigitGrid::empty(9);
        for digit in 1..=9 {
            assert!(fits_prefix(&grid, Position::new(0, 0), digit));
        }
    }

    #[test]
    fn test_row_prefix_rejects_placed_digits() {
        // Row 0 prefix is [5, 3, 4, 6].
        let grid = prefix_grid(4);
        let pos = Position::new(4, 0);

        for placed in [5, 3, 4, 6] {
            assert!(!fits_prefix(&grid, pos, placed));
        }
        // 7 is the correct next value of the solved board.
        assert!(fits_prefix(&grid, pos, 7));
    }

    #[test]
    fn test_column_prefix_rejects_placed_digits() {
        // Column 0 holds 5 and 6 after two full rows.
        let grid = prefix_grid(18);
        let pos = Position::new(0, 2);

        assert!(!fits_prefix(&grid, pos, 5));
        assert!(!fits_prefix(&grid, pos, 6));
        assert!(fits_prefix(&grid, pos, 1));
    }

    #[test]
    fn test_section_prefix_rejects_placed_digits() {
        // Two full rows placed; the middle section already holds
        // 6, 7, 8 (row 0) and 1, 9, 5 (row 1).
        let grid = prefix_grid(18);
        let pos = Position::new(3, 2);

        assert!(!fits_prefix(&grid, pos, 7));
        assert!(!fits_prefix(&grid, pos, 9));
        // 3 collides with nothing in the section, row, or column prefix.
        assert!(fits_prefix(&grid, pos, 3));
    }

    #[test]
    fn test_stale_cells_after_position_are_ignored() {
        // A leftover from an abandoned branch sits *after* the current
        // cell in fill order; the checker must not see it.
        let mut grid = prefix_grid(2);
        grid.set(Position::new(5, 0), Some(7)); // same row, ahead
        grid.set(Position::new(2, 1), Some(7)); // next row, same section
        grid.set(Position::new(2, 8), Some(7)); // same column, far below

        assert!(fits_prefix(&grid, Position::new(2, 0), 7));
    }

    #[test]
    fn test_section_scan_covers_earlier_rows() {
        // One full row placed; a cell in row 1 must still see the three
        // section cells directly above it.
        let grid = prefix_grid(9);
        let pos = Position::new(0, 1);

        // Top-left section row 0 is [5, 3, 4].
        assert!(!fits_prefix(&grid, pos, 5));
        assert!(!fits_prefix(&grid, pos, 3));
        assert!(!fits_prefix(&grid, pos, 4));
        assert!(fits_prefix(&grid, pos, 6));
    }

    #[test]
    fn test_whole_solved_prefix_is_consistent() {
        // Every placement of a valid solution must be admissible against
        // the prefix that precedes it.
        let solved = prefix_grid(81);
        for i in 0..81 {
            let pos = Position::from_linear(i, 9);
            let grid = prefix_grid(i);
            let digit = solved.get(pos).unwrap();
            assert!(
                fits_prefix(&grid, pos, digit),
                "digit {digit} rejected at {pos}"
            );
        }
    }
}
