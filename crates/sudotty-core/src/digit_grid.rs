//! Square grids of optional digits.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Grid, Position};

/// A square grid of optional digits in the range `1..=n`.
///
/// `DigitGrid` is the value layer shared by generation and play: a fully
/// filled instance is a solution, a sparsely filled one is a problem whose
/// `Some` cells are the initial clues. The side length must be a perfect
/// square (4, 9, 16, ...) so the grid always divides into
/// `section_size` × `section_size` sections.
///
/// # Examples
///
/// ```
/// use sudotty_core::{DigitGrid, Position};
///
/// let mut grid = DigitGrid::empty(9);
/// assert_eq!(grid.section_size(), 3);
///
/// grid.set(Position::new(0, 0), Some(5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: Grid<Option<u8>>,
    section: u8,
}

impl DigitGrid {
    /// Creates an empty `n`-by-`n` grid.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not the square of an integer of at least 2.
    #[must_use]
    pub fn empty(n: u8) -> Self {
        let section = exact_sqrt(n)
            .filter(|section| *section >= 2)
            .unwrap_or_else(|| {
                panic!("board size must be the square of an integer >= 2, got {n}")
            });
        Self {
            cells: Grid::filled(n, None),
            section,
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.cells.size()
    }

    /// Returns the side length of one section (3 on a 9×9 board).
    #[must_use]
    pub fn section_size(&self) -> u8 {
        self.section
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<u8> {
        *self.cells.get(pos)
    }

    /// Sets or clears the digit at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, digit: Option<u8>) {
        *self.cells.get_mut(pos) = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.cells().filter(|cell| cell.is_some()).count()
    }

    /// Checks whether this grid is a valid solution.
    ///
    /// A grid is solved when every row, every column, and every section
    /// contains each digit `1..=n` exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let n = self.size();
        let section = self.section;

        let row = |y: u8| (0..n).map(move |x| Position::new(x, y));
        let column = |x: u8| (0..n).map(move |y| Position::new(x, y));
        let section_cells = move |index: u8| {
            let top = (index / section) * section;
            let left = (index % section) * section;
            (0..n).map(move |i| Position::new(left + i % section, top + i / section))
        };

        (0..n).all(|i| {
            self.house_complete(row(i))
                && self.house_complete(column(i))
                && self.house_complete(section_cells(i))
        })
    }

    /// Checks that the given cells contain each digit `1..=n` exactly once.
    fn house_complete(&self, cells: impl Iterator<Item = Position>) -> bool {
        let n = self.size();
        let mut seen = 0u32;
        for pos in cells {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            if !(1..=n).contains(&digit) {
                return false;
            }
            let bit = 1u32 << (digit - 1);
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        seen == (1u32 << n) - 1
    }
}

/// Formats the grid as one line per row, cells within a section adjacent
/// and sections separated by a space. Empty cells print as `_`, digits
/// above 9 as letters (`A` = 10).
impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 && x % usize::from(self.section) == 0 {
                    write!(f, " ")?;
                }
                match *cell {
                    None => write!(f, "_")?,
                    Some(digit @ 1..=9) => write!(f, "{digit}")?,
                    Some(digit) => write!(f, "{}", (b'A' + digit - 10) as char)?,
                }
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The number of cells is not a supported board size.
    #[display("cell count {_0} is not the square of a square board size")]
    BadCellCount(#[error(not(source))] usize),
    /// A cell character is not a digit, letter, or `_`.
    #[display("invalid cell character {_0:?}")]
    BadCell(#[error(not(source))] char),
}

/// Parses the format produced by the `Display` impl: digits, letters for
/// values above 9, `_` for empty cells, all whitespace ignored. The board
/// size is inferred from the cell count.
impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = Vec::new();
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '_' => None,
                '1'..='9' => Some(c as u8 - b'0'),
                'A'..='G' => Some(c as u8 - b'A' + 10),
                _ => return Err(ParseGridError::BadCell(c)),
            };
            digits.push(digit);
        }

        let section = exact_sqrt_usize(digits.len())
            .and_then(exact_sqrt)
            .filter(|section| *section >= 2)
            .ok_or(ParseGridError::BadCellCount(digits.len()))?;
        let n = section * section;

        let mut grid = Self::empty(n);
        for (i, digit) in digits.into_iter().enumerate() {
            grid.set(Position::from_linear(i, n), digit);
        }
        Ok(grid)
    }
}

/// Returns `sqrt(n)` if `n` is a perfect square.
fn exact_sqrt(n: u8) -> Option<u8> {
    // 15 is the largest root whose square fits in a u8.
    (0..=15u8).find(|root| root * root == n)
}

/// Returns `sqrt(n)` as `u8` if `n` is a perfect square small enough
/// to be a board size.
fn exact_sqrt_usize(n: usize) -> Option<u8> {
    (0..=u8::MAX)
        .take_while(|root| usize::from(*root) * usize::from(*root) <= n)
        .find(|root| usize::from(*root) * usize::from(*root) == n)
}
