//! A playable Sudoku session.

use derive_more::{Display, Error};
use sudotty_core::{DigitGrid, Grid, Position};
use sudotty_generator::GeneratedPuzzle;

use crate::CellState;

/// A unit step of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// Returns the `(dx, dy)` step vector of this direction.
    #[must_use]
    pub fn step(self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Error returned by game edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The cursor cell is locked; the write was rejected and the grid is
    /// unchanged.
    #[display("the selected cell is locked and cannot be edited")]
    NotEditable,
}

/// A Sudoku game session.
///
/// Owns the working grid, the solution it was generated with, and the
/// cursor. The cell under the cursor is the selected cell; there is
/// always exactly one.
///
/// # Examples
///
/// ```
/// use sudotty_game::Game;
/// use sudotty_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new().generate_with_seed(42).unwrap();
/// let game = Game::new(puzzle);
/// assert!(!game.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: Grid<CellState>,
    solution: DigitGrid,
    cursor: Position,
    auto_lock: bool,
    seed: u64,
}

impl Game {
    /// Creates a game session from a generated puzzle.
    ///
    /// Every clue in the puzzle's problem grid becomes a locked cell;
    /// all other cells start empty and editable. The cursor starts on
    /// the first editable cell in row-major order (top-left corner on a
    /// fully locked board), and auto-lock is enabled.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            solution,
            problem,
            seed,
        } = puzzle;

        let n = solution.size();
        let mut cells = Grid::filled(n, CellState::Empty);
        for pos in Position::all(n) {
            if let Some(clue) = problem.get(pos) {
                *cells.get_mut(pos) = CellState::Locked(clue);
            }
        }
        let cursor = Position::all(n)
            .find(|pos| !cells.get(*pos).is_locked())
            .unwrap_or(Position::new(0, 0));

        Self {
            cells,
            solution,
            cursor,
            auto_lock: true,
            seed,
        }
    }

    /// Returns the side length of the board.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.solution.size()
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        *self.cells.get(pos)
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns `true` if `pos` is the selected cell.
    #[must_use]
    pub fn is_selected(&self, pos: Position) -> bool {
        pos == self.cursor
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the solution grid.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns whether correct guesses are locked automatically.
    #[must_use]
    pub fn auto_lock(&self) -> bool {
        self.auto_lock
    }

    /// Enables or disables auto-locking of correct guesses.
    pub fn set_auto_lock(&mut self, auto_lock: bool) {
        self.auto_lock = auto_lock;
    }

    /// Moves the cursor one step in `direction`, drifting past locked
    /// cells.
    ///
    /// If the stepped-to cell is locked, the step vector is grown by
    /// `(1, 1)` and the move retried, so the search drifts diagonally
    /// away from the original axis until it finds an editable cell or
    /// runs off the board (in which case the cursor stays put). Steps
    /// beyond an edge are clamped to the nearest cell rather than
    /// wrapping.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (dx, dy) = direction.step();
        self.drift_from(dx, dy);
    }

    /// The drift rule behind [`move_cursor`](Self::move_cursor).
    ///
    /// The whole quirk lives here: a straight-line scan along the
    /// original axis would replace the `+= 1` pair below.
    fn drift_from(&mut self, mut dx: i16, mut dy: i16) {
        let n = i16::from(self.size());
        loop {
            let x = i16::from(self.cursor.x) + dx;
            let y = i16::from(self.cursor.y) + dy;
            if self.try_select(x, y) {
                return;
            }
            if x >= n || y >= n {
                return;
            }
            dx += 1;
            dy += 1;
        }
    }

    /// Moves the cursor to `(x, y)`, clamping each coordinate to the
    /// board.
    ///
    /// Returns `false` and leaves the cursor in place if the target cell
    /// is locked.
    pub fn select(&mut self, x: i16, y: i16) -> bool {
        self.try_select(x, y)
    }

    fn try_select(&mut self, x: i16, y: i16) -> bool {
        let pos = Position::new(self.clamp(x), self.clamp(y));
        if self.cell(pos).is_locked() {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Clamps a coordinate to `[0, n)`.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn clamp(&self, value: i16) -> u8 {
        value.clamp(0, i16::from(self.size()) - 1) as u8
    }

    /// Writes `digit` into the selected cell.
    ///
    /// With auto-lock enabled, a digit matching the solution locks the
    /// cell immediately; no further edits are possible there.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEditable`] if the selected cell is
    /// locked; the grid is unchanged.
    pub fn set_value(&mut self, digit: u8) -> Result<(), GameError> {
        let pos = self.cursor;
        if self.cell(pos).is_locked() {
            return Err(GameError::NotEditable);
        }

        let state = if self.auto_lock && self.solution.get(pos) == Some(digit) {
            CellState::Locked(digit)
        } else {
            CellState::Filled(digit)
        };
        *self.cells.get_mut(pos) = state;
        Ok(())
    }

    /// Empties the selected cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEditable`] if the selected cell is
    /// locked.
    pub fn clear_value(&mut self) -> Result<(), GameError> {
        let pos = self.cursor;
        if self.cell(pos).is_locked() {
            return Err(GameError::NotEditable);
        }
        *self.cells.get_mut(pos) = CellState::Empty;
        Ok(())
    }

    /// Checks whether the working grid matches the solution.
    ///
    /// Scans in row-major order and stops at the first mismatch; an
    /// empty cell never matches.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::all(self.size()).all(|pos| self.cell(pos).digit() == self.solution.get(pos))
    }
}
