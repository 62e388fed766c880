//! Working-grid cell states.

/// The state of a single cell in the working grid.
///
/// A locked cell always carries a digit; the enum makes a "locked but
/// empty" cell unrepresentable. Locking happens either at game start
/// (initial clues) or when auto-lock confirms a correct guess, and a
/// locked cell can never be edited again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No digit entered yet.
    Empty,
    /// A player-entered digit, still editable.
    Filled(u8),
    /// A fixed digit: an initial clue or a confirmed correct guess.
    Locked(u8),
}

impl CellState {
    /// Returns the digit held by this cell, if any.
    #[must_use]
    pub fn digit(self) -> Option<u8> {
        match self {
            Self::Empty => None,
            Self::Filled(digit) | Self::Locked(digit) => Some(digit),
        }
    }

    /// Returns `true` if no digit is entered.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the cell cannot be edited.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked(_))
    }
}
