//! Backtracking puzzle generation driven by a seeded random stream.

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sudotty_core::{DigitGrid, Position};

use crate::constraint::fits_prefix;

/// A generated puzzle: the full solution, the problem grid holding only
/// the revealed clues, and the seed that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully solved grid.
    pub solution: DigitGrid,
    /// The playable grid; `Some` cells are the initial clues.
    pub problem: DigitGrid,
    /// The seed this puzzle was generated from.
    pub seed: u64,
}

/// Error returned when generation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// Every candidate pool was emptied without completing the grid.
    ///
    /// Unreachable in practice on a standard 9×9 board, where full
    /// backtracking always finds a solution, but the search reports it
    /// rather than retrying forever on boards where it cannot.
    #[display("candidate pools exhausted before the grid was filled")]
    Exhausted,
}

/// Seeded Sudoku puzzle generator.
///
/// Fills the board in row-major order with a backtracking search whose
/// candidate ordering comes from a seeded PCG stream, then draws the clue
/// positions from the *same* stream, so one `u64` seed determines the
/// whole puzzle.
///
/// # Examples
///
/// ```
/// use sudotty_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new().with_reveal_count(30);
/// let puzzle = generator.generate().unwrap();
/// assert!(puzzle.solution.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    board_size: u8,
    reveal_count: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Default number of revealed clues.
    pub const DEFAULT_REVEAL_COUNT: usize = 20;

    /// Creates a generator for a standard 9×9 board with
    /// [`DEFAULT_REVEAL_COUNT`](Self::DEFAULT_REVEAL_COUNT) clues.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board_size: 9,
            reveal_count: Self::DEFAULT_REVEAL_COUNT,
        }
    }

    /// Sets the board size.
    ///
    /// The size must be the square of an integer of at least 2 (4, 9,
    /// 16, ...); generation panics otherwise.
    #[must_use]
    pub fn with_board_size(mut self, n: u8) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the number of clue draws.
    ///
    /// Clue positions are drawn **with replacement**: the same position
    /// may be drawn more than once, so the number of distinct clues can
    /// end up below `count`. This quirk is kept deliberately so that a
    /// seed keeps reproducing the exact same board.
    #[must_use]
    pub fn with_reveal_count(mut self, count: usize) -> Self {
        self.reveal_count = count;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed ends up in the returned puzzle, so a game can be replayed
    /// later with [`generate_with_seed`](Self::generate_with_seed).
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Exhausted`] if the backtracking search
    /// runs out of candidates.
    ///
    /// # Panics
    ///
    /// Panics if the configured board size is not the square of an
    /// integer of at least 2.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(rand::rng().random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// Deterministic: the same seed, board size, and reveal count always
    /// produce an identical puzzle, duplicate clue draws included.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Exhausted`] if the backtracking search
    /// runs out of candidates.
    ///
    /// # Panics
    ///
    /// Panics if the configured board size is not the square of an
    /// integer of at least 2.
    pub fn generate_with_seed(&self, seed: u64) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let solution = self.fill(&mut rng)?;
        let problem = self.reveal(&solution, &mut rng);
        Ok(GeneratedPuzzle {
            solution,
            problem,
            seed,
        })
    }

    /// Fills an empty grid in row-major order by backtracking.
    ///
    /// The search keeps one shrinking candidate pool per depth. A draw
    /// removes a uniformly random value from the pool of the current
    /// depth; once a value has been tried at a depth it is never retried
    /// there. Backtracking pops the pool without erasing the cell — the
    /// prefix discipline of [`fits_prefix`] guarantees stale values are
    /// never read, and the terminal success path overwrites them all.
    fn fill(&self, rng: &mut Pcg64Mcg) -> Result<DigitGrid, GenerateError> {
        let n = self.board_size;
        let total = usize::from(n) * usize::from(n);
        let full_pool = || (1..=n).collect::<Vec<u8>>();

        let mut grid = DigitGrid::empty(n);
        let mut pools = vec![full_pool()];
        loop {
            let depth = pools.len() - 1;
            if depth == total {
                return Ok(grid);
            }

            if pools[depth].is_empty() {
                // No candidate works here; retry the previous depth with
                // its remaining candidates.
                pools.pop();
                if pools.is_empty() {
                    return Err(GenerateError::Exhausted);
                }
                continue;
            }

            let pool = &mut pools[depth];
            let digit = pool.remove(rng.random_range(0..pool.len()));
            let pos = Position::from_linear(depth, n);
            if fits_prefix(&grid, pos, digit) {
                grid.set(pos, Some(digit));
                pools.push(full_pool());
            }
        }
    }

    /// Draws the clue positions from the continued random stream.
    ///
    /// Positions are drawn with replacement; see
    /// [`with_reveal_count`](Self::with_reveal_count).
    fn reveal(&self, solution: &DigitGrid, rng: &mut Pcg64Mcg) -> DigitGrid {
        let n = solution.size();
        let total = usize::from(n) * usize::from(n);

        let mut problem = DigitGrid::empty(n);
        for _ in 0..self.reveal_count {
            let pos = Position::from_linear(rng.random_range(0..total), n);
            problem.set(pos, solution.get(pos));
        }
        problem
    }
}
