//! Command words understood by the interactive loop.

/// The command vocabulary of the game loop.
///
/// All matching is done against uppercased input, so the words here are
/// stored uppercased. The set is plain data handed to the loop; the core
/// crates know nothing about it.
#[derive(Debug, Clone)]
pub struct CommandSet {
    /// Move the cursor up one row.
    pub up: String,
    /// Move the cursor down one row.
    pub down: String,
    /// Move the cursor left one column.
    pub left: String,
    /// Move the cursor right one column.
    pub right: String,
    /// Jump to a cell by coordinates.
    pub goto: String,
    /// Check the board against the solution.
    pub solve: String,
    /// Print the command summary.
    pub help: String,
    /// Leave the game.
    pub quit: String,
    /// Toggle auto-locking of correct guesses.
    pub auto_solve: String,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            up: "W".into(),
            down: "S".into(),
            left: "A".into(),
            right: "D".into(),
            goto: "GOTO".into(),
            solve: "SOLVE".into(),
            help: "HELP".into(),
            quit: "QUIT".into(),
            auto_solve: "AUTO_SOLVE".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_words_are_uppercase() {
        let commands = CommandSet::default();
        for word in [
            &commands.up,
            &commands.down,
            &commands.left,
            &commands.right,
            &commands.goto,
            &commands.solve,
            &commands.help,
            &commands.quit,
            &commands.auto_solve,
        ] {
            assert_eq!(word.as_str(), word.to_uppercase());
        }
    }
}
