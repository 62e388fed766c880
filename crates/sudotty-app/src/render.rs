//! Plain-text board rendering.

use std::fmt::Write as _;

use sudotty_core::Position;
use sudotty_game::{CellState, Game};

/// Renders the board as a multi-line string.
///
/// Column and row indices frame the grid, horizontal rules and `|` bars
/// separate the sections, `<` marks the selected cell, and `F` marks a
/// locked (final) cell.
#[must_use]
pub fn render_board(game: &Game) -> String {
    let n = game.size();
    let section = game.solution().section_size();
    let mut out = String::new();

    // Column header.
    out.push_str("  ");
    for x in 0..n {
        if x > 0 && x % section == 0 {
            out.push(' ');
        }
        let _ = write!(out, " {x} ");
    }
    out.push('\n');

    for y in 0..n {
        if y > 0 && y % section == 0 {
            out.push_str(" |");
            for _ in 0..n {
                out.push_str("----");
            }
            for _ in 1..section {
                out.push('-');
            }
            out.push_str("|\n");
        }

        let _ = write!(out, "{y}|");
        for x in 0..n {
            if x > 0 && x % section == 0 {
                out.push('|');
            }
            let pos = Position::new(x, y);
            out.push(' ');
            out.push(cell_label(game.cell(pos)));
            out.push(if game.is_selected(pos) { '<' } else { ' ' });
            out.push(if game.cell(pos).is_locked() { 'F' } else { ' ' });
        }
        out.push_str("|\n");
    }

    out
}

/// The single-character label of a cell: its digit, or a blank.
fn cell_label(cell: CellState) -> char {
    match cell.digit() {
        None => ' ',
        Some(digit @ 1..=9) => (b'0' + digit) as char,
        Some(digit) => (b'A' + digit - 10) as char,
    }
}
