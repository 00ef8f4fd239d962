//! Terminal rendering of the revealed board.
//!
//! Works only from the read-only cell view, so ship positions are never
//! printed.

use crate::board::{Board, Cell};

/// Render the board as a labeled grid: lettered columns, rows numbered
/// from 1, `X` for hits, `o` for misses, `.` for unguessed cells.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..board.size() {
        let ch = (b'A' + c as u8) as char;
        out.push(' ');
        out.push(ch);
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        out.push_str(&format!("{:2} ", r + 1));
        for cell in row {
            let ch = match cell {
                Cell::Hit => 'X',
                Cell::Miss => 'o',
                Cell::Unknown => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Print the rendered board to stdout.
pub fn print_board(board: &Board) {
    print!("{}", render(board));
}
