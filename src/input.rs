//! Terminal input collaborator for the human side.
//!
//! Owns all parsing and re-prompting. Only coordinates that pass the bounds
//! and duplicate checks ever leave this module, so the resolver can assume
//! valid input.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::common::{Coord, Side};
use crate::game::Game;
use crate::player::GuessSource;

/// Parse a coordinate like `B7`: lettered column, row numbered from 1.
/// Returns `None` for anything malformed, including row 0.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str = chars.as_str();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

/// Format a coordinate the way [`parse_coord`] reads it.
pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

/// Guess source that prompts on the terminal and loops until it gets a
/// well-formed, in-bounds, not-yet-guessed coordinate.
pub struct ConsolePlayer;

impl ConsolePlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessSource for ConsolePlayer {
    fn next_guess(
        &mut self,
        _rng: &mut SmallRng,
        game: &Game,
        side: Side,
    ) -> anyhow::Result<Coord> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("Enter guess (e.g. B7): ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => anyhow::bail!("input closed before a guess was entered"),
            };
            let Some(coord) = parse_coord(&line) else {
                println!("Invalid coordinate, expected a letter and a row number.");
                continue;
            };
            match game.validate_guess(side, coord) {
                Ok(()) => return Ok(coord),
                Err(err) => println!("{err}"),
            }
        }
    }
}
