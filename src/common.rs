//! Common types shared across the engine: sides, coordinates, guess outcomes
//! and error kinds.

use thiserror::Error;

/// Minimum board side length, enough to hold the shortest ship.
pub const MIN_BOARD_SIZE: usize = 3;

/// Maximum board side length. Columns are labeled `A`..`Z`, so the grid is
/// capped at one letter per column.
pub const MAX_BOARD_SIZE: usize = 26;

/// Which participant is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

impl Side {
    /// The side that moves after this one.
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result of a resolved guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess hit a ship segment, carrying the ship's name.
    Hit(String),
    /// Guess hit the last intact segment of the named ship.
    Sunk(String),
    /// Guess missed every ship.
    Miss,
}

impl GuessOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessOutcome::Miss)
    }
}

/// Errors raised while setting up a board and fleet.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Board side length outside [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[error("board size {0} is outside the supported range {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}")]
    InvalidBoardSize(usize),
    /// Ship length of zero or longer than the board side.
    #[error("ship length {length} does not fit on a board of size {board_size}")]
    InvalidShipLength { length: usize, board_size: usize },
    /// Rejection sampling exhausted its retry bound.
    #[error("could not place {ship_count} ships of length {ship_length} within {attempts} attempts")]
    Placement {
        ship_count: usize,
        ship_length: usize,
        attempts: usize,
    },
}

/// Errors raised when validating a candidate guess. Produced by the input
/// filter; the resolver itself never sees coordinates that fail these checks.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Coordinate lies outside the board.
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Coordinate was already guessed by the same side.
    #[error("coordinate ({row}, {col}) was already guessed by this side")]
    Duplicate { row: usize, col: usize },
}
