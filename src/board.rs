//! Game board state: a square grid of resolved and unresolved cells.
//!
//! The board only records what guessing has revealed. Ship positions live in
//! the [`Fleet`](crate::ship::Fleet); a rendered board therefore never leaks
//! where the unhit ships are.

use crate::common::{Coord, SetupError, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::ship::Fleet;

/// State of a single cell as revealed by guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not yet guessed.
    #[default]
    Unknown,
    /// Guessed and a ship segment was there.
    Hit,
    /// Guessed and empty.
    Miss,
}

/// An N×N grid of [`Cell`]s. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell [`Cell::Unknown`]. The side length must
    /// lie in [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`]; the upper bound keeps
    /// every column addressable by a single letter.
    pub fn new(size: usize) -> Result<Self, SetupError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(SetupError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Unknown; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// State of the cell at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is out of bounds.
    pub fn cell(&self, coord: Coord) -> Cell {
        assert!(self.contains(coord), "coordinate {coord:?} is off the board");
        self.cells[coord.row * self.size + coord.col]
    }

    /// Read-only view of the grid, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Mark the cell at `coord` as a hit.
    ///
    /// # Panics
    /// Panics if the cell is not [`Cell::Unknown`]. Callers are contracted to
    /// consult the guess history first, so a repeat mark is a caller bug and
    /// must not silently overwrite.
    pub fn mark_hit(&mut self, coord: Coord) {
        self.mark(coord, Cell::Hit);
    }

    /// Mark the cell at `coord` as a miss.
    ///
    /// # Panics
    /// Same contract as [`Board::mark_hit`].
    pub fn mark_miss(&mut self, coord: Coord) {
        self.mark(coord, Cell::Miss);
    }

    fn mark(&mut self, coord: Coord, state: Cell) {
        assert!(
            self.cell(coord) == Cell::Unknown,
            "cell {coord:?} was already resolved to {:?}",
            self.cell(coord)
        );
        self.cells[coord.row * self.size + coord.col] = state;
    }

    /// Whether every coordinate of every ship in `fleet` is marked
    /// [`Cell::Hit`].
    pub fn is_fully_hit(&self, fleet: &Fleet) -> bool {
        fleet
            .ships()
            .flat_map(|ship| ship.cells())
            .all(|&coord| self.cell(coord) == Cell::Hit)
    }
}
