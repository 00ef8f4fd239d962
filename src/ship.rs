//! Ships and the fleet that holds them for one game.

use crate::common::Coord;

/// A placed ship: a name plus the ordered run of cells it occupies.
///
/// Placement is vertical only: all cells share a column and rows increase by
/// one. A ship is never removed once placed; whether it is destroyed is
/// inferred from board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    cells: Vec<Coord>,
}

impl Ship {
    /// Build a vertical ship of `length` cells with its topmost cell at `top`.
    pub fn vertical(name: impl Into<String>, top: Coord, length: usize) -> Self {
        let cells = (0..length)
            .map(|i| Coord::new(top.row + i, top.col))
            .collect();
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ship's cells, top to bottom.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the ship occupies `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// The full collection of ships placed for one game. Built once at setup and
/// only consulted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Assemble a fleet from already-placed ships.
    ///
    /// Invariant (upheld by the placement generator and by test fixtures):
    /// ship names are unique and no cell belongs to two ships.
    pub fn new(ships: Vec<Ship>) -> Self {
        debug_assert!(
            ships
                .iter()
                .enumerate()
                .all(|(i, a)| ships[i + 1..]
                    .iter()
                    .all(|b| a.name() != b.name() && !a.cells().iter().any(|c| b.contains(*c)))),
            "fleet ships must have unique names and disjoint cells"
        );
        Self { ships }
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Total number of ship cells, the hit count needed to sink everything.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::len).sum()
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.contains(coord))
    }
}
