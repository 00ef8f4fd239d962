//! Fleet generation by rejection sampling.

use rand::Rng;

use crate::common::{Coord, SetupError, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::ship::{Fleet, Ship};

/// Retry bound per ship before placement gives up with
/// [`SetupError::Placement`]. Vertical-only placement eats column capacity
/// quickly, so dense configurations can genuinely fail.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Generate `ship_count` non-overlapping vertical ships of `ship_length`
/// cells on a `board_size` board, named `Ship1`..`ShipN`.
///
/// Anchors are sampled uniformly over every position where the run fits; a
/// candidate overlapping an already-placed ship is resampled. The random
/// source is injected so games can be made reproducible from a seed.
pub fn generate_fleet<R: Rng>(
    board_size: usize,
    ship_count: usize,
    ship_length: usize,
    rng: &mut R,
) -> Result<Fleet, SetupError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
        return Err(SetupError::InvalidBoardSize(board_size));
    }
    if ship_length == 0 || ship_length > board_size {
        return Err(SetupError::InvalidShipLength {
            length: ship_length,
            board_size,
        });
    }

    let max_row = board_size - ship_length;
    let mut ships: Vec<Ship> = Vec::with_capacity(ship_count);
    for i in 0..ship_count {
        let name = format!("Ship{}", i + 1);
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                log::warn!(
                    "placement of {name} failed after {MAX_PLACEMENT_ATTEMPTS} attempts"
                );
                return Err(SetupError::Placement {
                    ship_count,
                    ship_length,
                    attempts: MAX_PLACEMENT_ATTEMPTS,
                });
            }
            let top = Coord::new(rng.random_range(0..=max_row), rng.random_range(0..board_size));
            let candidate = Ship::vertical(name.clone(), top, ship_length);
            let overlaps = candidate
                .cells()
                .iter()
                .any(|&c| ships.iter().any(|placed| placed.contains(c)));
            if !overlaps {
                log::debug!(
                    "placed {name} at column {} rows {}..={} ({} attempts)",
                    top.col,
                    top.row,
                    top.row + ship_length - 1,
                    attempts
                );
                ships.push(candidate);
                break;
            }
        }
    }
    Ok(Fleet::new(ships))
}
