//! Interface implemented by the two guess collaborators.

use rand::rngs::SmallRng;

use crate::common::{Coord, Side};
use crate::game::Game;

/// A source of validated guesses for one side.
///
/// Implementations must return a coordinate that passes
/// [`Game::validate_guess`] for `side`; any re-prompting or resampling needed
/// to get there happens inside the source, never in the engine.
pub trait GuessSource {
    fn next_guess(&mut self, rng: &mut SmallRng, game: &Game, side: Side)
        -> anyhow::Result<Coord>;
}
