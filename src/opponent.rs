//! The automated opponent: uniform-random guessing over unvisited cells.

use anyhow::bail;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{Coord, Side};
use crate::game::Game;
use crate::player::GuessSource;

/// Guess source that picks uniformly among the cells its side has not yet
/// tried. No targeting intelligence; repeats are excluded so the opponent
/// never wastes an attempt on an already-resolved cell.
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessSource for RandomOpponent {
    fn next_guess(
        &mut self,
        rng: &mut SmallRng,
        game: &Game,
        side: Side,
    ) -> anyhow::Result<Coord> {
        let size = game.board().size();
        let tried = game.guesses(side);
        let candidates: Vec<Coord> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Coord::new(row, col)))
            .filter(|coord| !tried.contains(coord))
            .collect();
        if candidates.is_empty() {
            bail!("no unvisited cells remain for {side:?}");
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }
}
