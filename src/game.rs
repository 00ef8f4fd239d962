//! Core game state: the guess resolver and the turn-sequencing state machine.

use rand::Rng;

use crate::board::{Board, Cell};
use crate::common::{Coord, GuessError, GuessOutcome, SetupError, Side};
use crate::config::GameConfig;
use crate::placement::generate_fleet;
use crate::ship::Fleet;
use crate::summary::ResultSummary;

/// Terminal result of a game, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Label used on persisted result rows.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
        }
    }
}

/// Where the game is in its turn cycle. The player always opens; the phases
/// alternate until a terminal check assigns an outcome, after which the game
/// is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayerGuess,
    AwaitingOpponentGuess,
    Finished(Outcome),
}

/// One game in progress: board, fleet, per-side histories and counters.
///
/// A finished game is never reset; playing again constructs a new `Game`.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    fleet: Fleet,
    player_guesses: Vec<Coord>,
    opponent_guesses: Vec<Coord>,
    player_tries_left: u32,
    opponent_tries_left: u32,
    player_hits: usize,
    opponent_hits: usize,
    phase: Phase,
}

impl Game {
    /// Set up a fresh game: empty board, randomly generated fleet, full
    /// attempt budgets, player to move.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, SetupError> {
        let board = Board::new(config.board_size)?;
        let fleet = generate_fleet(
            config.board_size,
            config.num_ships,
            config.ship_length,
            rng,
        )?;
        Ok(Self::with_fleet(board, fleet, config.max_tries))
    }

    /// Set up a game over an already-placed fleet. Used by tests and by any
    /// caller that wants deterministic placement.
    ///
    /// A zero attempt budget means both sides start exhausted, so the game is
    /// decided at once by hit-count comparison: a tie at zero hits each.
    pub fn with_fleet(board: Board, fleet: Fleet, max_tries: u32) -> Self {
        let phase = if max_tries == 0 {
            Phase::Finished(Outcome::Tie)
        } else {
            Phase::AwaitingPlayerGuess
        };
        Self {
            board,
            fleet,
            player_guesses: Vec::new(),
            opponent_guesses: Vec::new(),
            player_tries_left: max_tries,
            opponent_tries_left: max_tries,
            player_hits: 0,
            opponent_hits: 0,
            phase,
        }
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side whose guess is awaited, or `None` once finished.
    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingPlayerGuess => Some(Side::Player),
            Phase::AwaitingOpponentGuess => Some(Side::Opponent),
            Phase::Finished(_) => None,
        }
    }

    /// The terminal outcome, once assigned.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Ordered guess history for `side`.
    pub fn guesses(&self, side: Side) -> &[Coord] {
        match side {
            Side::Player => &self.player_guesses,
            Side::Opponent => &self.opponent_guesses,
        }
    }

    /// Cumulative hit count for `side`.
    pub fn hits(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_hits,
            Side::Opponent => self.opponent_hits,
        }
    }

    /// Remaining attempt budget for `side`.
    pub fn tries_left(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_tries_left,
            Side::Opponent => self.opponent_tries_left,
        }
    }

    /// Hit count required to sink the whole fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.total_cells()
    }

    /// Check a candidate guess against bounds and `side`'s history.
    ///
    /// Input collaborators must call this (re-prompting on error) before a
    /// coordinate ever reaches [`Game::resolve`].
    pub fn validate_guess(&self, side: Side, coord: Coord) -> Result<(), GuessError> {
        if !self.board.contains(coord) {
            return Err(GuessError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.board.size(),
            });
        }
        if self.guesses(side).contains(&coord) {
            return Err(GuessError::Duplicate {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(())
    }

    /// Resolve a validated guess for `side`: record it, mark the board and
    /// report hit or miss. Never decides termination; that happens in
    /// [`Game::take_turn`] after each resolution.
    ///
    /// Histories are deduplicated per side, so one side may legitimately
    /// re-try a cell the other side already resolved; the cell is only marked
    /// the first time, but the acting side still gets credit for a hit.
    ///
    /// Precondition: `coord` passes [`Game::validate_guess`] for `side`.
    /// Violations are caller bugs, checked by debug assertion.
    pub fn resolve(&mut self, coord: Coord, side: Side) -> GuessOutcome {
        debug_assert_eq!(self.validate_guess(side, coord), Ok(()));
        match side {
            Side::Player => self.player_guesses.push(coord),
            Side::Opponent => self.opponent_guesses.push(coord),
        }
        match self.fleet.ship_at(coord) {
            Some(ship) => {
                let name = ship.name().to_owned();
                if self.board.cell(coord) == Cell::Unknown {
                    self.board.mark_hit(coord);
                }
                match side {
                    Side::Player => self.player_hits += 1,
                    Side::Opponent => self.opponent_hits += 1,
                }
                let sunk = ship
                    .cells()
                    .iter()
                    .all(|&c| self.board.cell(c) == Cell::Hit);
                log::debug!("{side:?} hit {name} at {coord:?} (sunk: {sunk})");
                if sunk {
                    GuessOutcome::Sunk(name)
                } else {
                    GuessOutcome::Hit(name)
                }
            }
            None => {
                if self.board.cell(coord) == Cell::Unknown {
                    self.board.mark_miss(coord);
                }
                log::debug!("{side:?} missed at {coord:?}");
                GuessOutcome::Miss
            }
        }
    }

    /// Play one full turn for the side to move: resolve the guess, evaluate
    /// termination, and either freeze the game or spend one attempt and hand
    /// the turn to the other side.
    ///
    /// Termination policy: immediate win (or loss) the moment a side's hit
    /// count reaches the fleet's total cell count; otherwise, once both
    /// attempt budgets are exhausted, the higher hit count wins and equal
    /// counts tie.
    ///
    /// # Panics
    /// Panics if the game is already finished.
    pub fn take_turn(&mut self, coord: Coord) -> GuessOutcome {
        let side = self
            .side_to_move()
            .expect("take_turn called on a finished game");
        let outcome = self.resolve(coord, side);

        let total = self.fleet.total_cells();
        if self.player_hits >= total {
            self.finish(Outcome::Win);
        } else if self.opponent_hits >= total {
            self.finish(Outcome::Loss);
        } else {
            match side {
                Side::Player => self.player_tries_left -= 1,
                Side::Opponent => self.opponent_tries_left -= 1,
            }
            if self.player_tries_left == 0 && self.opponent_tries_left == 0 {
                self.finish(if self.player_hits > self.opponent_hits {
                    Outcome::Win
                } else if self.opponent_hits > self.player_hits {
                    Outcome::Loss
                } else {
                    Outcome::Tie
                });
            } else {
                self.phase = match side {
                    Side::Player => Phase::AwaitingOpponentGuess,
                    Side::Opponent => Phase::AwaitingPlayerGuess,
                };
            }
        }
        outcome
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!(
            "game over: {} (player {} hits, opponent {} hits)",
            outcome.label(),
            self.player_hits,
            self.opponent_hits
        );
        self.phase = Phase::Finished(outcome);
    }

    /// Assemble the immutable end-of-game record for the persistence sink.
    /// Returns `None` while the game is still in progress.
    pub fn summary(&self, session: &str, player_name: &str) -> Option<ResultSummary> {
        self.outcome().map(|outcome| {
            ResultSummary::new(
                session,
                player_name,
                self.player_hits,
                self.opponent_hits,
                outcome,
            )
        })
    }
}
