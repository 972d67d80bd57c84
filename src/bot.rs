//! A uniformly random legal-move bot.
//!
//! The bot owns its RNG so games with several bots stay independent; tests
//! seed it for reproducible move sequences.

use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::constants::BOT_MAX_ATTEMPTS;
use crate::moves::Move;
use crate::position::Position;
use crate::stone::Stone;

/// The bot ran out of candidate moves: the board has no empty intersection,
/// or every sampled placement was illegal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no legal move found for {0}")]
pub struct NoLegalMoveError(pub Stone);

/// Picks uniformly random empty intersections and legality-checks them
/// against a disposable copy of the board.
#[derive(Debug, Clone)]
pub struct RandomBot {
    stone: Stone,
    rng: fastrand::Rng,
}

impl RandomBot {
    pub fn new(stone: Stone) -> Self {
        Self {
            stone,
            rng: fastrand::Rng::new(),
        }
    }

    /// A bot with a fixed RNG seed, for reproducible games.
    pub fn with_seed(stone: Stone, seed: u64) -> Self {
        Self {
            stone,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Selects a legal move for the current board.
    ///
    /// Samples random empty points and probes each candidate with the
    /// copy-then-attempt pattern; the live board is never touched. Gives up
    /// after [`BOT_MAX_ATTEMPTS`] rejected placements.
    pub fn select_move(&mut self, board: &Board) -> Result<Move, NoLegalMoveError> {
        if board.figures().values().all(|stone| stone.is_some()) {
            return Err(NoLegalMoveError(self.stone));
        }

        let mut failures = 0;
        loop {
            let position = Position::new(
                self.rng.usize(0..board.size()),
                self.rng.usize(0..board.size()),
            );
            if board.stone_at(position).is_some() {
                continue;
            }
            let mv = Move::new(position, self.stone);
            let mut probe = board.clone();
            match probe.place(mv) {
                Ok(()) => return Ok(mv),
                Err(error) => {
                    failures += 1;
                    debug!(%error, failures, "bot rejected a candidate move");
                    if failures >= BOT_MAX_ATTEMPTS {
                        return Err(NoLegalMoveError(self.stone));
                    }
                }
            }
        }
    }
}
