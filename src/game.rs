//! Turn sequencing over a board: seats, move history, resignation.
//!
//! The board itself is agnostic to who calls it; this layer decides whose
//! turn it is, routes a move request to the human's supplied position or the
//! bot's own selection, and records the history. Komi, handicap, ko
//! detection, and pass-based scoring stay out of scope.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, MoveError, Score};
use crate::bot::NoLegalMoveError;
use crate::moves::Move;
use crate::player::Seat;
use crate::position::Position;
use crate::stone::Stone;

/// The winning side of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Black,
    White,
}

impl From<Stone> for Winner {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Winner::Black,
            Stone::White => Winner::White,
        }
    }
}

/// Whether the game is still accepting moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over { winner: Winner },
}

/// Errors raised by the game layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The black seat must hold black and the white seat white.
    #[error("seat color does not match its side")]
    SeatColorMismatch,
    /// Two bots playing each other is not a game anyone is in.
    #[error("at least one seat must be a human player")]
    NoHumanSeat,
    #[error("it is not {0}'s turn")]
    NotYourTurn(Stone),
    #[error("a human move requires a position")]
    PositionRequired,
    /// A position was supplied for a bot seat; bots pick their own.
    #[error("a bot selects its own position")]
    UnexpectedPosition,
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    NoLegalMove(#[from] NoLegalMoveError),
}

/// A game of Weiqi: a board plus two seats and the turn state.
#[derive(Debug, Clone)]
pub struct WeiqiGame<U> {
    board: Board,
    black: Seat<U>,
    white: Seat<U>,
    turn: Stone,
    history: Vec<Move>,
    status: GameStatus,
}

impl<U> WeiqiGame<U> {
    /// Starts a game on the given board. Black moves first.
    pub fn new(board: Board, black: Seat<U>, white: Seat<U>) -> Result<Self, GameError> {
        if black.stone() != Stone::Black || white.stone() != Stone::White {
            return Err(GameError::SeatColorMismatch);
        }
        if !black.is_human() && !white.is_human() {
            return Err(GameError::NoHumanSeat);
        }
        Ok(Self {
            board,
            black,
            white,
            turn: Stone::Black,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The seat whose turn it is.
    pub fn current_seat(&self) -> &Seat<U> {
        match self.turn {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    /// Current area score of the underlying board.
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Plays one move for `stone`.
    ///
    /// A human seat must supply the position; a bot seat must not, since it
    /// selects its own. On success the move is recorded and the turn
    /// alternates.
    pub fn make_move(&mut self, stone: Stone, position: Option<Position>) -> Result<Move, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if stone != self.turn {
            return Err(GameError::NotYourTurn(stone));
        }

        let seat = match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        };
        let mv = match seat {
            Seat::Human(player) => {
                let position = position.ok_or(GameError::PositionRequired)?;
                Move::new(position, player.stone())
            }
            Seat::Bot(bot) => {
                if position.is_some() {
                    return Err(GameError::UnexpectedPosition);
                }
                bot.select_move(&self.board)?
            }
        };

        self.board.place(mv)?;
        debug!(position = %mv.position(), stone = %mv.stone(), "move played");
        self.history.push(mv);
        self.turn = self.turn.opponent();
        Ok(mv)
    }

    /// Ends the game in the opponent's favor.
    pub fn resign(&mut self, stone: Stone) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        debug!(resigned = %stone, "game over by resignation");
        self.status = GameStatus::Over {
            winner: Winner::from(stone.opponent()),
        };
        Ok(())
    }
}
