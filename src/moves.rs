//! Move values passed from the turn layer to the board.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::stone::Stone;

/// A placement request: which intersection to occupy and with which color.
///
/// A move is a pure value; it references board coordinates but owns no board
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    stone: Stone,
}

impl Move {
    pub fn new(position: Position, stone: Stone) -> Self {
        Self { position, stone }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }
}
