//! Human players and the seat variant that lets humans and bots share a game.

use crate::bot::RandomBot;
use crate::stone::Stone;

/// A human mover: an arbitrary user payload tied to a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player<U> {
    user: U,
    stone: Stone,
}

impl<U> Player<U> {
    pub fn new(user: U, stone: Stone) -> Self {
        Self { user, stone }
    }

    pub fn user(&self) -> &U {
        &self.user
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }
}

/// One side of a game: a human player or the built-in bot.
///
/// A closed variant rather than a trait object: the board does not care who
/// calls it, and the game layer only needs the color plus the two concrete
/// move paths.
#[derive(Debug, Clone)]
pub enum Seat<U> {
    Human(Player<U>),
    Bot(RandomBot),
}

impl<U> Seat<U> {
    pub fn stone(&self) -> Stone {
        match self {
            Seat::Human(player) => player.stone(),
            Seat::Bot(bot) => bot.stone(),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Seat::Human(_))
    }
}
