use std::fmt;

use crate::Side;

/// State of a game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Win(Side),
    Draw,
}

impl GameOutcome {
    /// `Win` and `Draw` end the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Win(side) => Some(side),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In Progress"),
            GameOutcome::Win(side) => write!(f, "Player {} Wins!", side),
            GameOutcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}
