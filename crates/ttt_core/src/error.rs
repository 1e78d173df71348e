use thiserror::Error;

use crate::Side;

/// A move that cannot be applied. Reported before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("cell index {0} is outside the board (0-8)")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    /// Session only; the board engine never returns this.
    #[error("the game is over; restart to play again")]
    GameOver,

    /// Session only; the board engine never returns this.
    #[error("it is not {0}'s turn")]
    OutOfTurn(Side),
}
