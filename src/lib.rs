//! Tic-tac-toe rules, computer opponents, and the session that ties them
//! together for a front end.
//!
//! The board engine lives in [`ttt_core`], move selection in [`ttt_engine`].
//! A front end normally only needs [`GameSession`].

pub mod session;

pub use session::{
    GameMode, GameSession, SessionConfig, TurnPrompt, COMPUTER_SIDE, DEFAULT_COMPUTER_DELAY,
    HUMAN_SIDE,
};
pub use ttt_core::{
    apply_move, evaluate, legal_moves, reset, Board, Cell, GameOutcome, IllegalMove, Side,
    WinLine, BOARD_SIZE, WIN_LINES,
};
pub use ttt_engine::{select_move, select_move_with_rng, Difficulty, MoveSelector};
