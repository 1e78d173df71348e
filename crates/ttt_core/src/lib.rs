// Core tic-tac-toe rules modules
pub mod board;
pub mod error;
pub mod lines;
pub mod outcome;
pub mod side;

// Re-export main types for convenience
pub use board::{apply_move, evaluate, legal_moves, reset, Board, Placement, BOARD_SIZE};
pub use error::IllegalMove;
pub use lines::{WinLine, WIN_LINES};
pub use outcome::GameOutcome;
pub use side::{Cell, Side};
