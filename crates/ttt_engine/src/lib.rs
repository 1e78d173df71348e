pub mod ai;
pub mod evaluation;
pub mod heuristic;
pub mod search;

pub use ai::{select_move, select_move_with_rng, Difficulty, MoveSelector, ParseDifficultyError};
pub use evaluation::score_outcome;
pub use search::{score_moves, search_best_move};
