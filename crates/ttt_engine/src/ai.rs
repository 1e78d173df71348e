use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use ttt_core::{Board, Side};

use crate::heuristic::winning_cell;
use crate::search::search_best_move;

/// Strength of the computer opponent. Fixed for the length of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal move.
    #[default]
    Easy,
    /// Take a win, else block a loss, else random.
    Medium,
    /// Full minimax. Never loses.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Picks a move for `side`. Returns `None` only when the board is full.
///
/// Easy and Medium draw from the thread-local RNG; Hard is deterministic.
pub fn select_move(board: &Board, difficulty: Difficulty, side: Side) -> Option<usize> {
    select_move_with_rng(board, difficulty, side, &mut rand::thread_rng())
}

/// [`select_move`] with a caller-supplied random source.
pub fn select_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    side: Side,
    rng: &mut R,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => heuristic_move(board, side, rng),
        Difficulty::Hard => search_best_move(board, side),
    };
    debug!("{} move for {}: {:?}", difficulty, side, choice);
    choice
}

/// Uniform choice among the empty cells.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.legal_moves().choose(rng).copied()
}

/// Complete our own line if possible, otherwise block the opponent's,
/// otherwise fall back to a random move.
pub fn heuristic_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<usize> {
    winning_cell(board, side)
        .or_else(|| winning_cell(board, side.opponent()))
        .or_else(|| random_move(board, rng))
}

/// A configured computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    difficulty: Difficulty,
    side: Side,
}

impl MoveSelector {
    pub fn new(difficulty: Difficulty, side: Side) -> Self {
        MoveSelector { difficulty, side }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn choose(&self, board: &Board) -> Option<usize> {
        select_move(board, self.difficulty, self.side)
    }

    pub fn choose_with_rng<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<usize> {
        select_move_with_rng(board, self.difficulty, self.side, rng)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        // The computer always plays O against a human X.
        MoveSelector {
            difficulty: Difficulty::default(),
            side: Side::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn with(moves: &[(usize, Side)]) -> Board {
        let mut board = Board::new();
        for &(index, side) in moves {
            board.apply_move(index, side).unwrap();
        }
        board
    }

    #[test]
    fn parses_difficulty_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Hard.to_string().parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn easy_only_picks_empty_cells() {
        let board = with(&[(0, Side::X), (4, Side::O), (8, Side::X)]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let index = select_move_with_rng(&board, Difficulty::Easy, Side::O, &mut rng).unwrap();
            assert!(board.legal_moves().contains(&index));
        }
    }

    #[test]
    fn easy_reaches_every_empty_cell() {
        let board = with(&[(4, Side::X)]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut hit = [false; 9];
        for _ in 0..500 {
            if let Some(index) = random_move(&board, &mut rng) {
                hit[index] = true;
            }
        }
        assert!(!hit[4]);
        assert_eq!(hit.iter().filter(|&&h| h).count(), 8);
    }

    #[test]
    fn medium_blocks_when_no_win() {
        let board = with(&[(0, Side::X), (4, Side::O), (1, Side::X)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_move_with_rng(&board, Difficulty::Medium, Side::O, &mut rng), Some(2));
    }

    #[test]
    fn full_board_gives_none_for_every_difficulty() {
        let board = with(&[
            (0, Side::X),
            (1, Side::O),
            (2, Side::X),
            (4, Side::O),
            (7, Side::X),
            (6, Side::O),
            (5, Side::X),
            (3, Side::O),
            (8, Side::X),
        ]);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(select_move(&board, difficulty, Side::O), None);
        }
    }

    #[test]
    fn default_selector_is_easy_o() {
        let selector = MoveSelector::default();
        assert_eq!(selector.difficulty(), Difficulty::Easy);
        assert_eq!(selector.side(), Side::O);
    }
}
