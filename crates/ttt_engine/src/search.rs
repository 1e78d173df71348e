// Exhaustive minimax over the remaining game tree. At 3x3 the whole tree is
// well under a million nodes, so there is no pruning, depth limit or table.
use log::{debug, trace};
use ttt_core::{Board, Side};

use crate::evaluation::score_outcome;

/// Root scores for every legal move of `side`, in ascending index order.
///
/// `side` is the maximizer: +1 means `side` can force a win after that move,
/// -1 means the opponent can, 0 means best play draws.
pub fn score_moves(board: &Board, side: Side) -> Vec<(usize, i32)> {
    // Work on a private copy; every placement below is undone on return.
    let mut scratch = *board;
    let mut scores = Vec::new();

    for index in board.legal_moves() {
        let Ok(mut placed) = scratch.place(index, side) else {
            continue;
        };
        let score = minimax(placed.board_mut(), side.opponent(), side);
        trace!("candidate {} for {} scores {}", index, side, score);
        scores.push((index, score));
    }

    scores
}

/// Highest scoring move for `side`. Ties go to the lowest index, so the
/// choice is deterministic. `None` when the board is full.
pub fn search_best_move(board: &Board, side: Side) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for (index, score) in score_moves(board, side) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    if let Some((index, score)) = best {
        debug!("minimax picked {} for {} (score {})", index, side, score);
    }
    best.map(|(index, _)| index)
}

// Score of `board` with `to_move` about to play, seen from `maximizer`.
fn minimax(board: &mut Board, to_move: Side, maximizer: Side) -> i32 {
    if let Some(score) = score_outcome(board.evaluate(), maximizer) {
        return score;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in board.legal_moves() {
        let Ok(mut placed) = board.place(index, to_move) else {
            continue;
        };
        let score = minimax(placed.board_mut(), to_move.opponent(), maximizer);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}
