use ttt_core::{GameOutcome, Side};

// Terminal scores. No depth discount: a win in one ply and a win in five
// score the same, so the search guarantees optimal play but not the fastest win.
pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

/// Scores a finished game from `side`'s point of view.
/// Returns `None` while the game is still in progress.
pub fn score_outcome(outcome: GameOutcome, side: Side) -> Option<i32> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Draw => Some(DRAW_SCORE),
        GameOutcome::Win(winner) if winner == side => Some(WIN_SCORE),
        GameOutcome::Win(_) => Some(LOSS_SCORE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_relative_to_side() {
        assert_eq!(score_outcome(GameOutcome::Win(Side::O), Side::O), Some(WIN_SCORE));
        assert_eq!(score_outcome(GameOutcome::Win(Side::O), Side::X), Some(LOSS_SCORE));
        assert_eq!(score_outcome(GameOutcome::Draw, Side::X), Some(DRAW_SCORE));
        assert_eq!(score_outcome(GameOutcome::InProgress, Side::X), None);
    }
}
