use ttt_core::{Board, Cell, Side, WinLine, WIN_LINES};

/// The empty cell that completes a line for `side`, scanning lines in their
/// fixed order. A line qualifies when `side` holds two of its cells and the
/// third is empty.
pub fn winning_cell(board: &Board, side: Side) -> Option<usize> {
    WIN_LINES
        .iter()
        .find_map(|line| completing_cell(board, side, line))
}

fn completing_cell(board: &Board, side: Side, line: &WinLine) -> Option<usize> {
    let target = side.to_cell();
    let mut owned = 0;
    let mut empty = None;

    for &index in line {
        match board.cell(index)? {
            Cell::Empty if empty.is_none() => empty = Some(index),
            Cell::Empty => return None,
            cell if cell == target => owned += 1,
            _ => return None,
        }
    }

    if owned == 2 {
        empty
    } else {
        None
    }
}
