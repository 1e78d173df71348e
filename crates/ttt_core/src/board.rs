use std::fmt;
use std::ops::Deref;

use log::trace;

use crate::{Cell, GameOutcome, IllegalMove, Side, WinLine, WIN_LINES};

/// Number of cells on the fixed 3x3 board.
pub const BOARD_SIZE: usize = 9;

/// The 9 cells of a game, indexed 0-8 in row-major order.
///
/// `Board` is `Copy`, so search code can hand out snapshots instead of
/// sharing one mutable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Places `side` on `index`. The board is left untouched on error.
    ///
    /// Turn order and game end are not checked here; see [`Board::evaluate`].
    pub fn apply_move(&mut self, index: usize, side: Side) -> Result<(), IllegalMove> {
        let cell = self.cells.get_mut(index).ok_or(IllegalMove::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(IllegalMove::Occupied(index));
        }

        *cell = side.to_cell();
        trace!("{} placed at {}", side, index);
        Ok(())
    }

    /// Hypothetically places `side` on `index`; the cell is emptied again
    /// when the returned guard is dropped.
    pub fn place(&mut self, index: usize, side: Side) -> Result<Placement<'_>, IllegalMove> {
        let cell = self.cells.get_mut(index).ok_or(IllegalMove::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(IllegalMove::Occupied(index));
        }

        *cell = side.to_cell();
        Ok(Placement { board: self, index })
    }

    /// Empty cell indices in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// First line, in [`WIN_LINES`] order, fully owned by one side.
    pub fn winning_line(&self) -> Option<WinLine> {
        WIN_LINES.iter().copied().find(|&[a, b, c]| {
            let first = self.cells[a];
            !first.is_empty() && first == self.cells[b] && first == self.cells[c]
        })
    }

    pub fn evaluate(&self) -> GameOutcome {
        if let Some(side) = self.winning_line().and_then(|[a, _, _]| self.cells[a].side()) {
            return GameOutcome::Win(side);
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}{}{}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

/// A temporary mark on a borrowed board, reverted on drop.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Placement<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Mutable access to the board for nested placements.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}

/// Fresh empty board for a new game.
pub fn reset() -> Board {
    Board::new()
}

/// Value form of [`Board::apply_move`]: consumes a snapshot and returns the
/// updated one.
pub fn apply_move(mut board: Board, index: usize, side: Side) -> Result<Board, IllegalMove> {
    board.apply_move(index, side)?;
    Ok(board)
}

/// Ascending empty cell indices of `board`.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board.legal_moves()
}

pub fn evaluate(board: &Board) -> GameOutcome {
    board.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, Side)]) -> Board {
        let mut board = Board::new();
        for &(index, side) in moves {
            board.apply_move(index, side).unwrap();
        }
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), (0..BOARD_SIZE).collect::<Vec<_>>());
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.evaluate(), GameOutcome::InProgress);
    }

    #[test]
    fn apply_move_fills_cell() {
        let mut board = Board::new();
        board.apply_move(4, Side::X).unwrap();
        assert_eq!(board.cell(4), Some(Cell::X));
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn apply_move_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, Side::X), Err(IllegalMove::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn apply_move_rejects_occupied() {
        let mut board = play(&[(0, Side::X)]);
        let before = board;
        assert_eq!(board.apply_move(0, Side::O), Err(IllegalMove::Occupied(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn column_win() {
        let board = play(&[(1, Side::O), (4, Side::O), (7, Side::O)]);
        assert_eq!(board.evaluate(), GameOutcome::Win(Side::O));
        assert_eq!(board.winning_line(), Some([1, 4, 7]));
    }

    #[test]
    fn first_line_in_order_is_reported() {
        // X X X
        // X O O
        // X O O
        let board = Board::from_cells([
            Cell::X, Cell::X, Cell::X,
            Cell::X, Cell::O, Cell::O,
            Cell::X, Cell::O, Cell::O,
        ]);
        assert_eq!(board.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn reset_clears_board() {
        let mut board = play(&[(0, Side::X), (8, Side::O)]);
        board.reset();
        assert_eq!(board, reset());
    }

    #[test]
    fn value_apply_move_leaves_original() {
        let board = Board::new();
        let next = apply_move(board, 3, Side::X).unwrap();
        assert_eq!(board.cell(3), Some(Cell::Empty));
        assert_eq!(next.cell(3), Some(Cell::X));
    }

    #[test]
    fn placement_reverts_on_drop() {
        let mut board = play(&[(0, Side::X)]);
        {
            let mut placed = board.place(4, Side::O).unwrap();
            assert_eq!(placed.cell(4), Some(Cell::O));
            assert_eq!(placed.index(), 4);
            let nested = placed.board_mut().place(8, Side::X).unwrap();
            assert_eq!(nested.index(), 8);
            assert_eq!(nested.occupied_count(), 3);
        }
        assert_eq!(board, play(&[(0, Side::X)]));
        assert!(board.place(0, Side::O).is_err());
    }

    #[test]
    fn display_renders_rows() {
        let board = play(&[(0, Side::X), (4, Side::O)]);
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }
}
