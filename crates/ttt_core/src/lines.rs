/// Three board indices that win when owned by a single side.
pub type WinLine = [usize; 3];

/// Rows, then columns, then diagonals. Scan order matters: the first
/// matching line is the one reported as winning.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
