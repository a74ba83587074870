pub const BOARD_WIDTH: usize = 3;
pub const NUM_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Index of the center cell, preferred by the advisor when nothing is urgent.
pub const CENTER: usize = 4;

/// Winning lines in the order the advisor scans them: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Pause before the AI places its mark, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 600;

/// Consecutive rejected moves a session tolerates from one player before giving up.
pub const MAX_REJECTED_MOVES: usize = 16;
