//! Common types for tic-tac-toe: marks, cells, and move errors.

use core::fmt;

/// Symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// Always moves first.
    X,
    O,
}

impl Mark {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns `true` when the cell holds `mark`.
    pub fn holds(self, mark: Mark) -> bool {
        self == Cell::Taken(mark)
    }
}

/// Outcome of a game, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    InProgress,
    Win(Mark),
    Draw,
}

/// Reasons a move is rejected. A rejected move never changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Cell index outside 0..=8.
    InvalidIndex,
    /// Target cell already holds a mark.
    CellOccupied,
    /// The requested side may not move in the current phase.
    NotYourTurn,
    /// The game has already finished.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidIndex => write!(f, "Cell index is out of range"),
            MoveError::CellOccupied => write!(f, "Cell is already taken"),
            MoveError::NotYourTurn => write!(f, "It is not this player's turn"),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
