//! Game board: nine cells in row-major order plus win/draw detection.

use crate::common::{Cell, GameResult, Mark, MoveError};
use crate::config::{BOARD_WIDTH, NUM_CELLS, WINNING_LINES};
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Fresh empty board, used when a game restarts.
    pub fn reset() -> Self {
        Self::new()
    }

    /// Contents of the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.holds(mark)).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Put `mark` on the cell at `index`. Occupied or out-of-range cells are
    /// rejected and the board is left untouched.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let slot = self.cells.get_mut(index).ok_or(MoveError::InvalidIndex)?;
        if !slot.is_empty() {
            return Err(MoveError::CellOccupied);
        }
        *slot = Cell::Taken(mark);
        Ok(())
    }

    /// Returns `true` when some winning line is entirely `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i].holds(mark)))
    }

    /// Returns `true` when the board is full and nobody has won.
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.check_win(Mark::X) && !self.check_win(Mark::O)
    }

    /// Evaluate the board. Wins are checked before the draw condition since a
    /// full board may still contain a winning line.
    pub fn result(&self) -> GameResult {
        if self.check_win(Mark::X) {
            GameResult::Win(Mark::X)
        } else if self.check_win(Mark::O) {
            GameResult::Win(Mark::O)
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }
}

/// Grid view of the board. Empty cells show the 1-based number a player
/// types to claim them.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "───┼───┼───")?;
            }
            for col in 0..BOARD_WIDTH {
                let idx = row * BOARD_WIDTH + col;
                if col > 0 {
                    write!(f, "│")?;
                }
                match self.cells[idx] {
                    Cell::Empty => write!(f, " {} ", idx + 1)?,
                    Cell::Taken(mark) => write!(f, " {} ", mark)?,
                }
            }
        }
        Ok(())
    }
}
