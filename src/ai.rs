// Heuristic move selection for the computer side.
// Greedy and local: no lookahead, so forks are never seen coming.

use crate::{
    board::Board,
    common::{Cell, Mark},
    config::{CENTER, NUM_CELLS, WINNING_LINES},
};
use rand::Rng;

/// Find the first winning line holding exactly two `mark` cells and one empty
/// cell, and return the index of that empty cell.
pub fn find_line_completion(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    for line in WINNING_LINES.iter() {
        let mut owned = 0usize;
        let mut empty = None;
        let mut n_empty = 0usize;
        for &i in line.iter() {
            match cells[i] {
                Cell::Taken(m) if m == mark => owned += 1,
                Cell::Empty => {
                    n_empty += 1;
                    if empty.is_none() {
                        empty = Some(i);
                    }
                }
                Cell::Taken(_) => {}
            }
        }
        if owned == 2 && n_empty == 1 {
            return empty;
        }
    }
    None
}

/// Pick a cell for `my_side`. Rules are tried in order: complete our own
/// line, block the opponent's line, take the center, otherwise any empty cell
/// chosen uniformly. Returns `None` only on a full board.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    my_side: Mark,
    opponent_side: Mark,
    rng: &mut R,
) -> Option<usize> {
    if let Some(idx) = find_line_completion(board, my_side) {
        return Some(idx);
    }
    if let Some(idx) = find_line_completion(board, opponent_side) {
        return Some(idx);
    }
    if board.cells()[CENTER].is_empty() {
        return Some(CENTER);
    }
    random_empty_cell(board, rng)
}

fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let mut open = [0usize; NUM_CELLS];
    let mut n = 0;
    for idx in board.empty_cells() {
        open[n] = idx;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(open[rng.random_range(0..n)])
}
