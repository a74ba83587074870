use crate::{
    board::Board,
    common::{Mark, MoveError},
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Choosing a cell for its side
/// - Reacting to rejected moves and to the opponent's moves
pub trait Player: Send {
    /// Choose a cell index for `side` on the current board. `None` means the
    /// player has nothing to offer (no input left, or a full board).
    fn select_cell(&mut self, rng: &mut SmallRng, board: &Board, side: Mark) -> Option<usize>;

    /// Computer players skip input and are paced by the session delay.
    fn is_automated(&self) -> bool {
        false
    }

    /// Inform the player that its last choice was refused.
    fn handle_move_rejected(&mut self, _index: usize, _error: MoveError) {}

    /// Inform the player of a mark placed by the other side.
    fn handle_opponent_move(&mut self, _index: usize, _side: Mark) {}
}
