use crate::{ai, board::Board, common::Mark};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player backed by the heuristic advisor.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_cell(&mut self, rng: &mut SmallRng, board: &Board, side: Mark) -> Option<usize> {
        ai::select_move(board, side, side.opponent(), rng)
    }

    fn is_automated(&self) -> bool {
        true
    }
}
