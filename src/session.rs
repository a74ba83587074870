#![cfg(feature = "std")]

extern crate alloc;

use alloc::boxed::Box;
use log::{debug, info};
use rand::rngs::SmallRng;
use tokio::task::yield_now;
use tokio::time::{sleep, Duration};

use crate::{
    common::{GameResult, Mark},
    config::MAX_REJECTED_MOVES,
    game::{GameEngine, GamePhase, Mode},
    player::Player,
    player_cli::print_player_view,
    ui,
};

/// Drives games from the first move to game over: asks the right player for a
/// move, feeds it to the engine, and paces computer moves.
pub struct Session {
    engine: GameEngine,
    x_player: Box<dyn Player>,
    o_player: Box<dyn Player>,
    ai_delay: Duration,
    display: bool,
    moves: usize,
}

impl Session {
    /// `o_player` is only consulted in [`Mode::HumanVsHuman`]; in
    /// [`Mode::HumanVsAi`] the engine's advisor plays O.
    pub fn new(
        engine: GameEngine,
        x_player: Box<dyn Player>,
        o_player: Box<dyn Player>,
    ) -> Self {
        Self {
            engine,
            x_player,
            o_player,
            ai_delay: Duration::ZERO,
            display: false,
            moves: 0,
        }
    }

    /// Pause before every computer move.
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    /// Print the board and status text as the game progresses.
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Number of marks placed in the current game.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Start over with the current mode.
    pub fn restart(&mut self) {
        self.engine.restart();
        self.moves = 0;
    }

    /// Start over with a different mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.engine.set_mode(mode);
        self.moves = 0;
    }

    fn show(&self) {
        if self.display {
            print_player_view(self.engine.board(), &ui::status_line(&self.engine));
        }
    }

    fn player_mut(&mut self, side: Mark) -> &mut Box<dyn Player> {
        match side {
            Mark::X => &mut self.x_player,
            Mark::O => &mut self.o_player,
        }
    }

    /// Tell the other side about a placed mark. The engine's own AI side has
    /// no player to inform.
    fn notify_opponent(&mut self, index: usize, side: Mark) {
        let opponent = side.opponent();
        if self.engine.ai_side() != Some(opponent) {
            self.player_mut(opponent).handle_opponent_move(index, side);
        }
    }

    /// Play the current game until it ends and return the result.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameResult> {
        let mut rejected = 0usize;
        loop {
            self.show();
            match self.engine.phase() {
                GamePhase::GameOver(result) => {
                    info!("finished after {} moves: {:?}", self.moves, result);
                    return Ok(result);
                }
                GamePhase::AwaitingAiMove => {
                    sleep(self.ai_delay).await;
                    let side = self.engine.turn();
                    let index = self
                        .engine
                        .play_ai(rng)
                        .map_err(|e| anyhow::anyhow!(e))?;
                    self.moves += 1;
                    debug!("AI ({}) chose cell {}", side, index);
                    self.notify_opponent(index, side);
                }
                GamePhase::AwaitingPlayerMove => {
                    let side = self.engine.turn();
                    let board = *self.engine.board();
                    if self.player_mut(side).is_automated() {
                        sleep(self.ai_delay).await;
                    }
                    let index = self
                        .player_mut(side)
                        .select_cell(rng, &board, side)
                        .ok_or_else(|| anyhow::anyhow!("Player {} has no move to offer", side))?;
                    match self.engine.play(index) {
                        Ok(_) => {
                            rejected = 0;
                            self.moves += 1;
                            self.notify_opponent(index, side);
                        }
                        Err(e) => {
                            debug!("rejected move {} for {}: {}", index, side, e);
                            self.player_mut(side).handle_move_rejected(index, e);
                            rejected += 1;
                            if rejected >= MAX_REJECTED_MOVES {
                                return Err(anyhow::anyhow!(
                                    "Player {} offered {} rejected moves in a row (last: {})",
                                    side,
                                    rejected,
                                    e
                                ));
                            }
                            yield_now().await;
                        }
                    }
                }
            }
        }
    }
}
