use crate::{
    ai,
    board::Board,
    common::{GameResult, Mark, MoveError},
};
use log::{debug, info};
use rand::Rng;

/// Who sits opposite the human for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    HumanVsHuman,
    /// The human plays X, the AI plays O.
    HumanVsAi,
}

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    AwaitingPlayerMove,
    AwaitingAiMove,
    GameOver(GameResult),
}

/// Core game logic: owns the board and the side to move, and advances the
/// turn state machine after every placement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    mode: Mode,
    phase: GamePhase,
}

impl GameEngine {
    /// Side played by the advisor in [`Mode::HumanVsAi`].
    pub const AI_SIDE: Mark = Mark::O;

    /// Start a new game in `mode` with X to move.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            mode,
            phase: GamePhase::AwaitingPlayerMove,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that places next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The side the AI plays, if any.
    pub fn ai_side(&self) -> Option<Mark> {
        match self.mode {
            Mode::HumanVsAi => Some(Self::AI_SIDE),
            Mode::HumanVsHuman => None,
        }
    }

    /// Current outcome, recomputed from the board.
    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Apply a human move for the side to move.
    pub fn play(&mut self, index: usize) -> Result<GamePhase, MoveError> {
        match self.phase {
            GamePhase::GameOver(_) => Err(MoveError::GameOver),
            GamePhase::AwaitingAiMove => Err(MoveError::NotYourTurn),
            GamePhase::AwaitingPlayerMove => self.apply(index),
        }
    }

    /// Let the advisor choose and apply a move for the AI side.
    pub fn play_ai<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, MoveError> {
        match self.phase {
            GamePhase::GameOver(_) => return Err(MoveError::GameOver),
            GamePhase::AwaitingPlayerMove => return Err(MoveError::NotYourTurn),
            GamePhase::AwaitingAiMove => {}
        }
        // The phase only reaches AwaitingAiMove on a board with an empty cell.
        let index = ai::select_move(&self.board, self.turn, self.turn.opponent(), rng)
            .ok_or(MoveError::GameOver)?;
        self.apply(index)?;
        Ok(index)
    }

    /// Throw away the board and start over with X to move, keeping the mode.
    pub fn restart(&mut self) {
        self.board = Board::reset();
        self.turn = Mark::X;
        self.phase = GamePhase::AwaitingPlayerMove;
        info!("new game started ({:?})", self.mode);
    }

    /// Switching modes always starts a fresh game.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.restart();
    }

    fn apply(&mut self, index: usize) -> Result<GamePhase, MoveError> {
        let mark = self.turn;
        self.board.place(index, mark)?;
        debug!("{} placed at {}", mark, index);

        self.phase = if self.board.check_win(mark) {
            GamePhase::GameOver(GameResult::Win(mark))
        } else if self.board.is_draw() {
            GamePhase::GameOver(GameResult::Draw)
        } else {
            self.turn = mark.opponent();
            if self.ai_side() == Some(self.turn) {
                GamePhase::AwaitingAiMove
            } else {
                GamePhase::AwaitingPlayerMove
            }
        };
        if let GamePhase::GameOver(result) = self.phase {
            info!("game over: {:?}", result);
        }
        Ok(self.phase)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
