#![cfg(feature = "std")]

//! Text rendering of the board and the status messages shown to players.

use std::string::String;

use crate::{
    board::Board,
    common::GameResult,
    game::{GameEngine, GamePhase, Mode},
};

pub fn print_board(board: &Board) {
    std::println!();
    std::println!("{}", board);
}

/// Status line for a game in progress, or the end message once it is over.
pub fn status_line(engine: &GameEngine) -> String {
    match engine.phase() {
        GamePhase::AwaitingAiMove => String::from("AI is thinking..."),
        GamePhase::AwaitingPlayerMove => std::format!("Player {}'s turn", engine.turn()),
        GamePhase::GameOver(result) => end_message(result, engine.mode()),
    }
}

/// Message announcing how a finished game ended.
pub fn end_message(result: GameResult, mode: Mode) -> String {
    match result {
        GameResult::Draw => String::from("It's a Draw!"),
        GameResult::Win(mark) if mode == Mode::HumanVsAi && mark == GameEngine::AI_SIDE => {
            String::from("The AI Wins!")
        }
        GameResult::Win(mark) => std::format!("Player {} Wins!", mark),
        GameResult::InProgress => String::from("Game in progress"),
    }
}
