#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::{String, ToString};

use crate::{
    board::Board,
    common::{Mark, MoveError},
    config::NUM_CELLS,
    ui,
};
use log::warn;
use rand::rngs::SmallRng;

use crate::player::Player;

/// What the user wants to do once a game has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostGameChoice {
    PlayAgain,
    SwitchMode,
    Quit,
}

/// Interactive player reading cell numbers from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 1-based cell number as typed by the user into a board index.
pub fn parse_cell(input: &str) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let n: usize = input
        .parse()
        .map_err(|_| std::format!("Invalid cell '{}' - must be a number 1-9", input))?;
    if n == 0 || n > NUM_CELLS {
        return Err(std::format!("Cell {} out of bounds - must be 1-9", n));
    }
    Ok(n - 1)
}

/// Parse the answer to the play-again prompt. Anything unrecognised quits.
pub fn parse_post_game(input: &str) -> PostGameChoice {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "r" | "restart" => PostGameChoice::PlayAgain,
        "m" | "mode" => PostGameChoice::SwitchMode,
        _ => PostGameChoice::Quit,
    }
}

fn read_line(prompt: &str) -> Option<String> {
    std::print!("{}", prompt);
    if let Err(e) = io::stdout().flush() {
        warn!("failed to flush stdout: {}", e);
    }
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            warn!("failed to read from stdin: {}", e);
            None
        }
    }
}

/// Ask whether to play again, switch mode, or quit. End of input quits.
pub fn prompt_post_game() -> PostGameChoice {
    read_line("Play again [y], switch mode [m], or quit [q]? ")
        .map(|l| parse_post_game(&l))
        .unwrap_or(PostGameChoice::Quit)
}

impl Player for CliPlayer {
    fn select_cell(&mut self, _rng: &mut SmallRng, board: &Board, side: Mark) -> Option<usize> {
        loop {
            let line = read_line(&std::format!("Player {}, choose a cell [1-9]: ", side))?;
            match parse_cell(&line) {
                Ok(idx) if board.cells()[idx].is_empty() => return Some(idx),
                Ok(_) => std::println!("That cell is already taken"),
                Err(e) => std::println!("{}", e),
            }
        }
    }

    fn handle_move_rejected(&mut self, index: usize, error: MoveError) {
        std::println!("Cell {} refused: {}", index + 1, error);
    }

    fn handle_opponent_move(&mut self, index: usize, side: Mark) {
        std::println!("{} took cell {}", side, index + 1);
    }
}

/// Print the board followed by a status line. Used between moves.
pub fn print_player_view(board: &Board, status: &str) {
    ui::print_board(board);
    std::println!("\n{}", status);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_numbers() {
        assert_eq!(parse_cell("1"), Ok(0));
        assert_eq!(parse_cell(" 9\n"), Ok(8));
        assert!(parse_cell("0").is_err());
        assert!(parse_cell("10").is_err());
        assert!(parse_cell("a").is_err());
        assert!(parse_cell("").is_err());
    }

    #[test]
    fn parses_post_game_answers() {
        assert_eq!(parse_post_game("y\n"), PostGameChoice::PlayAgain);
        assert_eq!(parse_post_game("M"), PostGameChoice::SwitchMode);
        assert_eq!(parse_post_game("q"), PostGameChoice::Quit);
        assert_eq!(parse_post_game(""), PostGameChoice::Quit);
    }
}
