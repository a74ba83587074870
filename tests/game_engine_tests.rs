use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{Board, GameEngine, GamePhase, GameResult, Mark, Mode, MoveError};

#[test]
fn test_initial_state() {
    let engine = GameEngine::new(Mode::HumanVsAi);
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.ai_side(), Some(Mark::O));
    assert_eq!(*engine.board(), Board::new());
    assert_eq!(GameEngine::new(Mode::HumanVsHuman).ai_side(), None);
}

#[test]
fn test_human_game_top_row_win() {
    let mut engine = GameEngine::new(Mode::HumanVsHuman);
    for idx in [0, 4, 1, 7] {
        assert_eq!(engine.play(idx).unwrap(), GamePhase::AwaitingPlayerMove);
    }
    let phase = engine.play(2).unwrap();
    assert_eq!(phase, GamePhase::GameOver(GameResult::Win(Mark::X)));
    assert!(engine.board().check_win(Mark::X));
    assert_eq!(engine.result(), GameResult::Win(Mark::X));
    assert_eq!(engine.play(5).unwrap_err(), MoveError::GameOver);
}

#[test]
fn test_human_game_draw() {
    let mut engine = GameEngine::new(Mode::HumanVsHuman);
    for idx in [0, 1, 2, 4, 3, 5, 7, 6] {
        engine.play(idx).unwrap();
    }
    assert_eq!(engine.play(8).unwrap(), GamePhase::GameOver(GameResult::Draw));
    assert!(engine.board().is_draw());
}

#[test]
fn test_invalid_move_leaves_state_untouched() {
    let mut engine = GameEngine::new(Mode::HumanVsHuman);
    engine.play(4).unwrap();
    let board = *engine.board();
    assert_eq!(engine.play(4).unwrap_err(), MoveError::CellOccupied);
    assert_eq!(engine.play(9).unwrap_err(), MoveError::InvalidIndex);
    assert_eq!(*engine.board(), board);
    assert_eq!(engine.turn(), Mark::O);
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
}

#[test]
fn test_ai_turn_blocks_human_input() {
    let mut engine = GameEngine::new(Mode::HumanVsAi);
    assert_eq!(engine.play(0).unwrap(), GamePhase::AwaitingAiMove);
    assert_eq!(engine.turn(), Mark::O);
    assert_eq!(engine.play(1).unwrap_err(), MoveError::NotYourTurn);

    let mut rng = SmallRng::seed_from_u64(9);
    let idx = engine.play_ai(&mut rng).unwrap();
    assert_eq!(idx, 4, "AI takes the center after a corner opening");
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.play_ai(&mut rng).unwrap_err(), MoveError::NotYourTurn);
}

#[test]
fn test_ai_blocks_then_wins() {
    let mut engine = GameEngine::new(Mode::HumanVsAi);
    let mut rng = SmallRng::seed_from_u64(1);
    engine.play(0).unwrap();
    assert_eq!(engine.play_ai(&mut rng).unwrap(), 4);
    engine.play(1).unwrap();
    // X threatens the top row.
    assert_eq!(engine.play_ai(&mut rng).unwrap(), 2);
    engine.play(3).unwrap();
    // O has 2 and 4, so 6 completes the anti-diagonal; that beats blocking 6 for X too.
    assert_eq!(engine.play_ai(&mut rng).unwrap(), 6);
    assert_eq!(engine.phase(), GamePhase::GameOver(GameResult::Win(Mark::O)));
}

#[test]
fn test_restart_after_game_over() {
    let mut engine = GameEngine::new(Mode::HumanVsHuman);
    for idx in [0, 4, 1, 7, 2] {
        engine.play(idx).unwrap();
    }
    assert!(engine.is_over());
    engine.restart();
    assert_eq!(*engine.board(), Board::new());
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.mode(), Mode::HumanVsHuman);
}

#[test]
fn test_mode_change_restarts() {
    let mut engine = GameEngine::new(Mode::HumanVsHuman);
    engine.play(0).unwrap();
    engine.set_mode(Mode::HumanVsAi);
    assert_eq!(engine.mode(), Mode::HumanVsAi);
    assert_eq!(*engine.board(), Board::new());
    assert_eq!(engine.phase(), GamePhase::AwaitingPlayerMove);
    assert_eq!(engine.turn(), Mark::X);
}
