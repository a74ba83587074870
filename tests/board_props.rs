use proptest::prelude::*;
use tictactoe::{Board, GameResult, Mark, MoveError, NUM_CELLS};

/// Play alternating marks at the given cells, skipping occupied ones, until
/// somebody wins.
fn alternating_board(order: &[usize]) -> Board {
    let mut board = Board::new();
    let mut mark = Mark::X;
    for &i in order {
        if board.place(i, mark).is_ok() {
            if board.check_win(mark) {
                break;
            }
            mark = mark.opponent();
        }
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn place_never_overwrites(order in proptest::collection::vec(0..NUM_CELLS, 0..20), idx in 0..NUM_CELLS) {
        let mut board = alternating_board(&order);
        let before = board;
        if board.cell(idx).unwrap().is_empty() {
            board.place(idx, Mark::O).unwrap();
        }
        let after = board;
        prop_assert_eq!(board.place(idx, Mark::X).unwrap_err(), MoveError::CellOccupied);
        prop_assert_eq!(board, after);
        for i in 0..NUM_CELLS {
            if !before.cell(i).unwrap().is_empty() {
                prop_assert_eq!(before.cell(i), after.cell(i));
            }
        }
    }

    #[test]
    fn never_two_winners(order in Just((0..NUM_CELLS).collect::<Vec<_>>()).prop_shuffle()) {
        let board = alternating_board(&order);
        prop_assert!(!(board.check_win(Mark::X) && board.check_win(Mark::O)));
        let diff = board.count(Mark::X) as isize - board.count(Mark::O) as isize;
        prop_assert!(diff == 0 || diff == 1);
    }

    #[test]
    fn draw_implies_full_and_no_winner(order in Just((0..NUM_CELLS).collect::<Vec<_>>()).prop_shuffle()) {
        let board = alternating_board(&order);
        if board.is_draw() {
            prop_assert!(board.is_full());
            prop_assert!(!board.check_win(Mark::X));
            prop_assert!(!board.check_win(Mark::O));
            prop_assert_eq!(board.result(), GameResult::Draw);
        }
        if board.is_full() && board.result() == GameResult::Draw {
            prop_assert!(board.is_draw());
        }
    }
}
