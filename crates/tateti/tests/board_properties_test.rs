//! Property tests for board coordinates and cell monotonicity.

use proptest::prelude::*;
use tateti::{Board, BoardError, Cell, GameEngine, Mark, MoveResult, RejectReason};

fn out_of_range() -> impl Strategy<Value = (usize, usize)> {
    prop_oneof![
        (3usize..1000, 0usize..1000),
        (0usize..1000, 3usize..1000),
    ]
}

proptest! {
    #[test]
    fn get_state_rejects_out_of_range((row, col) in out_of_range()) {
        let board = Board::new();
        prop_assert_eq!(board.get_state(row, col), Err(BoardError::OutOfRange { row, col }));
        prop_assert!(board.is_empty(row, col).is_err());
    }

    #[test]
    fn make_move_rejects_out_of_range((row, col) in out_of_range()) {
        let mut engine = GameEngine::default();
        engine.start();
        prop_assert_eq!(engine.make_move(row, col), Err(BoardError::OutOfRange { row, col }));
        prop_assert!(engine.history().is_empty());
    }

    #[test]
    fn placed_marks_are_never_overwritten(row in 0usize..3, col in 0usize..3, first_x in any::<bool>()) {
        let (first, second) = if first_x { (Mark::X, Mark::O) } else { (Mark::O, Mark::X) };
        let mut board = Board::new();
        board.place_mark(row, col, first.into()).unwrap();

        prop_assert_eq!(
            board.place_mark(row, col, second.into()),
            Err(BoardError::CellOccupied { row, col })
        );
        prop_assert_eq!(board.get_state(row, col), Ok(Cell::Occupied(first)));
    }

    #[test]
    fn replaying_a_taken_cell_is_rejected(cells in proptest::collection::vec((0usize..3, 0usize..3), 1..20)) {
        let mut engine = GameEngine::default();
        engine.start();

        for (row, col) in cells {
            let before = engine.board().get_state(row, col).unwrap();
            let result = engine.make_move(row, col).unwrap();

            if engine.is_over() && !result.is_terminal() {
                prop_assert_eq!(result, MoveResult::Rejected { reason: RejectReason::GameAlreadyOver });
            } else if !before.is_empty() {
                prop_assert_eq!(result, MoveResult::Rejected { reason: RejectReason::CellOccupied });
            }
            if !before.is_empty() {
                prop_assert_eq!(engine.board().get_state(row, col).unwrap(), before);
            }
        }
    }
}
