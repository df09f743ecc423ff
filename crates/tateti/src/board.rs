//! The 3x3 board.

use crate::error::BoardError;
use crate::position::Position;
use crate::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// A cell only ever goes from [`Cell::Empty`] to a mark; the only way back
/// is [`Board::reset`], which clears all nine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfRange`] when `row` or `col` is outside `0..=2`.
    #[instrument(skip(self))]
    pub fn get_state(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let pos = Position::from_coords(row, col)?;
        Ok(self.get(pos))
    }

    /// True when the cell at `(row, col)` holds no mark.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfRange`] for bad coordinates.
    #[instrument(skip(self))]
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.get_state(row, col)?.is_empty())
    }

    /// Writes a mark into an empty cell.
    ///
    /// # Errors
    ///
    /// - [`BoardError::OutOfRange`] for bad coordinates.
    /// - [`BoardError::InvalidMark`] when `cell` is [`Cell::Empty`].
    /// - [`BoardError::CellOccupied`] when the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let pos = Position::from_coords(row, col)?;
        if cell.is_empty() {
            return Err(BoardError::InvalidMark {
                value: "empty".to_string(),
            });
        }
        if !self.get(pos).is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[pos.to_index()] = cell;
        debug!(?pos, ?cell, "Mark placed");
        Ok(())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Returns the cell at a named position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Positions that can still be played, row-major.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_empty())
            .collect()
    }

    /// Formats the board as text; empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get_state(row, col), Ok(Cell::Empty));
                assert_eq!(board.is_empty(row, col), Ok(true));
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_mark_sets_cell() {
        let mut board = Board::new();
        board.place_mark(1, 2, Cell::Occupied(Mark::O)).unwrap();
        assert_eq!(board.get(Position::MiddleRight), Cell::Occupied(Mark::O));
        assert_eq!(board.is_empty(1, 2), Ok(false));
    }

    #[test]
    fn test_place_mark_never_overwrites() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::X.into()).unwrap();
        let err = board.place_mark(0, 0, Mark::O.into()).unwrap_err();
        assert_eq!(err, BoardError::CellOccupied { row: 0, col: 0 });
        assert_eq!(board.get_state(0, 0), Ok(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_empty_is_invalid_mark() {
        let mut board = Board::new();
        let err = board.place_mark(0, 0, Cell::Empty).unwrap_err();
        assert!(matches!(err, BoardError::InvalidMark { .. }));
    }

    #[test]
    fn test_place_mark_out_of_range() {
        let mut board = Board::new();
        let err = board.place_mark(3, 1, Mark::X.into()).unwrap_err();
        assert_eq!(err, BoardError::OutOfRange { row: 3, col: 1 });
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::X.into()).unwrap();
        board.place_mark(2, 2, Mark::O.into()).unwrap();
        board.reset();
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_empty_positions_in_row_major_order() {
        let mut board = Board::new();
        assert_eq!(board.empty_positions(), Position::ALL.to_vec());

        board.place_mark(1, 1, Mark::X.into()).unwrap();
        board.place_mark(0, 2, Mark::O.into()).unwrap();
        board.place_mark(2, 0, Mark::X.into()).unwrap();
        assert_eq!(
            board.empty_positions(),
            vec![
                Position::TopLeft,
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_full_board_has_no_empty_positions() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place_mark(pos.row(), pos.col(), mark.into()).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::X.into()).unwrap();
        board.place_mark(1, 1, Mark::O.into()).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
