//! Contract-violation errors for board access.

use serde::{Deserialize, Serialize};

/// A caller broke the board contract.
///
/// These are programming errors, not rule violations: an occupied cell
/// during play is reported as [`crate::MoveResult::Rejected`] by the engine,
/// and only surfaces here when [`crate::Board::place_mark`] is called directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum BoardError {
    /// Row or column outside `0..=2`.
    #[display("Cell ({}, {}) is out of range (rows and columns are 0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The value is not one of the two player marks.
    #[display("Invalid mark {:?}: must be 'X' or 'O'", value)]
    InvalidMark {
        /// The rejected value as text.
        value: String,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
}

impl std::error::Error for BoardError {}
