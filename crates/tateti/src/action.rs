//! Moves and the results the engine hands back for them.

use crate::position::Position;
use crate::rules::Line;
use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was refused.
///
/// Refusals are part of normal play; the front-end shows them as guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The game has been won or drawn; start a new one first.
    #[display("Game is already over")]
    GameAlreadyOver,
    /// `start` has not been called yet.
    #[display("Game has not started")]
    GameNotStarted,
    /// The chosen cell already holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MoveResult {
    /// Nothing changed.
    Rejected {
        /// Why the move was refused.
        reason: RejectReason,
    },
    /// The move completed a line and ended the game.
    Win {
        /// The player who completed the line.
        winner: Player,
        /// The line that was completed.
        line: Line,
    },
    /// The move filled the board without a line.
    Draw,
    /// The game continues with the other player.
    TurnChange {
        /// The player to move next.
        active_player: Player,
    },
}

impl MoveResult {
    /// True for results that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win { .. } | MoveResult::Draw)
    }
}
