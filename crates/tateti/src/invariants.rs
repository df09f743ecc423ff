//! Session invariants.
//!
//! Logical properties that must hold after every accepted move. The session
//! checks them in debug builds; tests can check them directly.

use crate::board::Board;
use crate::session::{GameSession, Phase};
use crate::types::{Cell, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Cells are never overwritten: replaying the history rebuilds the board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut rebuilt = Board::new();

        for mov in session.history() {
            let pos = mov.position;
            if rebuilt
                .place_mark(pos.row(), pos.col(), Cell::Occupied(mov.mark))
                .is_err()
            {
                return false;
            }
        }

        rebuilt == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// Marks alternate starting with X, and the active player follows suit.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == expected_mark(i));

        // A finished game keeps the last mover active.
        match session.phase() {
            Phase::InProgress => {
                alternates && session.current_player().mark() == expected_mark(history.len())
            }
            Phase::NotStarted | Phase::Over(_) => alternates,
        }
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

fn expected_mark(turn: usize) -> Mark {
    if turn % 2 == 0 { Mark::X } else { Mark::O }
}

/// All session invariants.
pub type SessionInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
