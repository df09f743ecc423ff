//! One game between two seated players.

use crate::action::{Move, MoveResult, RejectReason};
use crate::board::Board;
use crate::error::BoardError;
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::position::Position;
use crate::rules;
use crate::scoreboard::{Outcome, Scoreboard};
use crate::types::{Mark, Player, Players};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created, `start` not called yet.
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// Won or drawn; only `start` leaves this phase.
    Over(Outcome),
}

/// Board, players, turn and history for one game.
///
/// The session never owns a [`Scoreboard`]: finished games are recorded into
/// whichever tally the caller passes to [`GameSession::make_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    players: Players,
    active: Mark,
    phase: Phase,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session that has not started.
    #[instrument]
    pub fn new(players: Players) -> Self {
        Self {
            board: Board::new(),
            active: players.first().mark(),
            players,
            phase: Phase::NotStarted,
            history: Vec::new(),
        }
    }

    /// Clears the board and hands the first move to X.
    ///
    /// Safe to call in any phase; it always restarts cleanly.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> &Player {
        self.board.reset();
        self.history.clear();
        self.active = self.players.first().mark();
        self.phase = Phase::InProgress;
        info!(first = %self.current_player(), "Game started");
        self.current_player()
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// Rule violations come back as [`MoveResult::Rejected`] and leave the
    /// session untouched. A win or draw is recorded into `scores`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfRange`] when the coordinates are off the board.
    #[instrument(skip(self, scores), fields(active = %self.active))]
    pub fn make_move(
        &mut self,
        row: usize,
        col: usize,
        scores: &mut Scoreboard,
    ) -> Result<MoveResult, BoardError> {
        match self.phase {
            Phase::Over(outcome) => {
                warn!(%outcome, "Move after game over");
                return Ok(MoveResult::Rejected {
                    reason: RejectReason::GameAlreadyOver,
                });
            }
            Phase::NotStarted => {
                warn!("Move before game start");
                return Ok(MoveResult::Rejected {
                    reason: RejectReason::GameNotStarted,
                });
            }
            Phase::InProgress => {}
        }

        let pos = Position::from_coords(row, col)?;
        if !self.board.get(pos).is_empty() {
            warn!(%pos, "Cell occupied");
            return Ok(MoveResult::Rejected {
                reason: RejectReason::CellOccupied,
            });
        }

        let result = self.apply(pos, scores)?;

        #[cfg(debug_assertions)]
        if let Err(violations) = SessionInvariants::check_all(self) {
            panic!("Session invariants violated: {:?}", violations);
        }

        Ok(result)
    }

    fn apply(&mut self, pos: Position, scores: &mut Scoreboard) -> Result<MoveResult, BoardError> {
        let mark = self.active;
        self.board.place_mark(pos.row(), pos.col(), mark.into())?;
        self.history.push(Move::new(mark, pos));
        debug!(%mark, %pos, moves = self.history.len(), "Move applied");

        if let Some((winner, line)) = rules::check_winner(&self.board) {
            let outcome = Outcome::Winner(winner);
            self.phase = Phase::Over(outcome);
            scores.record(outcome);
            info!(%winner, %line, "Game won");
            return Ok(MoveResult::Win {
                winner: self.players.get(winner).clone(),
                line,
            });
        }

        if rules::is_full(&self.board) {
            self.phase = Phase::Over(Outcome::Draw);
            scores.record(Outcome::Draw);
            info!("Game drawn");
            return Ok(MoveResult::Draw);
        }

        self.active = mark.opponent();
        Ok(MoveResult::TurnChange {
            active_player: self.current_player().clone(),
        })
    }

    /// The player whose mark goes down next.
    ///
    /// Once the game is over this stays on the last player who moved.
    pub fn current_player(&self) -> &Player {
        self.players.get(self.active)
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seated players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Players::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Line;

    fn started() -> (GameSession, Scoreboard) {
        let mut session = GameSession::new(Players::default());
        session.start();
        (session, Scoreboard::new())
    }

    #[test]
    fn test_new_session_rejects_moves() {
        let mut session = GameSession::new(Players::default());
        let mut scores = Scoreboard::new();
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(
            session.make_move(0, 0, &mut scores),
            Ok(MoveResult::Rejected {
                reason: RejectReason::GameNotStarted
            })
        );
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn test_turn_alternates() {
        let (mut session, mut scores) = started();
        assert_eq!(session.current_player().mark(), Mark::X);

        let result = session.make_move(1, 1, &mut scores).unwrap();
        match result {
            MoveResult::TurnChange { active_player } => assert_eq!(active_player.mark(), Mark::O),
            other => panic!("Expected turn change, got {:?}", other),
        }
        assert_eq!(session.current_player().mark(), Mark::O);
        assert_eq!(session.history(), &[Move::new(Mark::X, Position::Center)]);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_mutation() {
        let (mut session, mut scores) = started();
        session.make_move(0, 0, &mut scores).unwrap();
        let before = session.clone();

        assert_eq!(
            session.make_move(0, 0, &mut scores),
            Ok(MoveResult::Rejected {
                reason: RejectReason::CellOccupied
            })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let (mut session, mut scores) = started();
        assert_eq!(
            session.make_move(0, 3, &mut scores),
            Err(BoardError::OutOfRange { row: 0, col: 3 })
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_game_over_checked_before_coordinates() {
        let (mut session, mut scores) = started();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.make_move(row, col, &mut scores).unwrap();
        }
        assert_eq!(session.outcome(), Some(Outcome::Winner(Mark::X)));
        assert_eq!(
            session.make_move(9, 9, &mut scores),
            Ok(MoveResult::Rejected {
                reason: RejectReason::GameAlreadyOver
            })
        );
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // Final board: X O X / O X O / O X X
        let (mut session, mut scores) = started();
        let moves = [
            (0, 0), // X
            (0, 1), // O
            (0, 2), // X
            (1, 0), // O
            (2, 1), // X
            (1, 2), // O
            (1, 1), // X
            (2, 0), // O
            (2, 2), // X completes the main diagonal
        ];
        let mut last = None;
        for (row, col) in moves {
            last = Some(session.make_move(row, col, &mut scores).unwrap());
        }
        assert!(session.board().is_full());
        match last {
            Some(MoveResult::Win { winner, line }) => {
                assert_eq!(winner.mark(), Mark::X);
                assert_eq!(line, Line::MainDiagonal);
            }
            other => panic!("Expected win, got {:?}", other),
        }
        assert_eq!(*scores.current_tally().draws(), 0);
        assert_eq!(*scores.current_tally().x_wins(), 1);
    }

    #[test]
    fn test_start_resets_board_and_turn() {
        let (mut session, mut scores) = started();
        session.make_move(0, 0, &mut scores).unwrap();
        session.make_move(2, 2, &mut scores).unwrap();

        let first = session.start().clone();
        assert_eq!(first.mark(), Mark::X);
        assert!(session.board().cells().iter().all(|c| c.is_empty()));
        assert!(session.history().is_empty());
        assert!(!session.is_over());
        assert_eq!(session.phase(), Phase::InProgress);
    }
}
