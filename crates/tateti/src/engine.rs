//! Front-end facing game engine.

use crate::action::{Move, MoveResult};
use crate::board::Board;
use crate::error::BoardError;
use crate::scoreboard::{ScoreTally, Scoreboard};
use crate::session::{GameSession, Phase};
use crate::types::{Player, Players};
use tracing::instrument;

/// Pairs one [`GameSession`] with the [`Scoreboard`] it reports into.
///
/// This is the only handle a front-end needs. Every mutation of the board
/// or the tally goes through it:
///
/// - [`GameEngine::start`] on launch and on "reset game"
/// - [`GameEngine::make_move`] on cell selection
/// - [`GameEngine::reset_score`] on "reset score"
///
/// ```
/// use tateti::{GameEngine, MoveResult};
///
/// let mut engine = GameEngine::default();
/// engine.start();
/// let result = engine.make_move(1, 1).unwrap();
/// assert!(matches!(result, MoveResult::TurnChange { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    session: GameSession,
    scores: Scoreboard,
}

impl GameEngine {
    /// Creates an engine for the given players. Call [`GameEngine::start`] before moving.
    #[instrument]
    pub fn new(players: Players) -> Self {
        Self {
            session: GameSession::new(players),
            scores: Scoreboard::new(),
        }
    }

    /// Starts (or restarts) a game. The tally is kept.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> &Player {
        self.session.start()
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfRange`] when the coordinates are off the board.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveResult, BoardError> {
        self.session.make_move(row, col, &mut self.scores)
    }

    /// Zeroes the tally without touching the game in progress.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.scores.reset();
    }

    /// The player whose mark goes down next.
    pub fn current_player(&self) -> &Player {
        self.session.current_player()
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Accepted moves of the current game.
    pub fn history(&self) -> &[Move] {
        self.session.history()
    }

    /// Returns the seated players.
    pub fn players(&self) -> &Players {
        self.session.players()
    }

    /// Snapshot of the tally.
    pub fn tally(&self) -> ScoreTally {
        self.scores.current_tally()
    }

    /// Read access to the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
