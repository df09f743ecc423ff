//! Application state: the engine plus what the screen shows about it.

use crossterm::event::KeyCode;
use tateti::{BoardError, GameEngine, Line, MoveResult, Players, Position, RejectReason};
use tracing::{debug, info, instrument};

use crate::input::{digit_position, move_cursor};

/// How the status line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Neutral information.
    Info,
    /// A player won.
    Win,
    /// The game was drawn.
    Draw,
    /// A move was refused.
    Error,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    message: String,
    kind: MessageKind,
    winning_line: Option<Line>,
    should_quit: bool,
}

impl App {
    /// Creates the app and starts the first game.
    #[instrument(skip(players))]
    pub fn new(players: Players) -> Self {
        let mut app = Self {
            engine: GameEngine::new(players),
            cursor: Position::Center,
            message: String::new(),
            kind: MessageKind::Info,
            winning_line: None,
            should_quit: false,
        };
        app.restart();
        app
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Style of the current status message.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// The completed line, after a win.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), BoardError> {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.reset_score(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor)?,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.select(pos)?;
                }
            }
        }
        Ok(())
    }

    /// Plays the current player's mark at `pos` and reports the result.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> Result<(), BoardError> {
        self.cursor = pos;
        let result = self.engine.make_move(pos.row(), pos.col())?;
        debug!(?result, "Move result");

        match result {
            MoveResult::Rejected { reason } => {
                let text = match reason {
                    RejectReason::CellOccupied => "Cell occupied. Choose another.",
                    RejectReason::GameAlreadyOver => "Game is over. Reset to play again.",
                    RejectReason::GameNotStarted => "Game has not started. Press 'r' to start.",
                };
                self.set_message(text, MessageKind::Error);
            }
            MoveResult::Win { winner, line } => {
                self.winning_line = Some(line);
                self.set_message(format!("{} wins!", winner), MessageKind::Win);
            }
            MoveResult::Draw => {
                self.set_message("Draw! No moves left.", MessageKind::Draw);
            }
            MoveResult::TurnChange { active_player } => {
                self.set_message(format!("{}'s turn", active_player), MessageKind::Info);
            }
        }
        Ok(())
    }

    /// Starts a fresh game; the score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let first = self.engine.start().clone();
        self.winning_line = None;
        self.cursor = Position::Center;
        self.set_message(format!("Game started - {}'s turn", first), MessageKind::Info);
    }

    /// Zeroes the score; the game in progress is kept.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.engine.reset_score();
        self.set_message("Score reset", MessageKind::Info);
    }

    fn set_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.message = text.into();
        self.kind = kind;
    }
}
