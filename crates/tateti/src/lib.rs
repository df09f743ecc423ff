//! tateti - two-player tic-tac-toe session logic
//!
//! The board, the rules and the turn engine, with no rendering and no I/O.
//! A front-end drives a [`GameEngine`] and renders whatever it returns.
//!
//! # Architecture
//!
//! - **Board**: 3x3 cell storage; cells are never overwritten
//! - **Rules**: the 8 winning lines, winner and draw detection
//! - **Scoreboard**: win/draw tally that outlives individual games
//! - **Session**: one game: players, turn, phase and history
//! - **Engine**: a session plus its scoreboard, the front-end's only handle
//!
//! # Example
//!
//! ```
//! use tateti::{GameEngine, Mark, MoveResult};
//!
//! let mut engine = GameEngine::default();
//! engine.start();
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     engine.make_move(row, col).unwrap();
//! }
//!
//! match engine.make_move(0, 2).unwrap() {
//!     MoveResult::Win { winner, .. } => assert_eq!(winner.mark(), Mark::X),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert_eq!(*engine.tally().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod invariants;
mod position;
pub mod rules;
mod scoreboard;
mod session;
mod types;

pub use action::{Move, MoveResult, RejectReason};
pub use board::Board;
pub use engine::GameEngine;
pub use error::BoardError;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    SessionInvariants,
};
pub use position::Position;
pub use rules::Line;
pub use scoreboard::{Outcome, ScoreTally, Scoreboard};
pub use session::{GameSession, Phase};
pub use types::{Cell, Mark, Player, Players};
