//! Session score tally.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// The board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Snapshot of the win/draw counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreTally {
    /// Wins for the given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Cumulative tally across games.
///
/// Outlives any single game; only [`Scoreboard::reset`] zeroes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    tally: ScoreTally,
}

impl Scoreboard {
    /// Creates a scoreboard with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.tally.x_wins += 1,
            Outcome::Winner(Mark::O) => self.tally.o_wins += 1,
            Outcome::Draw => self.tally.draws += 1,
        }
        info!(tally = ?self.tally, "Score updated");
    }

    /// Returns a copy of the counters.
    pub fn current_tally(&self) -> ScoreTally {
        self.tally
    }

    /// Zeroes all counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.tally = ScoreTally::default();
        info!("Score reset");
    }
}
