//! Session score keeping.

use core::fmt;

use crate::result::Verdict;

/// Win, loss, and draw counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl ScoreTracker {
    /// Creates a tracker with every counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Counts a won round.
    pub const fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Counts a lost round.
    pub const fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Counts a drawn round.
    pub const fn record_draw(&mut self) {
        self.draws += 1;
    }

    /// Counts a round under its verdict.
    pub const fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win => self.record_win(),
            Verdict::Loss => self.record_loss(),
            Verdict::Draw => self.record_draw(),
        }
    }

    /// Returns the number of wins.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns the number of losses.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Returns the number of draws.
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns the number of rounds recorded.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl fmt::Display for ScoreTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[W: {}] [L: {}] [D: {}]",
            self.wins, self.losses, self.draws
        )
    }
}
