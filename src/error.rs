//! Error types for deck, round, and session operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out mid-round.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A round could not be completed.
    #[error("round aborted: {0}")]
    Round(#[from] RoundError),
    /// Reading input or writing to the screen failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The input source reached end of file.
    #[error("input closed")]
    InputClosed,
}

impl From<DeckError> for SessionError {
    fn from(err: DeckError) -> Self {
        Self::Round(RoundError::Deck(err))
    }
}
