//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and its outcome is known.
    Resolved,
}

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Take another card.
    Hit,
    /// End the turn.
    Stand,
}

impl Choice {
    /// Parses a menu token: `1` is hit, `2` is stand.
    ///
    /// Anything else yields `None`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Hit),
            "2" => Some(Self::Stand),
            _ => None,
        }
    }
}
