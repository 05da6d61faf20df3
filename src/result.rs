//! Round outcome types.

use core::fmt;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player's initial hand was worth 21.
    Blackjack,
    /// Player went over 21.
    Bust,
    /// Dealer went over 21.
    DealerBust,
    /// Player beat the dealer's total.
    Win,
    /// Dealer beat the player's total.
    Loss,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Returns how the outcome counts towards the score.
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::Blackjack | Self::DealerBust | Self::Win => Verdict::Win,
            Self::Bust | Self::Loss => Verdict::Loss,
            Self::Push => Verdict::Draw,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You Won!",
            Self::Bust => "You busted!",
            Self::DealerBust => "Dealer busted, You Win!",
            Self::Win => "You beat the dealer, You Won!",
            Self::Loss => "You lost :(",
            Self::Push => "Push, nobody won!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Score category of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Counts as a win.
    Win,
    /// Counts as a loss.
    Loss,
    /// Counts as a draw.
    Draw,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer's hand was revealed (player stood).
    pub dealer_revealed: bool,
}
