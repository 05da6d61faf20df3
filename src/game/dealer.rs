use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::result::Outcome;

use super::{Round, RoundState};

/// The dealer draws while at or below this value.
pub const DEALER_HITS_THROUGH: u8 = 16;

impl Round {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while their value is 16 or less and stands on 17 or
    /// more, regardless of the player's total.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.require(RoundState::DealerTurn)?;

        let mut drawn_cards = Vec::new();
        while self.dealer.value() <= DEALER_HITS_THROUGH {
            let card = self.deck.draw()?;
            self.dealer.deal(card);
            drawn_cards.push(card);
            debug!(%card, dealer_value = self.dealer.value(), "dealer draws");
        }

        Ok(drawn_cards)
    }

    /// Compares the hands and settles the round.
    ///
    /// A dealer over 21 loses. Otherwise equal totals push and the higher
    /// total wins.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn resolve(&mut self) -> Result<Outcome, RoundError> {
        self.require(RoundState::DealerTurn)?;

        let dealer_value = self.dealer.value();
        let outcome = if dealer_value > 21 {
            Outcome::DealerBust
        } else {
            match self.player.value().cmp(&dealer_value) {
                Ordering::Equal => Outcome::Push,
                Ordering::Greater => Outcome::Win,
                Ordering::Less => Outcome::Loss,
            }
        };

        Ok(self.finish(outcome))
    }
}
