use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::result::Outcome;

use super::{Choice, Round, RoundState};

impl Round {
    /// Checks the player's hand at the top of their turn.
    ///
    /// A 21 on the initial deal wins outright and anything over 21 loses;
    /// either resolves the round. Otherwise the player must choose.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn evaluate(&mut self) -> Result<Option<Outcome>, RoundError> {
        self.require(RoundState::PlayerTurn)?;

        let value = self.player.value();
        if self.first_hand && value == 21 {
            return Ok(Some(self.finish(Outcome::Blackjack)));
        }
        if value > 21 {
            return Ok(Some(self.finish(Outcome::Bust)));
        }
        Ok(None)
    }

    /// Deals one card to the player.
    ///
    /// The hand is no longer the initial deal afterwards, so a later 21 is
    /// not a blackjack.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player has
    /// already busted, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.require(RoundState::PlayerTurn)?;
        if self.player.is_bust() {
            return Err(RoundError::InvalidState);
        }

        let card = self.deck.draw()?;
        self.player.deal(card);
        self.first_hand = false;

        debug!(%card, player_value = self.player.value(), "player hits");
        Ok(card)
    }

    /// Ends the player's turn and reveals the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the player has
    /// already busted.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.require(RoundState::PlayerTurn)?;
        if self.player.is_bust() {
            return Err(RoundError::InvalidState);
        }

        debug!(player_value = self.player.value(), "player stands");
        self.stood = true;
        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Applies a player choice and runs the round forward.
    ///
    /// Hitting re-evaluates the hand. Standing plays the dealer out and
    /// resolves the round. Returns the outcome if the round ended.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out.
    pub fn play(&mut self, choice: Choice) -> Result<Option<Outcome>, RoundError> {
        match choice {
            Choice::Hit => {
                self.hit()?;
                self.evaluate()
            }
            Choice::Stand => {
                self.stand()?;
                self.dealer_play()?;
                self.resolve().map(Some)
            }
        }
    }
}
