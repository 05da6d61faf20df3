//! Round engine and state management.

use rand::Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_HITS_THROUGH;
pub use state::{Choice, RoundState};

/// One round of blackjack between the player and the dealer.
///
/// The round owns its deck and both hands; all of them are dropped with it.
/// It moves through [`RoundState::Dealing`], [`RoundState::PlayerTurn`],
/// [`RoundState::DealerTurn`] and finally [`RoundState::Resolved`].
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: RoundState,
    /// Whether the player still holds only the initial deal.
    first_hand: bool,
    /// Whether the player stood, revealing the dealer's hand.
    stood: bool,
    outcome: Option<Outcome>,
}

impl Round {
    /// Builds a fresh deck, shuffles it, and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Cannot fail with a full deck, but returns [`RoundError::Deck`] rather
    /// than panicking if a draw ever comes up empty.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, RoundError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::deal(deck)
    }

    /// Deals two cards each from `deck`, alternating player then dealer.
    ///
    /// The deck must already be shuffled; a canonical deck is dealt as is.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Deck`] if the deck holds fewer than four cards.
    pub fn deal(deck: Deck) -> Result<Self, RoundError> {
        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
            first_hand: true,
            stood: false,
            outcome: None,
        };

        for _ in 0..2 {
            let card = round.deck.draw()?;
            round.player.deal(card);
            let card = round.deck.draw()?;
            round.dealer.deal(card);
        }

        debug!(
            player_value = round.player.value(),
            up_card = %round.dealer[0],
            "opening hands dealt"
        );

        round.state = RoundState::PlayerTurn;
        Ok(round)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the player still holds only the initial deal.
    #[must_use]
    pub const fn is_first_hand(&self) -> bool {
        self.first_hand
    }

    /// Returns whether the dealer's hand is shown in full.
    ///
    /// Only standing reveals it; rounds ended by a bust or blackjack keep
    /// the second card hidden.
    #[must_use]
    pub const fn dealer_revealed(&self) -> bool {
        self.stood
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the full result once the round is resolved.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.outcome.map(|outcome| RoundResult {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            dealer_revealed: self.stood,
        })
    }

    fn require(&self, state: RoundState) -> Result<(), RoundError> {
        if self.state == state {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        debug!(
            ?outcome,
            player_value = self.player.value(),
            dealer_value = self.dealer.value(),
            "round resolved"
        );
        self.state = RoundState::Resolved;
        self.outcome = Some(outcome);
        outcome
    }
}
