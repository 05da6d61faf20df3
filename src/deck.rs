//! The deck a single round is played from.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit, by_suit};
use crate::error::DeckError;

/// An ordered pile of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck, grouped by suit.
    ///
    /// The order is deterministic. Shuffle before dealing from it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: canonical_cards(),
        }
    }

    /// Creates a deck from cards in the given order. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles every remaining card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Puts a card back at the bottom of the deck.
    pub fn return_card(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Lists a fresh, unshuffled deck with one line per suit.
    #[must_use]
    pub fn canonical_listing() -> String {
        let mut listing = String::new();
        let mut current: Option<Suit> = None;

        for card in canonical_cards() {
            if current.is_some_and(|suit| suit != card.suit()) {
                listing.push('\n');
            } else if current.is_some() {
                listing.push(' ');
            }
            current = Some(card.suit());
            listing.push(card.suit().letter());
            listing.push(card.rank().letter());
        }

        listing
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    // Stable, so each suit keeps its ranks in order.
    cards.sort_by(by_suit);
    cards
}
