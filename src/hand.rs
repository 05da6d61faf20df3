//! Hands held by the player and the dealer.

use alloc::vec::Vec;
use core::ops::Index;

use crate::card::Card;

/// Totals at or above this count every further ace as 1.
const SOFT_ACE_LIMIT: u8 = 10;

/// Computes the blackjack total of a sequence of cards.
///
/// Non-aces are summed first. Then each ace, in the order dealt, adds 11 if
/// the running total is below 10 and 1 otherwise. The result depends on the
/// total before each ace, not on the best total for the whole hand.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut total = cards
        .iter()
        .filter_map(|card| card.rank().points())
        .fold(0u8, u8::saturating_add);

    for _ in cards.iter().filter(|card| card.is_ace()) {
        let ace = if total < SOFT_ACE_LIMIT { 11 } else { 1 };
        total = total.saturating_add(ace);
    }

    total
}

/// The cards dealt to one party during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn deal(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, in deal order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
