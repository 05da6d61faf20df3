//! Text rendering of the table.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::game::Round;
use crate::hand::Hand;
use crate::score::ScoreTracker;

const BORDER: &str = "$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$";

/// Prompt for the hit or stand choice.
pub const CHOICE_PROMPT: &str = "Your choice: ";

/// Prompt asked after every round.
pub const CONTINUE_PROMPT: &str = "Would you like to play again? (Y/n): ";

/// Renders the banner with the running score.
#[must_use]
pub fn banner(score: &ScoreTracker) -> Vec<String> {
    vec![
        BORDER.to_string(),
        "%%           BlackJack           %%".to_string(),
        "%%-------------------------------%%".to_string(),
        format!("%%      {score}     %%"),
        BORDER.to_string(),
        String::new(),
    ]
}

/// Renders cards as `[C5][HK]`.
#[must_use]
pub fn cards(hand: &Hand) -> String {
    hand.cards().iter().map(|card| format!("[{card}]")).collect()
}

/// Renders the dealer's line.
///
/// Until the hand is revealed only the first card is shown, followed by a
/// placeholder, and no value.
#[must_use]
pub fn dealer_line(dealer: &Hand, revealed: bool) -> String {
    if revealed {
        format!("Dealer Cards: {} ({})", cards(dealer), dealer.value())
    } else {
        let up = dealer
            .get(0)
            .map_or_else(String::new, |card| format!("[{card}]"));
        format!("Dealer Cards: {up}[?]")
    }
}

/// Renders the player's line.
#[must_use]
pub fn player_line(player: &Hand) -> String {
    format!("Your Cards:   {} ({})", cards(player), player.value())
}

/// Renders the full table: banner, both hands, and a blank separator.
#[must_use]
pub fn table(score: &ScoreTracker, round: &Round) -> Vec<String> {
    let mut lines = banner(score);
    lines.push(dealer_line(round.dealer(), round.dealer_revealed()));
    lines.push(player_line(round.player()));
    lines.push(String::new());
    lines
}

/// Renders the hit or stand menu.
#[must_use]
pub fn menu() -> Vec<String> {
    vec![
        "What would you like to do?".to_string(),
        " [1] Hit".to_string(),
        " [2] Stand".to_string(),
        String::new(),
    ]
}
