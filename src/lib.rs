//! A single-player terminal blackjack game.
//!
//! The crate provides a [`Round`] type that runs one round against a dealer
//! with fixed house rules, and a [`Session`] that plays rounds until the
//! player quits while keeping a [`ScoreTracker`].
//!
//! # Example
//!
//! ```no_run
//! use bjplay::{GameOptions, LineInput, Session, TextScreen};
//!
//! let mut session = Session::new(GameOptions::default(), 42);
//! let mut input = LineInput::stdio();
//! let mut screen = TextScreen::stdout();
//! let _ = session.run(&mut input, &mut screen);
//! ```

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;
pub mod session;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Input, LineInput, Screen, ScriptedInput, TextScreen, Transcript};
pub use deck::Deck;
pub use error::{DeckError, RoundError, SessionError};
pub use game::{Choice, DEALER_HITS_THROUGH, Round, RoundState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, Verdict};
pub use score::ScoreTracker;
pub use session::Session;
