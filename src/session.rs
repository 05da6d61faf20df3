//! The repeat-until-quit session loop.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, info_span};

use crate::console::{Input, Screen};
use crate::error::SessionError;
use crate::game::{Choice, Round, RoundState};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::score::ScoreTracker;
use crate::view;

/// The only answer to the continue prompt that ends the session.
pub const QUIT_TOKEN: &str = "n";

/// A game session: rounds are played one after another until the player
/// declines to continue.
///
/// The session owns the score and the random number generator. Each round
/// gets a fresh, freshly shuffled deck.
#[derive(Debug, Clone)]
pub struct Session {
    options: GameOptions,
    score: ScoreTracker,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// The same seed deals the same sequence of rounds.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            score: ScoreTracker::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// Returns the seed the session was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Plays rounds until the player answers the continue prompt with `n`.
    ///
    /// Running out of input at the continue prompt also ends the session.
    ///
    /// # Errors
    ///
    /// Returns an error if a round cannot be completed, input closes in the
    /// middle of a round, or the terminal fails.
    pub fn run<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<(), SessionError>
    where
        I: Input + ?Sized,
        S: Screen + ?Sized,
    {
        info!(seed = self.seed, "session started");

        loop {
            self.play_round(input, screen)?;
            if !ask_continue(input)? {
                info!(score = %self.score, "session ended");
                return Ok(());
            }
        }
    }

    /// Shuffles a fresh deck and plays one round on it.
    ///
    /// # Errors
    ///
    /// See [`Session::play_dealt`].
    pub fn play_round<I, S>(
        &mut self,
        input: &mut I,
        screen: &mut S,
    ) -> Result<RoundResult, SessionError>
    where
        I: Input + ?Sized,
        S: Screen + ?Sized,
    {
        let round = Round::new(&mut self.rng)?;
        self.play_dealt(round, input, screen)
    }

    /// Plays an already dealt round to the end and records its outcome.
    ///
    /// Unrecognized answers to the hit or stand prompt are ignored and the
    /// table is shown again.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InputClosed`] if input runs out before the
    /// round ends, and propagates deck and terminal errors.
    pub fn play_dealt<I, S>(
        &mut self,
        mut round: Round,
        input: &mut I,
        screen: &mut S,
    ) -> Result<RoundResult, SessionError>
    where
        I: Input + ?Sized,
        S: Screen + ?Sized,
    {
        let span = info_span!("round", number = self.score.rounds() + 1);
        let _enter = span.enter();

        loop {
            if round.state() == RoundState::PlayerTurn {
                round.evaluate()?;
            }

            self.draw_table(&round, screen)?;

            if let Some(result) = round.result() {
                screen.write_line(result.outcome.message())?;
                self.score.record(result.outcome.verdict());
                info!(outcome = ?result.outcome, score = %self.score, "round finished");
                return Ok(result);
            }

            for line in view::menu() {
                screen.write_line(&line)?;
            }
            let line = input
                .read_line(view::CHOICE_PROMPT)?
                .ok_or(SessionError::InputClosed)?;
            screen.write_line("")?;

            match Choice::parse(&line) {
                Some(choice) => {
                    round.play(choice)?;
                }
                None => debug!(input = %line, "ignoring unrecognized choice"),
            }
        }
    }

    fn draw_table<S>(&self, round: &Round, screen: &mut S) -> Result<(), SessionError>
    where
        S: Screen + ?Sized,
    {
        if self.options.clear_screen {
            screen.clear()?;
        }
        for line in view::table(&self.score, round) {
            screen.write_line(&line)?;
        }
        Ok(())
    }
}

/// Asks whether to play another round.
///
/// Only [`QUIT_TOKEN`] or end of input stop; anything else, including an
/// empty line, continues.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn ask_continue<I: Input + ?Sized>(input: &mut I) -> Result<bool, SessionError> {
    match input.read_line(view::CONTINUE_PROMPT)? {
        Some(answer) => Ok(answer != QUIT_TOKEN),
        None => Ok(false),
    }
}
