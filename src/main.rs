//! Terminal blackjack.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjplay::{Deck, GameOptions, LineInput, Session, SessionError, TextScreen};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Play blackjack against the dealer until you decline another round.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for shuffling; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep previous tables on screen instead of clearing between turns.
    #[arg(long)]
    no_clear: bool,

    /// Print the unshuffled deck, one suit per line, and exit.
    #[arg(long)]
    print_deck: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.print_deck {
        println!("{}", Deck::canonical_listing());
        return ExitCode::SUCCESS;
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default().with_clear_screen(!args.no_clear);

    let mut session = Session::new(options, seed);
    let mut input = LineInput::stdio();
    let mut screen = TextScreen::stdout();

    match session.run(&mut input, &mut screen) {
        Ok(()) | Err(SessionError::InputClosed) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
