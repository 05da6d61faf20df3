//! Card, deck, hand, and round integration tests.

use std::collections::HashSet;

use bjplay::{
    Card, Choice, DECK_SIZE, Deck, DeckError, Hand, Outcome, Rank, Round, RoundError, RoundState,
    ScoreTracker, Suit, Verdict,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn hand(ranks: &[Rank]) -> Hand {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn fresh_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 52);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn canonical_deck_is_grouped_by_suit_letter() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(cards[0], card(Suit::Clubs, Rank::Two));
    assert_eq!(cards[12], card(Suit::Clubs, Rank::Ace));
    assert_eq!(cards[13], card(Suit::Diamonds, Rank::Two));
    assert_eq!(cards[26], card(Suit::Hearts, Rank::Two));
    assert_eq!(cards[51], card(Suit::Spades, Rank::Ace));
    assert_eq!(Deck::new(), Deck::default());
}

#[test]
fn canonical_listing_has_one_line_per_suit() {
    let listing = Deck::canonical_listing();
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "C2 C3 C4 C5 C6 C7 C8 C9 CT CJ CQ CK CA");
    assert!(lines[1].starts_with("D2 "));
    assert!(lines[2].starts_with("H2 "));
    assert!(lines[3].ends_with(" SA"));
}

#[test]
fn card_text_is_suit_then_rank() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "SA");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "DT");
    assert_eq!(card(Suit::Hearts, Rank::Seven).to_string(), "H7");

    let queen = card(Suit::Clubs, Rank::Queen);
    assert_eq!(queen.suit(), Suit::Clubs);
    assert_eq!(queen.rank(), Rank::Queen);
    assert!(!queen.is_ace());
}

#[test]
fn draw_takes_top_and_return_goes_to_bottom() {
    let first = card(Suit::Hearts, Rank::Two);
    let second = card(Suit::Clubs, Rank::Nine);
    let mut deck = deck_from_draws(&[first, second]);

    assert_eq!(deck.draw(), Ok(first));

    let returned = card(Suit::Spades, Rank::King);
    deck.return_card(returned);
    assert_eq!(deck.cards()[0], returned);

    assert_eq!(deck.draw(), Ok(second));
    assert_eq!(deck.draw(), Ok(returned));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn shuffle_permutes_and_is_reproducible() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(a, b);
    assert_ne!(a, Deck::new());

    let unique: HashSet<Card> = a.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn hand_without_aces_sums_ranks_in_any_order() {
    let forward = hand(&[Rank::King, Rank::Five, Rank::Three]);
    let backward = hand(&[Rank::Three, Rank::Five, Rank::King]);
    assert_eq!(forward.value(), 18);
    assert_eq!(backward.value(), 18);

    assert_eq!(hand(&[Rank::Jack, Rank::Queen]).value(), 20);
    assert_eq!(hand(&[Rank::Ten, Rank::Two]).value(), 12);
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn aces_count_eleven_only_below_ten() {
    assert_eq!(hand(&[Rank::Ace]).value(), 11);
    assert_eq!(hand(&[Rank::King, Rank::Ace]).value(), 11);
    assert_eq!(hand(&[Rank::Ace, Rank::King]).value(), 11);
    assert_eq!(hand(&[Rank::Nine, Rank::Ace]).value(), 20);
    assert_eq!(hand(&[Rank::Ace, Rank::Nine]).value(), 20);
}

#[test]
fn each_ace_depends_on_total_before_it() {
    assert_eq!(hand(&[Rank::Ace, Rank::Ace]).value(), 12);
    assert_eq!(hand(&[Rank::Ace, Rank::Five, Rank::Ace]).value(), 17);
    assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::King]).value(), 12);
    assert_eq!(
        hand(&[Rank::Ace, Rank::Ace, Rank::King, Rank::King]).value(),
        22
    );

    // Counting every ace as 1 would give 12; the first ace still takes 11.
    let nine_and_three_aces = hand(&[Rank::Nine, Rank::Ace, Rank::Ace, Rank::Ace]);
    assert_eq!(nine_and_three_aces.value(), 22);
    assert!(nine_and_three_aces.is_bust());
}

#[test]
fn hand_indexing() {
    let mut held = Hand::new();
    assert!(held.is_empty());
    held.deal(card(Suit::Hearts, Rank::Four));
    held.deal(card(Suit::Clubs, Rank::Jack));

    assert_eq!(held.len(), 2);
    assert_eq!(held[0], card(Suit::Hearts, Rank::Four));
    assert_eq!(held.get(1), Some(&card(Suit::Clubs, Rank::Jack)));
    assert_eq!(held.get(2), None);
}

#[test]
fn deal_alternates_player_and_dealer() {
    let round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::Eight),   // player
        card(Suit::Clubs, Rank::Six),      // dealer up
        card(Suit::Diamonds, Rank::Seven), // player
        card(Suit::Spades, Rank::Ten),     // dealer hole
        card(Suit::Hearts, Rank::Four),
    ]))
    .unwrap();

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(
        round.player().cards(),
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Seven)
        ]
    );
    assert_eq!(
        round.dealer().cards(),
        &[card(Suit::Clubs, Rank::Six), card(Suit::Spades, Rank::Ten)]
    );
    assert_eq!(round.cards_remaining(), 1);
    assert!(round.is_first_hand());
    assert!(!round.dealer_revealed());
    assert_eq!(round.outcome(), None);
}

#[test]
fn shuffled_round_deals_four_cards() {
    let round = Round::new(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    assert_eq!(round.player().len(), 2);
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn deal_with_short_deck_returns_error() {
    let result = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
    ]));
    assert_eq!(result.unwrap_err(), RoundError::Deck(DeckError::Empty));
}

#[test]
fn ace_king_opening_is_not_a_natural() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Spades, Rank::Ace),  // player
        card(Suit::Clubs, Rank::Five),  // dealer up
        card(Suit::Hearts, Rank::King), // player
        card(Suit::Clubs, Rank::Nine),  // dealer hole
    ]))
    .unwrap();

    assert_eq!(round.player().value(), 11);
    assert_eq!(round.evaluate().unwrap(), None);
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn hitting_to_twenty_one_keeps_the_turn_open() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::Five),  // player
        card(Suit::Clubs, Rank::Nine),   // dealer up
        card(Suit::Spades, Rank::Six),   // player
        card(Suit::Diamonds, Rank::Two), // dealer hole
        card(Suit::Hearts, Rank::Ten),   // player hit
    ]))
    .unwrap();

    assert_eq!(round.play(Choice::Hit).unwrap(), None);
    assert_eq!(round.player().value(), 21);
    assert!(!round.is_first_hand());
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn player_bust_resolves_as_loss() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::King),   // player
        card(Suit::Clubs, Rank::Six),     // dealer up
        card(Suit::Spades, Rank::Queen),  // player
        card(Suit::Diamonds, Rank::Five), // dealer hole
        card(Suit::Hearts, Rank::Five),   // player hit
    ]))
    .unwrap();

    assert_eq!(round.play(Choice::Hit).unwrap(), Some(Outcome::Bust));
    assert_eq!(round.state(), RoundState::Resolved);
    assert!(!round.dealer_revealed());
    assert_eq!(round.dealer().len(), 2);

    let result = round.result().unwrap();
    assert_eq!(result.player_value, 25);
    assert_eq!(result.outcome.verdict(), Verdict::Loss);

    assert_eq!(round.hit().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn dealer_draws_through_sixteen() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::King),   // player
        card(Suit::Clubs, Rank::Six),     // dealer up
        card(Suit::Hearts, Rank::Queen),  // player
        card(Suit::Diamonds, Rank::Five), // dealer hole
        card(Suit::Spades, Rank::Five),   // dealer draw: 16
        card(Suit::Hearts, Rank::Two),    // dealer draw: 18
        card(Suit::Clubs, Rank::Nine),    // left in deck
    ]))
    .unwrap();

    round.stand().unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(round.dealer_revealed());

    let drawn = round.dealer_play().unwrap();
    assert_eq!(
        drawn,
        vec![card(Suit::Spades, Rank::Five), card(Suit::Hearts, Rank::Two)]
    );
    assert_eq!(round.dealer().value(), 18);
    assert_eq!(round.cards_remaining(), 1);

    assert_eq!(round.resolve().unwrap(), Outcome::Win);
    assert_eq!(round.state(), RoundState::Resolved);
}

#[test]
fn dealer_stands_on_seventeen_regardless_of_player() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::King),   // dealer up
        card(Suit::Hearts, Rank::Six),   // player
        card(Suit::Clubs, Rank::Seven),  // dealer hole
        card(Suit::Spades, Rank::Three), // never drawn
    ]))
    .unwrap();

    assert_eq!(round.play(Choice::Stand).unwrap(), Some(Outcome::Loss));
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.cards_remaining(), 1);

    let result = round.result().unwrap();
    assert_eq!(result.player_value, 16);
    assert_eq!(result.dealer_value, 17);
    assert!(result.dealer_revealed);
}

#[test]
fn dealer_aces_follow_sequential_rule() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::King),  // player
        card(Suit::Clubs, Rank::King),   // dealer up
        card(Suit::Hearts, Rank::Queen), // player
        card(Suit::Clubs, Rank::Ace),    // dealer hole: 11
        card(Suit::Spades, Rank::Five),  // dealer: 16
        card(Suit::Spades, Rank::Three), // dealer: 19
    ]))
    .unwrap();

    assert_eq!(round.play(Choice::Stand).unwrap(), Some(Outcome::Win));
    assert_eq!(round.dealer().len(), 4);
    assert_eq!(round.dealer().value(), 19);
}

#[test]
fn dealer_bust_wins_for_player() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::King),  // player
        card(Suit::Clubs, Rank::King),   // dealer up
        card(Suit::Hearts, Rank::Two),   // player
        card(Suit::Clubs, Rank::Six),    // dealer hole
        card(Suit::Spades, Rank::Nine),  // dealer: 25
    ]))
    .unwrap();

    assert_eq!(round.play(Choice::Stand).unwrap(), Some(Outcome::DealerBust));
    assert_eq!(round.result().unwrap().dealer_value, 25);
}

#[test]
fn equal_totals_push() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::King),  // player
        card(Suit::Clubs, Rank::Queen),  // dealer up
        card(Suit::Hearts, Rank::Eight), // player
        card(Suit::Clubs, Rank::Eight),  // dealer hole
    ]))
    .unwrap();

    assert_eq!(round.play(Choice::Stand).unwrap(), Some(Outcome::Push));
    assert_eq!(Outcome::Push.verdict(), Verdict::Draw);
}

#[test]
fn actions_rejected_out_of_turn() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::King),  // player
        card(Suit::Clubs, Rank::Queen),  // dealer up
        card(Suit::Hearts, Rank::Nine),  // player
        card(Suit::Clubs, Rank::Eight),  // dealer hole
    ]))
    .unwrap();

    assert_eq!(round.dealer_play().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.resolve().unwrap_err(), RoundError::InvalidState);

    round.stand().unwrap();
    assert_eq!(round.evaluate().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.hit().unwrap_err(), RoundError::InvalidState);

    round.dealer_play().unwrap();
    round.resolve().unwrap();
    assert_eq!(round.resolve().unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        round.play(Choice::Hit).unwrap_err(),
        RoundError::InvalidState
    );
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::Five),    // player
        card(Suit::Clubs, Rank::Nine),     // dealer up
        card(Suit::Spades, Rank::Six),     // player
        card(Suit::Diamonds, Rank::Seven), // dealer hole
    ]))
    .unwrap();

    assert_eq!(
        round.hit().unwrap_err(),
        RoundError::Deck(DeckError::Empty)
    );
}

#[test]
fn dealer_with_empty_deck_returns_error() {
    let mut round = Round::deal(deck_from_draws(&[
        card(Suit::Hearts, Rank::King),  // player
        card(Suit::Clubs, Rank::Two),    // dealer up
        card(Suit::Hearts, Rank::Nine),  // player
        card(Suit::Clubs, Rank::Three),  // dealer hole
    ]))
    .unwrap();

    assert_eq!(
        round.play(Choice::Stand).unwrap_err(),
        RoundError::Deck(DeckError::Empty)
    );
}

#[test]
fn choice_tokens() {
    assert_eq!(Choice::parse("1"), Some(Choice::Hit));
    assert_eq!(Choice::parse("2"), Some(Choice::Stand));
    assert_eq!(Choice::parse(""), None);
    assert_eq!(Choice::parse("hit"), None);
    assert_eq!(Choice::parse(" 1"), None);
}

#[test]
fn score_counts_each_verdict_once() {
    let mut score = ScoreTracker::new();
    assert_eq!(score.to_string(), "[W: 0] [L: 0] [D: 0]");

    let outcomes = [
        Outcome::Win,
        Outcome::DealerBust,
        Outcome::Bust,
        Outcome::Push,
        Outcome::Blackjack,
        Outcome::Loss,
        Outcome::Loss,
    ];
    for outcome in outcomes {
        score.record(outcome.verdict());
    }

    assert_eq!(score.wins(), 3);
    assert_eq!(score.losses(), 3);
    assert_eq!(score.draws(), 1);
    assert_eq!(score.rounds(), outcomes.len() as u32);
    assert_eq!(score.to_string(), "[W: 3] [L: 3] [D: 1]");

    score.record_draw();
    score.record_win();
    score.record_loss();
    assert_eq!(score.rounds(), 10);
}

#[test]
fn outcome_messages() {
    assert_eq!(Outcome::Blackjack.to_string(), "Blackjack! You Won!");
    assert_eq!(Outcome::Bust.to_string(), "You busted!");
    assert_eq!(Outcome::DealerBust.to_string(), "Dealer busted, You Win!");
    assert_eq!(Outcome::Win.to_string(), "You beat the dealer, You Won!");
    assert_eq!(Outcome::Loss.to_string(), "You lost :(");
    assert_eq!(Outcome::Push.to_string(), "Push, nobody won!");
}
