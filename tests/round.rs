//! Deck, scoring and round engine tests.

use std::collections::HashSet;

use bjcore::{
    ActionError, BetError, Card, DECK_SIZE, DealEvent, Deck, DeckError, Hand, Outcome, Phase,
    RoundState, Seat, Suit, calc_value, evaluate_cards,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Round in the `Dealing` phase whose deck yields `draws` in order.
fn stacked(chips: u32, bet: u32, draws: &[Card]) -> RoundState {
    RoundState::new(chips)
        .place_bet_with_deck(bet, Deck::from_draw_order(draws.iter().copied()), 0)
        .unwrap()
}

fn draw_all(deck: &mut Deck) -> Vec<Card> {
    let mut cards = Vec::new();
    while let Ok(card) = deck.draw() {
        cards.push(card);
    }
    cards
}

#[test]
fn new_deck_holds_each_card_once() {
    let mut deck = Deck::new();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let unique: HashSet<(u8, Suit)> = deck.cards().iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(|c| c.face_up));

    for n in 1..=10 {
        deck.draw().unwrap();
        assert_eq!(deck.remaining(), DECK_SIZE - n);
    }
}

#[test]
fn new_deck_is_in_canonical_order() {
    let deck = Deck::new();
    assert_eq!(deck.cards()[0], card(Suit::Hearts, 1));
    assert_eq!(deck.cards()[12], card(Suit::Hearts, 13));
    assert_eq!(deck.cards()[13], card(Suit::Diamonds, 1));
    assert_eq!(deck.cards()[51], card(Suit::Spades, 13));
}

#[test]
fn drawing_from_empty_deck_fails() {
    let mut deck = Deck::new();
    let drawn = draw_all(&mut deck);
    assert_eq!(drawn.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DeckError::Empty);
}

#[test]
fn same_seed_gives_same_draw_order() {
    let mut first = Deck::new();
    first.shuffle_seeded(1234);
    let mut second = Deck::new();
    second.shuffle_seeded(1234);

    let first = draw_all(&mut first);
    assert_eq!(first, draw_all(&mut second));

    let unique: HashSet<(u8, Suit)> = first.iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let mut other = Deck::new();
    other.shuffle_seeded(4321);
    assert_ne!(first, draw_all(&mut other));
}

#[test]
fn shuffle_returns_the_seed_it_used() {
    let mut entropy = ChaCha8Rng::seed_from_u64(5);
    let mut deck = Deck::new();
    assert_eq!(deck.shuffle(Some(77), &mut entropy), 77);

    let mut reference = Deck::new();
    reference.shuffle_seeded(77);
    assert_eq!(deck, reference);

    let expected = ChaCha8Rng::seed_from_u64(5).next_u64();
    let mut fresh = Deck::new();
    assert_eq!(fresh.shuffle(None, &mut entropy), expected);
}

#[test]
fn hand_values() {
    let ace = card(Suit::Spades, 1);
    let king = card(Suit::Hearts, 13);
    let queen = card(Suit::Clubs, 12);

    assert_eq!(calc_value(&[ace, king], false), 21);
    assert_eq!(calc_value(&[ace, card(Suit::Hearts, 1)], false), 12);
    assert_eq!(
        calc_value(&[ace, card(Suit::Hearts, 1), card(Suit::Clubs, 9)], false),
        21
    );
    assert_eq!(calc_value(&[king, queen, card(Suit::Diamonds, 2)], false), 22);
    assert_eq!(calc_value(&[king, ace, card(Suit::Hearts, 1)], false), 22);
    assert_eq!(
        calc_value(
            &[
                card(Suit::Clubs, 9),
                ace,
                card(Suit::Hearts, 1),
                card(Suit::Diamonds, 1)
            ],
            false
        ),
        22
    );
    assert_eq!(calc_value(&[card(Suit::Clubs, 10), card(Suit::Clubs, 11)], false), 20);
    assert_eq!(calc_value(&[], false), 0);

    assert_eq!(evaluate_cards(&[ace, card(Suit::Clubs, 6)], false), (17, true));
    assert_eq!(
        evaluate_cards(&[ace, card(Suit::Clubs, 6), king], false),
        (17, false)
    );
}

#[test]
fn face_down_cards_count_only_when_asked() {
    let hidden = card(Suit::Spades, 10).face_down();
    assert_eq!(calc_value(&[hidden], false), 0);
    assert_eq!(calc_value(&[hidden], true), 10);

    let mut hand = Hand::new();
    hand.add_card(hidden);
    hand.add_card(card(Suit::Diamonds, 9));
    assert_eq!(hand.value(), 9);
    assert_eq!(hand.full_value(), 19);
    assert!(hand.has_hidden());

    let revealed = hand.reveal_hole().unwrap();
    assert!(revealed.face_up);
    assert_eq!(hand.value(), 19);
    assert!(hand.reveal_hole().is_none());
}

#[test]
fn outcome_table() {
    assert_eq!(Outcome::decide(18, 20), Outcome::Win);
    assert_eq!(Outcome::decide(22, 18), Outcome::Win);
    assert_eq!(Outcome::decide(20, 20), Outcome::Draw);
    assert_eq!(Outcome::decide(20, 22), Outcome::Lose);
    assert_eq!(Outcome::decide(19, 18), Outcome::Lose);
    assert_eq!(Outcome::decide(23, 22), Outcome::Lose);

    assert_eq!(Outcome::Win.chip_delta(25), 25);
    assert_eq!(Outcome::Lose.chip_delta(25), -25);
    assert_eq!(Outcome::Draw.chip_delta(25), 0);
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Spades, 10).to_string(), "10♠");
    assert_eq!(card(Suit::Hearts, 1).to_string(), "A♥");
    assert_eq!(card(Suit::Diamonds, 13).to_string(), "K♦");
    assert_eq!(card(Suit::Clubs, 5).face_down().to_string(), "??");
}

#[test]
fn opening_deal_alternates_with_one_hidden_card() {
    let round = stacked(
        100,
        25,
        &[
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 7),   // player
            card(Suit::Diamonds, 9), // dealer up
            card(Suit::Clubs, 8),    // player
        ],
    );
    assert_eq!(round.phase(), Phase::Dealing);

    let (round, events) = round.advance().unwrap();
    assert_eq!(
        events,
        vec![
            DealEvent::Dealt {
                seat: Seat::Dealer,
                card: card(Suit::Spades, 10).face_down(),
            },
            DealEvent::Dealt {
                seat: Seat::Player,
                card: card(Suit::Hearts, 7),
            },
            DealEvent::Dealt {
                seat: Seat::Dealer,
                card: card(Suit::Diamonds, 9),
            },
            DealEvent::Dealt {
                seat: Seat::Player,
                card: card(Suit::Clubs, 8),
            },
        ]
    );

    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_value(), 15);
    assert_eq!(round.dealer_value(false), 9);
    assert_eq!(round.dealer_value(true), 19);
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn holding_at_15_against_19_loses() {
    let round = stacked(
        100,
        25,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 7),
            card(Suit::Diamonds, 9),
            card(Suit::Clubs, 8),
        ],
    );
    let (round, _) = round.advance().unwrap();
    let round = round.hold().unwrap();
    assert_eq!(round.phase(), Phase::DealerTurn);

    let (round, events) = round.advance().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], DealEvent::Revealed(card(Suit::Spades, 10)));

    let settlement = *round.settlement().unwrap();
    assert_eq!(events[1], DealEvent::Resolved(settlement));
    assert_eq!(settlement.outcome, Outcome::Lose);
    assert_eq!(settlement.dealer_value, 19);
    assert_eq!(settlement.player_value, 15);
    assert_eq!(settlement.delta(), -25);

    assert_eq!(round.phase(), Phase::Resolved);
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.starting_chips(), 100);
    assert_eq!(round.chips(), 75);
    assert_eq!(round.outcome(), Some(Outcome::Lose));
}

#[test]
fn dealer_draws_until_reaching_player_total() {
    let round = stacked(
        100,
        10,
        &[
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 10),  // player
            card(Suit::Diamonds, 6), // dealer up
            card(Suit::Clubs, 9),    // player
            card(Suit::Hearts, 2),   // dealer draw -> 18
            card(Suit::Clubs, 3),    // dealer draw -> 21
            card(Suit::Spades, 5),   // never drawn
        ],
    );
    let (round, _) = round.advance().unwrap();
    let (round, events) = round.hold().unwrap().advance().unwrap();

    let drawn: Vec<Card> = events
        .iter()
        .filter_map(|e| match e {
            DealEvent::Dealt {
                seat: Seat::Dealer,
                card,
            } => Some(*card),
            _ => None,
        })
        .collect();
    assert_eq!(drawn, vec![card(Suit::Hearts, 2), card(Suit::Clubs, 3)]);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.outcome(), Some(Outcome::Lose));
    assert_eq!(round.chips(), 90);
}

#[test]
fn dealer_stands_below_17_when_already_ahead() {
    let round = stacked(
        100,
        10,
        &[
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 5),   // player
            card(Suit::Diamonds, 4), // dealer up
            card(Suit::Clubs, 8),    // player
            card(Suit::Hearts, 2),
        ],
    );
    let (round, _) = round.advance().unwrap();
    let (round, _) = round.hold().unwrap().advance().unwrap();

    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.dealer_value(false), 14);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.outcome(), Some(Outcome::Lose));
}

#[test]
fn dealer_bust_pays_the_bet() {
    let round = stacked(
        100,
        25,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 6),
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 13), // dealer draw -> 26
        ],
    );
    let (round, _) = round.advance().unwrap();
    let (round, _) = round.hold().unwrap().advance().unwrap();

    let settlement = round.settlement().unwrap();
    assert!(settlement.dealer_bust());
    assert_eq!(settlement.outcome, Outcome::Win);
    assert_eq!(round.chips(), 125);
}

#[test]
fn equal_totals_draw() {
    let round = stacked(
        50,
        20,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Clubs, 8),
        ],
    );
    let (round, _) = round.advance().unwrap();
    let (round, _) = round.hold().unwrap().advance().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Draw));
    assert_eq!(round.chips(), 50);
}

#[test]
fn player_natural_skips_turn_and_dealer_draws_nothing() {
    let round = stacked(
        100,
        25,
        &[
            card(Suit::Spades, 9),   // dealer hole
            card(Suit::Hearts, 1),   // player
            card(Suit::Diamonds, 7), // dealer up
            card(Suit::Clubs, 13),   // player
            card(Suit::Hearts, 2),   // would help the dealer
        ],
    );

    let mut steps = round.steps();
    for _ in 0..4 {
        steps.next().unwrap().unwrap();
    }
    assert_eq!(steps.state().phase(), Phase::DealerTurn);

    let rest: Vec<DealEvent> = steps.by_ref().map(Result::unwrap).collect();
    assert_eq!(rest.len(), 2);
    assert!(matches!(rest[0], DealEvent::Revealed(_)));

    let round = steps.into_state();
    assert!(round.player().is_natural());
    assert!(!round.dealer_must_draw());
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.outcome(), Some(Outcome::Win));
    assert_eq!(round.chips(), 125);
}

#[test]
fn dealer_natural_ends_player_turn() {
    let round = stacked(
        100,
        25,
        &[
            card(Suit::Spades, 1),    // dealer hole
            card(Suit::Hearts, 9),    // player
            card(Suit::Diamonds, 13), // dealer up
            card(Suit::Clubs, 7),     // player
        ],
    );
    let (round, events) = round.advance().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(round.phase(), Phase::Resolved);

    let settlement = round.settlement().unwrap();
    assert_eq!(settlement.dealer_value, 21);
    assert_eq!(settlement.player_value, 16);
    assert_eq!(settlement.outcome, Outcome::Lose);
}

#[test]
fn both_naturals_draw() {
    let round = stacked(
        100,
        25,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Diamonds, 13),
            card(Suit::Clubs, 12),
        ],
    );
    let (round, _) = round.advance().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Draw));
    assert_eq!(round.chips(), 100);
}

#[test]
fn hit_below_21_keeps_player_turn() {
    let round = stacked(
        100,
        10,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 2),
            card(Suit::Hearts, 3),
        ],
    );
    let (round, _) = round.advance().unwrap();
    let (round, hit) = round.hit().unwrap();

    assert_eq!(hit, card(Suit::Hearts, 3));
    assert!(hit.face_up);
    assert_eq!(round.player_value(), 15);
    assert_eq!(round.phase(), Phase::PlayerTurn);
}

#[test]
fn hitting_to_21_ends_turn() {
    let round = stacked(
        100,
        10,
        &[
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 10),  // player
            card(Suit::Diamonds, 7), // dealer up
            card(Suit::Clubs, 6),    // player
            card(Suit::Hearts, 5),   // player hit -> 21
            card(Suit::Clubs, 4),    // dealer draw -> 21
        ],
    );
    let (round, _) = round.advance().unwrap();
    let (round, _) = round.hit().unwrap();
    assert_eq!(round.phase(), Phase::DealerTurn);

    // Three-card 21 is not a natural: the dealer still draws.
    let (round, _) = round.advance().unwrap();
    assert_eq!(round.dealer().len(), 3);
    assert_eq!(round.outcome(), Some(Outcome::Draw));
}

#[test]
fn bust_loses_whatever_the_dealer_does() {
    let round = stacked(
        100,
        30,
        &[
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 10),  // player
            card(Suit::Diamonds, 7), // dealer up
            card(Suit::Clubs, 6),    // player
            card(Suit::Hearts, 13),  // player hit -> 26
            card(Suit::Clubs, 5),    // dealer draw -> 22
        ],
    );
    let (round, _) = round.advance().unwrap();
    let (round, _) = round.hit().unwrap();
    assert_eq!(round.phase(), Phase::DealerTurn);
    assert!(round.player().is_bust());

    let (round, _) = round.advance().unwrap();
    let settlement = round.settlement().unwrap();
    assert!(settlement.player_bust());
    assert!(settlement.dealer_bust());
    assert_eq!(settlement.outcome, Outcome::Lose);
    assert_eq!(round.chips(), 70);
}

#[test]
fn aces_placed_in_turn_can_bust() {
    let round = stacked(
        100,
        20,
        &[
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 1),   // player
            card(Suit::Diamonds, 9), // dealer up
            card(Suit::Clubs, 1),    // player -> 12
            card(Suit::Hearts, 3),   // player hit -> 15
            card(Suit::Clubs, 7),    // player hit -> 22
            card(Suit::Spades, 3),   // dealer draw -> 22
        ],
    );
    let (round, _) = round.advance().unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_value(), 12);

    let (round, _) = round.hit().unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_value(), 15);

    let (round, _) = round.hit().unwrap();
    assert_eq!(round.player_value(), 22);
    assert!(round.player().is_bust());
    assert_eq!(round.phase(), Phase::DealerTurn);

    let (round, _) = round.advance().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Lose));
    assert_eq!(round.chips(), 80);
}

#[test]
fn invalid_bets_leave_state_unchanged() {
    let mut entropy = ChaCha8Rng::seed_from_u64(1);
    let round = RoundState::new(100);

    assert_eq!(
        round.place_bet(0, None, &mut entropy).unwrap_err(),
        BetError::ZeroBet
    );
    assert_eq!(
        round.place_bet(101, None, &mut entropy).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(round, RoundState::new(100));
    assert_eq!(round.phase(), Phase::AwaitingBet);

    let dealing = round.place_bet(100, None, &mut entropy).unwrap();
    assert_eq!(
        dealing.place_bet(10, None, &mut entropy).unwrap_err(),
        BetError::InvalidState
    );
}

#[test]
fn actions_in_the_wrong_phase_are_rejected() {
    let waiting = RoundState::new(100);
    assert_eq!(waiting.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(waiting.hold().unwrap_err(), ActionError::InvalidState);
    assert_eq!(waiting.step().unwrap_err(), ActionError::InvalidState);
    assert_eq!(waiting.clone().steps().count(), 0);

    let dealing = stacked(
        100,
        10,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 6),
        ],
    );
    assert_eq!(dealing.hit().unwrap_err(), ActionError::InvalidState);

    let (turn, _) = dealing.advance().unwrap();
    assert_eq!(turn.step().unwrap_err(), ActionError::InvalidState);
    assert_eq!(turn.clone().steps().count(), 0);

    let (resolved, _) = turn.hold().unwrap().advance().unwrap();
    assert_eq!(resolved.hold().unwrap_err(), ActionError::InvalidState);
    assert_eq!(resolved.step().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn running_out_of_cards_is_reported() {
    let round = stacked(
        100,
        10,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 7),
        ],
    );
    assert_eq!(round.advance().unwrap_err(), ActionError::EmptyDeck);
}

#[test]
fn replaying_a_seed_deals_the_same_round() {
    let mut entropy = ChaCha8Rng::seed_from_u64(9);
    let original = RoundState::new(100).place_bet(25, None, &mut entropy).unwrap();
    let seed = original.seed().unwrap();

    let mut other_entropy = ChaCha8Rng::seed_from_u64(10_000);
    let replay = RoundState::new(100)
        .place_bet(25, Some(seed), &mut other_entropy)
        .unwrap();
    assert_eq!(replay.seed(), Some(seed));

    let (original, original_events) = original.advance().unwrap();
    let (replay, replay_events) = replay.advance().unwrap();
    assert_eq!(original_events, replay_events);
    assert_eq!(original, replay);
}

#[test]
fn steps_are_lazy() {
    let mut entropy = ChaCha8Rng::seed_from_u64(3);
    let round = RoundState::new(100)
        .place_bet(10, Some(3), &mut entropy)
        .unwrap();

    let mut steps = round.steps();
    steps.next().unwrap().unwrap();
    steps.next().unwrap().unwrap();

    let state = steps.state();
    assert_eq!(state.phase(), Phase::Dealing);
    assert_eq!(state.dealer().len(), 1);
    assert_eq!(state.player().len(), 1);
    assert_eq!(state.cards_remaining(), DECK_SIZE - 2);
}
