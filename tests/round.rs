//! Round integration tests.

use std::collections::HashSet;

use bjround::{
    ActionError, BidError, Card, DECK_SIZE, DealerHand, Deck, ExhaustedDeckError, GameOptions,
    Hand, Outcome, Phase, Rank, Round, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Round whose deck deals `draws` in order: player, dealer hole, player,
/// dealer up, then hits and dealer draws.
fn round_with(balance: u64, draws: &[Card]) -> Round {
    Round::with_deck(balance, GameOptions::default(), Deck::stacked(draws))
}

fn hand_of(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

#[test]
fn hand_values_reduce_aces_greedily() {
    let blackjack = hand_of(&[card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Spades)]);
    assert_eq!(blackjack.value(), 21);
    assert!(blackjack.is_natural_blackjack());
    assert!(blackjack.is_soft());

    let two_aces = hand_of(&[card(Rank::Ace, Suit::Hearts), card(Rank::Ace, Suit::Spades)]);
    assert_eq!(two_aces.value(), 12);

    let three_aces = hand_of(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
    ]);
    assert_eq!(three_aces.value(), 13);
    assert!(!three_aces.is_natural_blackjack());

    let hard = hand_of(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Six, Suit::Spades),
        card(Rank::Ten, Suit::Clubs),
    ]);
    assert_eq!(hard.value(), 17);
    assert!(!hard.is_soft());

    let bust = hand_of(&[
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
    ]);
    assert_eq!(bust.value(), 22);
    assert!(bust.is_bust());

    let three_card_21 = hand_of(&[
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
    ]);
    assert_eq!(three_card_21.value(), 21);
    assert!(!three_card_21.is_natural_blackjack());
}

#[test]
fn dealer_hand_hides_first_card_until_revealed() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Rank::Ten, Suit::Hearts));
    dealer.add_card(card(Rank::Six, Suit::Clubs));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards(), &[card(Rank::Six, Suit::Clubs)]);
    assert_eq!(dealer.visible_value(), 6);
    assert_eq!(dealer.value(), None);
    assert_eq!(dealer.hole_card(), None);
    assert_eq!(dealer.len(), 2);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_cards().len(), 2);
    assert_eq!(dealer.value(), Some(16));
    assert_eq!(dealer.hole_card(), Some(&card(Rank::Ten, Suit::Hearts)));
}

#[test]
fn card_display() {
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
    assert_eq!(card(Rank::Two, Suit::Diamonds).to_string(), "2 of Diamonds");
    assert_eq!(card(Rank::Queen, Suit::Clubs).to_string(), "Queen of Clubs");
}

#[test]
fn fresh_deck_has_every_card_once_and_then_runs_out() {
    let mut deck = Deck::from_seed(1);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(seen.insert(deck.deal_card().unwrap()));
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.deal_card(), Err(ExhaustedDeckError));
}

#[test]
fn seeded_decks_repeat() {
    let mut a = Deck::from_seed(5);
    let mut b = Deck::from_seed(5);
    for _ in 0..DECK_SIZE {
        assert_eq!(a.deal_card(), b.deal_card());
    }

    let first: Vec<Card> = {
        let mut deck = Deck::from_seed(5);
        (0..DECK_SIZE).map(|_| deck.deal_card().unwrap()).collect()
    };
    let second: Vec<Card> = {
        let mut deck = Deck::from_seed(6);
        (0..DECK_SIZE).map(|_| deck.deal_card().unwrap()).collect()
    };
    assert_ne!(first, second);
}

#[test]
fn bid_errors_leave_round_in_bidding() {
    let mut round = Round::new(100, GameOptions::default(), 1);

    assert_eq!(round.place_bid(0).unwrap_err(), BidError::ZeroOrNegativeBid);
    assert_eq!(round.place_bid(-5).unwrap_err(), BidError::ZeroOrNegativeBid);
    assert_eq!(
        round.place_bid(101).unwrap_err(),
        BidError::InsufficientFunds {
            balance: 100,
            bid: 101
        }
    );
    assert!(BidError::ZeroOrNegativeBid.is_invalid_bid());

    assert_eq!(round.phase(), Phase::Bidding);
    assert_eq!(round.balance(), 100);
    assert_eq!(round.bid(), 0);
    assert!(round.player_hand().is_empty());
    assert!(round.dealer_hand().is_empty());
    assert_eq!(round.outcome(), None);

    round.place_bid(100).unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.place_bid(10).unwrap_err(), BidError::InvalidState);
    assert_eq!(round.bid(), 100);
}

#[test]
fn bid_with_short_deck_is_rejected() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );

    assert_eq!(round.place_bid(10).unwrap_err(), BidError::NotEnoughCards);
    assert!(!BidError::NotEnoughCards.is_invalid_bid());
    assert_eq!(round.phase(), Phase::Bidding);
    assert_eq!(round.cards_remaining(), 3);
}

#[test]
fn actions_rejected_before_bidding() {
    let mut round = Round::new(100, GameOptions::default(), 2);

    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.double_down().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
    assert!(!round.can_double_down());
}

#[test]
fn opening_deal_alternates_and_hides_hole_card() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Six, Suit::Clubs),   // dealer hole
            card(Rank::Seven, Suit::Diamonds), // player
            card(Rank::Nine, Suit::Spades), // dealer up
        ],
    );

    round.place_bid(20).unwrap();

    assert_eq!(
        round.player_hand().cards(),
        &[card(Rank::Ten, Suit::Hearts), card(Rank::Seven, Suit::Diamonds)]
    );
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.dealer_hand().visible_cards(), &[card(Rank::Nine, Suit::Spades)]);
    assert_eq!(round.dealer_hand().value(), None);
    assert_eq!(round.balance(), 100);
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn dealer_draws_to_seventeen_and_wins() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),     // player
            card(Rank::Six, Suit::Clubs),      // dealer hole
            card(Rank::Seven, Suit::Diamonds), // player
            card(Rank::Nine, Suit::Spades),    // dealer up
            card(Rank::Three, Suit::Hearts),   // dealer draw
        ],
    );

    round.place_bid(20).unwrap();
    assert_eq!(round.player_hand().value(), 17);
    assert_eq!(round.dealer_hand().visible_value(), 9);

    let result = round.stand().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.player_value, 17);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.payout, -20);
    assert_eq!(result.balance, 80);

    assert_eq!(round.phase(), Phase::Settled);
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
    assert_eq!(round.balance(), 80);
    assert!(round.dealer_hand().is_hole_revealed());
    assert_eq!(round.dealer_hand().value(), Some(18));
}

#[test]
fn natural_blackjack_overrides_tie_with_dealer_natural() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ace, Suit::Hearts),   // player
            card(Rank::King, Suit::Clubs),   // dealer hole
            card(Rank::King, Suit::Diamonds), // player
            card(Rank::Ace, Suit::Spades),   // dealer up
        ],
    );

    round.place_bid(15).unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.payout, 22);
    assert_eq!(round.balance(), 122);
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ace, Suit::Hearts),    // player
            card(Rank::Ten, Suit::Clubs),     // dealer hole
            card(Rank::King, Suit::Diamonds), // player
            card(Rank::Seven, Suit::Spades),  // dealer up
        ],
    );

    round.place_bid(20).unwrap();
    assert!(round.player_hand().is_natural_blackjack());

    let result = round.stand().unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(round.balance(), 130);
}

#[test]
fn natural_blackjack_overrides_dealer_bust() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ace, Suit::Hearts),    // player
            card(Rank::Ten, Suit::Clubs),     // dealer hole
            card(Rank::Queen, Suit::Diamonds), // player
            card(Rank::Six, Suit::Spades),    // dealer up
            card(Rank::King, Suit::Hearts),   // dealer draw
        ],
    );

    round.place_bid(10).unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(round.balance(), 115);
}

#[test]
fn player_bust_settles_immediately() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Five, Suit::Clubs),  // dealer hole
            card(Rank::Six, Suit::Diamonds), // player
            card(Rank::Nine, Suit::Spades), // dealer up
            card(Rank::King, Suit::Hearts), // player hit
        ],
    );

    round.place_bid(20).unwrap();
    let drawn = round.hit().unwrap();
    assert_eq!(drawn, card(Rank::King, Suit::Hearts));

    assert_eq!(round.phase(), Phase::Settled);
    assert_eq!(round.outcome(), Some(Outcome::PlayerBust));
    assert_eq!(round.balance(), 80);
    assert!(round.dealer_hand().is_hole_revealed());
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn dealer_bust_pays_even_money() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Ten, Suit::Clubs),   // dealer hole
            card(Rank::Nine, Suit::Diamonds), // player
            card(Rank::Six, Suit::Spades),  // dealer up
            card(Rank::King, Suit::Hearts), // dealer draw
        ],
    );

    round.place_bid(25).unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.payout, 25);
    assert_eq!(round.balance(), 125);
}

#[test]
fn higher_hand_wins_and_equal_hands_tie() {
    let mut win = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ],
    );
    win.place_bid(10).unwrap();
    assert_eq!(win.stand().unwrap().outcome, Outcome::PlayerWins);
    assert_eq!(win.balance(), 110);

    let mut tie = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );
    tie.place_bid(10).unwrap();
    let result = tie.stand().unwrap();
    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.payout, 0);
    assert_eq!(tie.balance(), 100);
}

#[test]
fn double_down_once_then_turn_continues() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Five, Suit::Hearts),   // player
            card(Rank::Ten, Suit::Clubs),     // dealer hole
            card(Rank::Four, Suit::Diamonds), // player
            card(Rank::Seven, Suit::Spades),  // dealer up
            card(Rank::Two, Suit::Hearts),    // double draw
            card(Rank::Ten, Suit::Diamonds),  // player hit
        ],
    );

    round.place_bid(20).unwrap();
    assert!(round.can_double_down());

    let drawn = round.double_down().unwrap();
    assert_eq!(drawn, Some(card(Rank::Two, Suit::Hearts)));
    assert_eq!(round.bid(), 40);
    assert!(round.is_bid_doubled());
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_hand().len(), 3);

    assert!(!round.can_double_down());
    assert_eq!(round.double_down().unwrap(), None);
    assert_eq!(round.bid(), 40);
    assert_eq!(round.player_hand().len(), 3);

    round.hit().unwrap();
    assert_eq!(round.player_hand().value(), 21);

    let result = round.stand().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.bid, 40);
    assert_eq!(round.balance(), 140);
}

#[test]
fn double_down_needs_twice_the_bid() {
    let mut round = round_with(
        30,
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
        ],
    );

    round.place_bid(20).unwrap();
    assert!(!round.can_double_down());
    assert_eq!(round.double_down().unwrap(), None);
    assert_eq!(round.bid(), 20);
    assert!(!round.is_bid_doubled());
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn double_down_into_bust_loses_doubled_bid() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::King, Suit::Hearts),
        ],
    );

    round.place_bid(20).unwrap();
    round.double_down().unwrap();

    assert_eq!(round.outcome(), Some(Outcome::PlayerBust));
    assert_eq!(round.bid(), 40);
    assert_eq!(round.balance(), 60);
}

#[test]
fn settle_twice_pays_once() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );

    round.place_bid(20).unwrap();
    let first = round.settle();
    assert_eq!(first.outcome, Outcome::PlayerWins);
    assert_eq!(round.balance(), 120);

    let second = round.settle();
    assert_eq!(first, second);
    assert_eq!(round.balance(), 120);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn settle_during_bidding_is_a_free_tie() {
    let mut round = Round::new(100, GameOptions::default(), 3);

    let result = round.settle();
    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.bid, 0);
    assert_eq!(result.payout, 0);
    assert_eq!(round.balance(), 100);
    assert_eq!(round.phase(), Phase::Settled);
    assert_eq!(round.place_bid(10).unwrap_err(), BidError::InvalidState);
}

#[test]
fn exhausted_deck_during_dealer_draw_aborts() {
    let mut round = round_with(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Three, Suit::Spades),
        ],
    );

    round.place_bid(20).unwrap();
    assert_eq!(
        round.stand().unwrap_err(),
        ActionError::ExhaustedDeck(ExhaustedDeckError)
    );
    assert_eq!(round.phase(), Phase::DealerTurn);
    assert_eq!(round.outcome(), None);
    assert_eq!(round.balance(), 100);
}

#[test]
fn options_change_dealer_threshold_and_blackjack_payout() {
    let options = GameOptions::default()
        .with_dealer_stands_on(18)
        .with_blackjack_pays(1.2);
    assert_eq!(options.dealer_stands_on, 18);

    let mut round = Round::with_deck(
        100,
        options,
        Deck::stacked(&[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
        ]),
    );
    round.place_bid(10).unwrap();
    let result = round.stand().unwrap();
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.outcome, Outcome::DealerWins);

    let mut blackjack = Round::with_deck(
        100,
        options,
        Deck::stacked(&[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Jack, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ]),
    );
    blackjack.place_bid(25).unwrap();
    blackjack.stand().unwrap();
    assert_eq!(blackjack.balance(), 130);
}

#[test]
fn payout_truncates_toward_zero() {
    assert_eq!(Outcome::Blackjack.payout(15, 1.5), 22);
    assert_eq!(Outcome::Blackjack.payout(1, 1.5), 1);
    assert_eq!(Outcome::PlayerBust.payout(15, 1.5), -15);
    assert_eq!(Outcome::DealerBust.payout(15, 1.5), 15);
    assert_eq!(Outcome::Tie.payout(15, 1.5), 0);
    assert!(Outcome::Blackjack.is_player_win());
    assert!(!Outcome::Tie.is_player_win());
}

#[test]
fn seeded_rounds_deal_the_same_cards() {
    let mut a = Round::new(100, GameOptions::default(), 99);
    let mut b = Round::new(100, GameOptions::default(), 99);
    a.place_bid(10).unwrap();
    b.place_bid(10).unwrap();

    assert_eq!(a.player_hand(), b.player_hand());
    assert_eq!(a.dealer_hand().visible_cards(), b.dealer_hand().visible_cards());
    assert_eq!(a.stand().unwrap(), b.stand().unwrap());
}
