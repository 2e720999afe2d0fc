//! Game integration tests.

use twentyone::{
    ActionError, BetError, Card, Chip, DECK_SIZE, DealError, Game, GamePhase, InsuranceError,
    InsuranceOutcome, MIN_BET, Rank, RoundOutcome, STARTING_CHIPS, SeatResult, SettleError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A game in developer mode with both opening pairs staged.
fn rigged_game(player: [Card; 2], dealer: [Card; 2]) -> Game {
    let mut game = Game::new(0);
    game.toggle_dev_mode();
    game.set_player_rig(player);
    game.set_dealer_rig(dealer);
    game
}

#[test]
fn new_game_starts_with_the_house_bankroll() {
    let game = Game::new(7);
    assert_eq!(game.chips(), STARTING_CHIPS);
    assert_eq!(game.bet(), 0);
    assert_eq!(game.phase(), GamePhase::Waiting);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.state().rounds_played, 0);
}

#[test]
fn chip_denominations_cover_the_table() {
    assert_eq!(Chip::STANDARD.len(), 6);
    assert_eq!(Chip::STANDARD[0].value(), MIN_BET);
    assert_eq!(Chip::STANDARD[5].value(), STARTING_CHIPS);
    assert_eq!(Chip::Five.value(), 5);
}

#[test]
fn bets_accumulate_until_the_deal() {
    let mut game = Game::new(1);
    game.place_bet(50).unwrap();
    game.place_bet(50).unwrap();
    assert_eq!(game.bet(), 100);
    assert_eq!(game.chips(), 900);
}

#[test]
fn clear_bet_refunds_the_table() {
    let mut game = Game::new(1);
    game.place_bet(300).unwrap();
    assert_eq!(game.clear_bet().unwrap(), 300);
    assert_eq!(game.bet(), 0);
    assert_eq!(game.chips(), STARTING_CHIPS);

    // Clearing an empty table is a harmless zero refund.
    assert_eq!(game.clear_bet().unwrap(), 0);
}

#[test]
fn bet_validation_guards_the_bankroll() {
    let mut game = Game::new(1);
    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.place_bet(1001).unwrap_err(), BetError::InsufficientChips);

    game.place_bet(1000).unwrap();
    assert_eq!(game.place_bet(1).unwrap_err(), BetError::InsufficientChips);
    assert_eq!(game.bet(), 1000);
    assert_eq!(game.chips(), 0);
}

#[test]
fn betting_is_refused_mid_round() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Nine)],
        [card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.place_bet(50).unwrap_err(), BetError::InvalidState);
    assert_eq!(game.clear_bet().unwrap_err(), BetError::InvalidState);
    assert_eq!(game.bet(), 100);
    assert_eq!(game.chips(), 900);
}

#[test]
fn the_deal_requires_the_table_minimum() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Nine)],
        [card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)],
    );
    game.place_bet(5).unwrap();
    assert_eq!(game.start_round().unwrap_err(), DealError::BetBelowMinimum);
    assert_eq!(game.phase(), GamePhase::Waiting);

    // Topping up to the exact minimum is enough.
    game.place_bet(5).unwrap();
    game.start_round().unwrap();
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn the_opening_deal_reaches_the_playing_phase() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Nine)],
        [card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.chips(), 900);
    assert_eq!(game.bet(), 100);
    assert_eq!(game.state().initial_bet, 100);

    assert_eq!(game.state().player_hand.total(), 19);
    assert_eq!(game.state().dealer_hand.len(), 2);
    assert_eq!(game.state().dealer_hand.visible_total(), 7);
    assert!(!game.state().dealer_hand.cards()[1].face_up);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);

    assert!(game.state().can_surrender);
    assert!(!game.state().can_insurance);

    // Only one deal per round.
    assert_eq!(game.start_round().unwrap_err(), DealError::InvalidState);
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::King)],
        [card(Suit::Clubs, Rank::Six), card(Suit::Diamonds, Rank::Five)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert!(game.state().player_hand.is_blackjack());
    assert_eq!(game.phase(), GamePhase::Settled(RoundOutcome::PlayerWin));
    assert!(game.state().dealer_hand.cards()[1].face_up);

    let settlement = game.settle_round().unwrap();
    assert_eq!(settlement.outcome, RoundOutcome::PlayerWin);
    assert!(!settlement.surrendered);
    assert_eq!(settlement.main.result, SeatResult::Win);
    assert_eq!(settlement.main.stake, 100);
    assert_eq!(settlement.main.payout, 250);
    assert_eq!(settlement.winnings, 250);
    assert_eq!(settlement.rounds_played, 1);
    assert_eq!(game.chips(), 1150);
}

#[test]
fn matching_blackjacks_push() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::King)],
        [card(Suit::Clubs, Rank::King), card(Suit::Diamonds, Rank::Ace)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    // King up, so there is no insurance window to pass through.
    assert_eq!(game.phase(), GamePhase::Settled(RoundOutcome::Push));

    let settlement = game.settle_round().unwrap();
    assert_eq!(settlement.main.result, SeatResult::Push);
    assert_eq!(settlement.main.payout, 100);
    assert_eq!(settlement.winnings, 100);
    assert_eq!(game.chips(), STARTING_CHIPS);
}

#[test]
fn dealer_blackjack_without_an_ace_up_settles_at_once() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Nine)],
        [card(Suit::Clubs, Rank::Queen), card(Suit::Diamonds, Rank::Ace)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.phase(), GamePhase::Settled(RoundOutcome::DealerWin));
    assert!(game.state().dealer_hand.cards()[1].face_up);

    let settlement = game.settle_round().unwrap();
    assert_eq!(settlement.main.result, SeatResult::Lose);
    assert_eq!(settlement.winnings, 0);
    assert_eq!(game.chips(), 900);
}

#[test]
fn an_ace_up_offers_insurance_that_pays_two_to_one() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Eight)],
        [card(Suit::Spades, Rank::Ace), card(Suit::Clubs, Rank::King)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.phase(), GamePhase::Insurance);
    assert!(game.state().can_insurance);
    assert!(!game.state().can_surrender);
    assert!(!game.state().dealer_hand.cards()[1].face_up);

    // Half the main bet buys cover; the dealer has it, so 2:1 comes back.
    assert_eq!(game.take_insurance().unwrap(), 50);
    assert_eq!(game.chips(), 1000);
    assert_eq!(game.state().insurance_outcome, Some(InsuranceOutcome::Won));
    assert_eq!(game.state().insurance_bet, 0);
    assert_eq!(game.phase(), GamePhase::Settled(RoundOutcome::DealerWin));
    assert!(game.state().dealer_hand.cards()[1].face_up);

    // The main bet is lost; insurance already balanced the books.
    let settlement = game.settle_round().unwrap();
    assert_eq!(settlement.main.result, SeatResult::Lose);
    assert_eq!(settlement.winnings, 0);
    assert_eq!(game.chips(), 1000);
}

#[test]
fn declining_insurance_plays_the_round_out() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Eight)],
        [card(Suit::Spades, Rank::Ace), card(Suit::Clubs, Rank::Nine)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.phase(), GamePhase::Insurance);
    game.decline_insurance().unwrap();

    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.chips(), 900);
    assert_eq!(game.state().insurance_outcome, None);
    assert!(!game.state().insurance_notice);
    assert!(!game.state().dealer_hand.cards()[1].face_up);
    assert_eq!(game.state().dealer_hand.visible_total(), 11);

    // The window is closed for the rest of the round.
    assert_eq!(
        game.take_insurance().unwrap_err(),
        InsuranceError::InvalidState
    );

    game.stand().unwrap();
    assert_eq!(game.phase(), GamePhase::Settled(RoundOutcome::DealerWin));

    let settlement = game.settle_round().unwrap();
    assert_eq!(settlement.winnings, 0);
    assert_eq!(game.chips(), 900);
}

#[test]
fn insurance_needs_chips_to_cover_the_stake() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Eight)],
        [card(Suit::Spades, Rank::Ace), card(Suit::Clubs, Rank::King)],
    );
    game.place_bet(1000).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.phase(), GamePhase::Insurance);
    assert_eq!(
        game.take_insurance().unwrap_err(),
        InsuranceError::InsufficientChips
    );
    assert_eq!(game.phase(), GamePhase::Insurance);
    assert_eq!(game.chips(), 0);

    game.decline_insurance().unwrap();
    assert_eq!(game.phase(), GamePhase::Settled(RoundOutcome::DealerWin));

    let settlement = game.settle_round().unwrap();
    assert_eq!(settlement.winnings, 0);
    assert_eq!(game.chips(), 0);
}

#[test]
fn surrender_refunds_half_the_stake() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Six)],
        [card(Suit::Clubs, Rank::Nine), card(Suit::Spades, Rank::Eight)],
    );
    game.place_bet(200).unwrap();
    game.start_round().unwrap();

    assert!(game.state().can_surrender);
    assert_eq!(game.surrender().unwrap(), 100);

    assert_eq!(game.chips(), 900);
    assert_eq!(game.phase(), GamePhase::Settled(RoundOutcome::PlayerWin));
    assert!(game.state().has_surrendered);
    assert!(!game.state().dealer_hand.cards()[1].face_up);

    // The refund already happened; settlement moves no further chips.
    let settlement = game.settle_round().unwrap();
    assert_eq!(settlement.outcome, RoundOutcome::PlayerWin);
    assert!(settlement.surrendered);
    assert_eq!(settlement.main.stake, 200);
    assert_eq!(settlement.main.payout, 0);
    assert_eq!(settlement.winnings, 0);
    assert_eq!(game.chips(), 900);
}

#[test]
fn the_surrender_window_closes_after_the_first_action() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Five), card(Suit::Diamonds, Rank::Six)],
        [card(Suit::Clubs, Rank::Nine), card(Suit::Spades, Rank::Eight)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert!(game.state().can_surrender);
    game.hit().unwrap();
    assert!(!game.state().can_surrender);
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);
}

#[test]
fn insurance_rounds_never_offer_surrender() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Eight)],
        [card(Suit::Spades, Rank::Ace), card(Suit::Clubs, Rank::Nine)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.surrender().unwrap_err(), ActionError::InvalidState);

    game.decline_insurance().unwrap();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);
}

#[test]
fn split_needs_a_pair_or_two_ten_values() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Nine), card(Suit::Diamonds, Rank::Ten)],
        [card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    assert_eq!(game.split().unwrap_err(), ActionError::CannotSplit);
    assert_eq!(
        game.switch_active_seat().unwrap_err(),
        ActionError::NotSplit
    );

    // Mixed ten-value cards count as a pair at this table.
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Jack), card(Suit::Diamonds, Rank::Queen)],
        [card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    game.split().unwrap();
    assert_eq!(game.state().hand_count(), 2);
}

#[test]
fn split_requires_chips_and_happens_once() {
    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Eight), card(Suit::Diamonds, Rank::Eight)],
        [card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)],
    );
    game.place_bet(600).unwrap();
    game.start_round().unwrap();

    // 400 chips cannot match a 600 stake.
    assert_eq!(game.split().unwrap_err(), ActionError::InsufficientChips);

    let mut game = rigged_game(
        [card(Suit::Hearts, Rank::Eight), card(Suit::Diamonds, Rank::Eight)],
        [card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)],
    );
    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    game.split().unwrap();
    assert_eq!(game.state().hand_count(), 2);
    assert_eq!(game.state().split_bet, 100);
    assert_eq!(game.chips(), 800);
    assert_eq!(game.split().unwrap_err(), ActionError::AlreadySplit);
}

#[test]
fn actions_outside_a_round_are_no_ops() {
    let mut game = Game::new(3);
    let before = game.state().clone();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.double_down().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.split().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.switch_active_seat().unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(game.surrender().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.take_insurance().unwrap_err(),
        InsuranceError::InvalidState
    );
    assert_eq!(
        game.decline_insurance().unwrap_err(),
        InsuranceError::InvalidState
    );
    assert_eq!(game.settle_round().unwrap_err(), SettleError::InvalidState);
    assert_eq!(game.start_round().unwrap_err(), DealError::BetBelowMinimum);

    assert_eq!(*game.state(), before);
}

#[test]
fn a_rig_shapes_exactly_one_deal() {
    let mut game = Game::new(9);
    assert!(game.toggle_dev_mode());
    // Two copies of one card can never come off a real deck, so a rigged
    // hand is unmistakable.
    let doubles = [card(Suit::Spades, Rank::King), card(Suit::Spades, Rank::King)];
    game.set_player_rig(doubles);
    game.set_dealer_rig([card(Suit::Clubs, Rank::Ten), card(Suit::Diamonds, Rank::Seven)]);

    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    let player = game.state().player_hand.cards();
    assert_eq!([player[0], player[1]], doubles);
    assert_eq!(game.state().dealer_hand.cards()[0].rank, Rank::Ten);

    // The deal used the staged cards up.
    assert!(game.state().player_rig.is_none());
    assert!(game.state().dealer_rig.is_none());

    game.stand().unwrap();
    game.settle_round().unwrap();

    // The next deal falls back to the shuffled deck.
    game.place_bet(100).unwrap();
    game.start_round().unwrap();
    let player = game.state().player_hand.cards();
    assert_ne!([player[0], player[1]], doubles);
}

#[test]
fn rigs_are_discarded_unused_while_dev_mode_is_off() {
    let mut game = Game::new(9);
    let staged = [card(Suit::Diamonds, Rank::Nine), card(Suit::Diamonds, Rank::Nine)];
    game.set_player_rig(staged);
    game.set_dealer_rig([card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)]);

    game.place_bet(100).unwrap();
    game.start_round().unwrap();

    // The deal threw the staged cards away without applying them.
    let player = game.state().player_hand.cards();
    assert_ne!([player[0], player[1]], staged);
    assert!(game.state().player_rig.is_none());
    assert!(game.state().dealer_rig.is_none());
}

#[test]
fn toggling_dev_mode_drops_only_the_player_rig() {
    let mut game = Game::new(9);
    game.set_player_rig([card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Nine)]);
    game.set_dealer_rig([card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Eight)]);

    assert!(game.toggle_dev_mode());
    assert!(game.state().player_rig.is_none());
    assert!(game.state().dealer_rig.is_some());

    game.clear_dealer_rig();
    assert!(game.state().dealer_rig.is_none());

    game.set_player_rig([card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace)]);
    game.clear_player_rig();
    assert!(game.state().player_rig.is_none());
}
