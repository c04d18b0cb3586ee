use rand::{rngs::StdRng, SeedableRng};

use uno_engine::{
    card::{Card, CardColor},
    console::ScriptedConsole,
    deck::Deck,
    error::UnoError,
    message::Message,
    player::Player,
    turn::{Penalty, RoundOutcome},
    uno::Uno,
};

fn red(number: u8) -> Card {
    Card::number(CardColor::Red, number)
}

fn blue(number: u8) -> Card {
    Card::number(CardColor::Blue, number)
}

/// A full deck where `top` is turned up after dealing to `seats` players and `next` is the first
/// card of the draw pile.
fn stacked_deck(seats: usize, top: Card, next: Card) -> Deck {
    let mut cards = Deck::new().cards().to_vec();
    for card in [top, next] {
        let position = cards.iter().position(|x| *x == card).unwrap();
        cards.remove(position);
    }
    let dealt = seats * 7;
    cards.insert(dealt, top);
    cards.insert(dealt + 1, next);
    Deck::from_cards(cards)
}

/// Alice sits first and holds `hand`; one computer player sits after her.
fn create_table(hand: Vec<Card>, top: Card, next: Card) -> Uno {
    let mut uno = Uno::with_deck("Test room", stacked_deck(2, top, next), StdRng::seed_from_u64(11));
    uno.join(Player::human("Alice").unwrap()).unwrap();
    uno.room_mut().generate_computers(2);
    uno.deal(&mut ScriptedConsole::default()).unwrap();

    uno.get_player_mut("Alice")
        .expect("Alice must be seated.")
        .deal_hand(hand);
    uno
}

/// Player 1 sits first, Alice after them.
fn create_table_computer_first(computer_hand: Vec<Card>) -> Uno {
    let mut uno = Uno::with_deck(
        "Test room",
        stacked_deck(2, red(5), red(9)),
        StdRng::seed_from_u64(11),
    );
    uno.room_mut().generate_computers(1);
    uno.join(Player::human("Alice").unwrap()).unwrap();
    uno.deal(&mut ScriptedConsole::default()).unwrap();

    uno.get_player_mut("Player 1")
        .expect("Player 1 must be seated.")
        .deal_hand(computer_hand);
    uno
}

fn alice(uno: &Uno) -> &Player {
    uno.get_player("Alice").expect("Alice must be seated.")
}

#[test]
fn play_turn_rejects_unplayable_card_then_plays_matching_one() {
    let mut uno = create_table(vec![red(7), blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::new(["1", "0"]);

    let outcome = uno.play_turn(&mut console).unwrap();

    assert_eq!(outcome, None);
    assert!(console.has_shown(&Message::UnplayableCard {
        show_playable: "P".to_string()
    }));
    assert_eq!(uno.top_discard(), Some(&red(7)));
    assert_eq!(alice(&uno).hand, vec![blue(2)]);
    assert!(alice(&uno).called_uno());
    assert_eq!(uno.get_current_turn_player_id(), Some("Player 1"));
}

#[test]
fn play_turn_reprompts_on_unknown_command_and_index_out_of_range() {
    let mut uno = create_table(vec![red(7), blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::new(["z", "9", "0"]);

    uno.play_turn(&mut console).unwrap();

    assert!(console.has_shown(&Message::UnknownCommand));
    assert!(console.has_shown(&Message::CardIndexOutOfRange { index: 9 }));
    assert_eq!(console.remaining_inputs(), 0);
    assert_eq!(uno.top_discard(), Some(&red(7)));
}

#[test]
fn play_turn_lists_hand_and_playable_cards_on_request() {
    let mut uno = create_table(vec![red(7), blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::new(["l", "P", "0"]);

    uno.play_turn(&mut console).unwrap();

    let hand_listings = console
        .shown
        .iter()
        .filter(|message| matches!(message, Message::HandHeader { .. }))
        .count();
    assert_eq!(hand_listings, 2);
    assert!(console.has_shown(&Message::HandCard {
        index: 1,
        card: blue(2)
    }));
}

#[test]
fn playing_the_last_card_wins_the_round() {
    let mut uno = create_table(vec![red(7)], red(5), red(9));
    let mut console = ScriptedConsole::new(["0"]);

    let outcome = uno.play_turn(&mut console).unwrap();

    assert_eq!(
        outcome,
        Some(RoundOutcome::Won {
            winner: "Alice".to_string()
        })
    );
    assert_eq!(alice(&uno).cards_count(), 0);
}

#[test]
fn quitting_needs_confirmation() {
    let mut uno = create_table(vec![red(7), blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::new(["q", "y"]);

    let outcome = uno.play_turn(&mut console).unwrap();

    assert_eq!(
        outcome,
        Some(RoundOutcome::Quit {
            player: "Alice".to_string()
        })
    );
    assert_eq!(uno.get_current_turn_player_id(), Some("Alice"));
}

#[test]
fn declined_quit_keeps_the_turn_going() {
    let mut uno = create_table(vec![red(7), blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::new(["Q", "no", "0"]);

    let outcome = uno.play_turn(&mut console).unwrap();

    assert_eq!(outcome, None);
    assert_eq!(uno.top_discard(), Some(&red(7)));
}

#[test]
fn drawn_card_can_be_played_and_missed_uno_is_punished() {
    let mut uno = create_table(vec![blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::new(["d", "y"]);

    uno.play_turn(&mut console).unwrap();

    assert_eq!(uno.top_discard(), Some(&red(9)));
    assert!(console.has_shown(&Message::Penalty {
        player: "Alice".to_string(),
        penalty: Penalty::MissedUno
    }));
    assert_eq!(alice(&uno).cards_count(), 3);
}

#[test]
fn declined_drawn_card_goes_to_the_hand() {
    let mut uno = create_table(vec![blue(2), blue(3)], red(5), red(9));
    let mut console = ScriptedConsole::new(["d", "n"]);

    uno.play_turn(&mut console).unwrap();

    assert_eq!(uno.top_discard(), Some(&red(5)));
    assert_eq!(alice(&uno).hand, vec![blue(2), blue(3), red(9)]);
    assert_eq!(uno.get_current_turn_player_id(), Some("Player 1"));
}

#[test]
fn wild_card_prompts_until_a_valid_color() {
    let mut uno = create_table(vec![Card::wild(), blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::new(["0", "x", "7", "3"]);

    uno.play_turn(&mut console).unwrap();

    assert!(console.has_shown(&Message::InvalidColorInput));
    assert!(console.has_shown(&Message::ColorIndexOutOfRange { index: 7 }));
    assert!(console.has_shown(&Message::ColorChosen {
        player: "Alice".to_string(),
        color: CardColor::Red
    }));
    assert_eq!(uno.top_discard().and_then(Card::color), Some(CardColor::Red));
}

#[test]
fn closed_input_ends_the_turn_with_an_error() {
    let mut uno = create_table(vec![red(7), blue(2)], red(5), red(9));
    let mut console = ScriptedConsole::default();

    let error = uno.play_turn(&mut console).unwrap_err();

    assert!(matches!(error, UnoError::InputClosed));
}

#[test]
fn human_challenge_catches_illegal_wild_draw_four() {
    let mut uno = create_table_computer_first(vec![red(1)]);
    let mut console = ScriptedConsole::new(["y"]);

    uno.play_card(0, Card::wild_draw_four(), &mut console).unwrap();

    assert!(console.has_shown(&Message::ChallengeGuilty {
        player: "Player 1".to_string()
    }));
    assert_eq!(uno.get_player("Player 1").unwrap().cards_count(), 5);
    assert_eq!(alice(&uno).cards_count(), 7);
    assert_eq!(uno.get_current_turn_player_id(), Some("Player 1"));
}

#[test]
fn human_failed_challenge_draws_six_and_loses_the_turn() {
    let mut uno = create_table_computer_first(vec![blue(1)]);
    let mut console = ScriptedConsole::new(["y"]);

    uno.play_card(0, Card::wild_draw_four(), &mut console).unwrap();

    assert!(console.has_shown(&Message::ChallengeInnocent {
        player: "Player 1".to_string()
    }));
    assert_eq!(alice(&uno).cards_count(), 13);
    assert_eq!(uno.get_current_turn_player_id(), Some("Alice"));
}

#[test]
fn unchallenged_wild_draw_four_draws_four() {
    let mut uno = create_table_computer_first(vec![red(1)]);
    let mut console = ScriptedConsole::new(["n"]);

    uno.play_card(0, Card::wild_draw_four(), &mut console).unwrap();

    assert_eq!(alice(&uno).cards_count(), 11);
    assert_eq!(uno.get_player("Player 1").unwrap().cards_count(), 1);
    assert_eq!(uno.get_current_turn_player_id(), Some("Alice"));
}

fn cards_in_play(uno: &Uno) -> usize {
    let in_hands: usize = uno.players().iter().map(Player::cards_count).sum();
    in_hands + uno.discard_pile_len() + uno.draw_pile().len()
}

#[test]
fn computer_round_keeps_every_card_and_finishes() {
    let mut uno = Uno::with_seed("Computers", 5);
    uno.room_mut().generate_computers(4);
    let mut console = ScriptedConsole::default();
    uno.setup(&mut console).unwrap();

    for _ in 0..10_000 {
        assert_eq!(cards_in_play(&uno), 108);

        if let Some(outcome) = uno.play_turn(&mut console).unwrap() {
            let RoundOutcome::Won { winner } = outcome else {
                panic!("computers never quit");
            };
            assert_eq!(uno.get_player(&winner).unwrap().cards_count(), 0);
            assert_eq!(cards_in_play(&uno), 108);
            return;
        }
    }

    panic!("round did not finish");
}

#[test]
fn play_round_announces_winner_and_clears_computers() {
    let mut uno = Uno::with_seed("Computers", 9);
    uno.room_mut().generate_computers(3);
    let mut console = ScriptedConsole::default();

    let outcome = uno.play_round(&mut console).unwrap();

    let RoundOutcome::Won { winner } = outcome else {
        panic!("computers never quit");
    };
    assert!(console.has_shown(&Message::Winner { player: winner }));
    assert!(uno.players().is_empty());
    assert_eq!(console.prompts.len(), 0);
}
