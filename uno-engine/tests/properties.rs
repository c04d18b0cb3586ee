use std::collections::HashMap;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use uno_engine::{
    card::Card,
    console::ScriptedConsole,
    deck::Deck,
    turn::{GameCommand, TurnInput},
    uno::Uno,
};

fn composition(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle_with(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(deck.len(), 108);
        prop_assert_eq!(composition(deck.cards()), composition(Deck::new().cards()));
    }

    #[test]
    fn matching_is_symmetric(a in 0usize..108, b in 0usize..108) {
        let deck = Deck::new();
        let (a, b) = (deck.cards()[a], deck.cards()[b]);

        prop_assert_eq!(a.matches(&b), b.matches(&a));
    }

    #[test]
    fn dealing_hands_out_seven_cards_each(players in 2usize..=10, seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle_with(&mut StdRng::seed_from_u64(seed));
        let mut uno = Uno::with_deck("Test room", deck, StdRng::seed_from_u64(seed));
        uno.room_mut().generate_computers(players);

        uno.deal(&mut ScriptedConsole::default()).unwrap();

        for player in uno.players() {
            prop_assert_eq!(player.cards_count(), 7);
        }
        prop_assert!(!uno.top_discard().unwrap().is_wild_draw_four());
        prop_assert_eq!(uno.draw_pile().len(), 108 - 7 * players - 1);
    }

    #[test]
    fn setup_keeps_every_card_in_play(players in 2usize..=10, seed in any::<u64>()) {
        let mut uno = Uno::with_seed("Test room", seed);
        uno.room_mut().generate_computers(players);

        uno.setup(&mut ScriptedConsole::default()).unwrap();

        let in_hands: usize = uno.players().iter().map(|p| p.cards_count()).sum();
        prop_assert_eq!(in_hands + uno.discard_pile_len() + uno.draw_pile().len(), 108);
        prop_assert!(in_hands == 7 * players || in_hands == 7 * players + 2);
        let top = uno.top_discard().unwrap();
        prop_assert!(!top.is_wild_draw_four());
        prop_assert!(!top.is_wild() || top.color().is_some());
    }

    #[test]
    fn digits_parse_as_card_index(index in 0usize..1000) {
        prop_assert_eq!(index.to_string().parse::<TurnInput>(), Ok(TurnInput::CardIndex(index)));
    }
}

#[test]
fn command_letters_parse_in_either_case() {
    assert_eq!(
        "d".parse::<TurnInput>(),
        Ok(TurnInput::Command(GameCommand::DrawACard))
    );
    assert_eq!(
        "D".parse::<TurnInput>(),
        Ok(TurnInput::Command(GameCommand::DrawACard))
    );
}
