use std::collections::HashMap;

use tracing::warn;
use uno_engine::message::Message;

const ENGLISH: &[(&str, &str)] = &[
    ("enter_player_name", "Enter your name: "),
    ("enter_room_name", "Enter a name for the game room: "),
    ("player_name_taken", "The name \"{0}\" is already taken at this table."),
    ("player_turn", "It is {0}'s turn."),
    ("top_discard", "Top of the discard pile: {0}"),
    ("hand_header", "{0}'s hand:"),
    ("hand_card", "  [{0}] {1}"),
    ("no_playable_cards", "You have no playable cards."),
    (
        "game_commands",
        "[{0}] list hand, [{1}] list playable cards, [{2}] call UNO, [{3}] draw a card, [{4}] quit",
    ),
    ("enter_card_or_command", "Enter a card number or a command: "),
    ("unknown_command", "Unknown command."),
    (
        "unplayable_card",
        "That card does not match the discard pile. Enter {0} to list your playable cards.",
    ),
    ("card_index_out_of_range", "There is no card number {0} in your hand."),
    ("select_color", "Choose the next colour:"),
    ("color_option", "  [{0}] {1}"),
    ("enter_color_number", "Enter a colour number: "),
    ("invalid_color_input", "Please enter a number."),
    ("color_index_out_of_range", "There is no colour number {0}."),
    ("yes_no", "(y/n): "),
    ("confirm_quit", "Do you really want to quit the game?"),
    ("drawn_card_playable", "You drew {0}. Do you want to play it?"),
    (
        "confirm_challenge",
        "{0} played a Wild Draw Four. Do you want to challenge it?",
    ),
    ("take_from_draw_pile", "You take a card from the draw pile."),
    ("draws_a_card", "{0} draws a card."),
    ("draw_pile_empty", "There are no cards left to draw."),
    ("card_played", "{0} plays {1}."),
    ("color_chosen", "{0} chooses {1}."),
    ("uno_called", "{0} calls UNO!"),
    ("skip_effect", "{0} is skipped."),
    ("reverse_effect", "The direction of play is reversed."),
    ("draw_effect", "{0} draws {1} cards and loses their turn."),
    (
        "penalty_missed_uno",
        "{0} did not call UNO and draws {1} penalty cards.",
    ),
    (
        "penalty_illegal_wild_draw_four",
        "{0} played Wild Draw Four illegally and draws {1} penalty cards.",
    ),
    (
        "penalty_challenge_failed",
        "{0} lost the challenge and draws {1} penalty cards.",
    ),
    (
        "challenge_guilty",
        "Challenge succeeded: {0} had a card of the previous colour.",
    ),
    (
        "challenge_innocent",
        "Challenge failed: {0} had no card of the previous colour.",
    ),
    ("winner", "{0} wins the round!"),
];

/// Display templates keyed by [`Message::key`], with `{0}`, `{1}`... standing for the message
/// arguments.
#[derive(Debug)]
pub struct Catalog {
    templates: HashMap<&'static str, &'static str>,
}

impl Catalog {
    pub fn english() -> Self {
        Self {
            templates: ENGLISH.iter().copied().collect(),
        }
    }

    pub fn render(&self, message: &Message) -> String {
        let key = message.key();
        let Some(template) = self.templates.get(key.as_str()) else {
            warn!(%key, "message missing from the catalog");
            return key;
        };

        message
            .args()
            .iter()
            .enumerate()
            .fold(template.to_string(), |text, (index, arg)| {
                text.replace(&format!("{{{index}}}"), arg)
            })
    }

    #[cfg(test)]
    fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }
}
