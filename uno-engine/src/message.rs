//! Symbolic messages the game asks the console to show.
//!
//! The engine never formats display text itself. Every message has a catalog key, derived from
//! its variant name in snake case, and a list of positional arguments.

use convert_case::{Case, Converter};
use strum_macros::IntoStaticStr;

use crate::card::{Card, CardColor};
use crate::turn::Penalty;

#[derive(Clone, Debug, PartialEq, Eq, IntoStaticStr)]
pub enum Message {
    EnterPlayerName,
    EnterRoomName,
    PlayerNameTaken { name: String },
    PlayerTurn { player: String },
    TopDiscard { card: Card },
    HandHeader { player: String },
    HandCard { index: usize, card: Card },
    NoPlayableCards,
    GameCommands { commands: Vec<String> },
    EnterCardOrCommand,
    UnknownCommand,
    UnplayableCard { show_playable: String },
    CardIndexOutOfRange { index: usize },
    SelectColor,
    ColorOption { index: usize, color: CardColor },
    EnterColorNumber,
    InvalidColorInput,
    ColorIndexOutOfRange { index: usize },
    YesNo,
    ConfirmQuit,
    DrawnCardPlayable { card: Card },
    ConfirmChallenge { player: String },
    TakeFromDrawPile,
    DrawsACard { player: String },
    DrawPileEmpty,
    CardPlayed { player: String, card: Card },
    ColorChosen { player: String, color: CardColor },
    UnoCalled { player: String },
    SkipEffect { player: String },
    ReverseEffect,
    DrawEffect { player: String, count: usize },
    Penalty { player: String, penalty: Penalty },
    ChallengeGuilty { player: String },
    ChallengeInnocent { player: String },
    Winner { player: String },
}

impl Message {
    /// Catalog key of the message, e.g. `player_turn` or `penalty_missed_uno`.
    pub fn key(&self) -> String {
        let converter = Converter::new()
            .from_case(Case::Pascal)
            .to_case(Case::Snake);

        match self {
            Message::Penalty { penalty, .. } => {
                let reason: &'static str = penalty.into();
                format!("penalty_{}", converter.convert(reason))
            }
            message => {
                let name: &'static str = message.into();
                converter.convert(name)
            }
        }
    }

    /// Positional arguments, in the order the catalog templates refer to them.
    pub fn args(&self) -> Vec<String> {
        match self {
            Message::EnterPlayerName
            | Message::EnterRoomName
            | Message::NoPlayableCards
            | Message::EnterCardOrCommand
            | Message::UnknownCommand
            | Message::SelectColor
            | Message::EnterColorNumber
            | Message::InvalidColorInput
            | Message::YesNo
            | Message::ConfirmQuit
            | Message::TakeFromDrawPile
            | Message::DrawPileEmpty
            | Message::ReverseEffect => vec![],
            Message::PlayerNameTaken { name } => vec![name.clone()],
            Message::PlayerTurn { player }
            | Message::HandHeader { player }
            | Message::ConfirmChallenge { player }
            | Message::DrawsACard { player }
            | Message::UnoCalled { player }
            | Message::SkipEffect { player }
            | Message::ChallengeGuilty { player }
            | Message::ChallengeInnocent { player }
            | Message::Winner { player } => vec![player.clone()],
            Message::TopDiscard { card } | Message::DrawnCardPlayable { card } => {
                vec![card.to_string()]
            }
            Message::HandCard { index, card } => vec![index.to_string(), card.to_string()],
            Message::GameCommands { commands } => commands.clone(),
            Message::UnplayableCard { show_playable } => vec![show_playable.clone()],
            Message::CardIndexOutOfRange { index } | Message::ColorIndexOutOfRange { index } => {
                vec![index.to_string()]
            }
            Message::ColorOption { index, color } => vec![index.to_string(), color.to_string()],
            Message::CardPlayed { player, card } => vec![player.clone(), card.to_string()],
            Message::ColorChosen { player, color } => vec![player.clone(), color.to_string()],
            Message::DrawEffect { player, count } => vec![player.clone(), count.to_string()],
            Message::Penalty { player, penalty } => {
                vec![player.clone(), penalty.cards().to_string()]
            }
        }
    }

    /// Error messages go to the console's error stream.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Message::UnknownCommand
                | Message::UnplayableCard { .. }
                | Message::CardIndexOutOfRange { .. }
                | Message::InvalidColorInput
                | Message::ColorIndexOutOfRange { .. }
                | Message::PlayerNameTaken { .. }
        )
    }
}
