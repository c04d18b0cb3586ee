use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Direction in which turns travel around the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Commands available to a human at the turn prompt, parsed from their letter.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum GameCommand {
    #[strum(to_string = "L")]
    ShowHand,
    #[strum(to_string = "P")]
    ShowPlayableCards,
    #[strum(to_string = "U")]
    Uno,
    #[strum(to_string = "D")]
    DrawACard,
    #[strum(to_string = "Q")]
    Quit,
}

impl GameCommand {
    pub fn letter(&self) -> String {
        self.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnInput {
    Command(GameCommand),
    CardIndex(usize),
}

impl FromStr for TurnInput {
    type Err = ();

    /// Reads the first word of the input as either a command letter or a hand index.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let token = input.split_whitespace().next().ok_or(())?;

        if token.chars().all(|c| c.is_ascii_digit()) {
            return token.parse().map(TurnInput::CardIndex).map_err(|_| ());
        }

        GameCommand::from_str(token)
            .map(TurnInput::Command)
            .map_err(|_| ())
    }
}

/// Only the word `y` or `yes`, in any case, at the very start of the answer counts as yes.
pub fn is_affirmative(input: &str) -> bool {
    let word_end = input
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(input.len());
    let word = &input[..word_end];

    word.eq_ignore_ascii_case("y") || word.eq_ignore_ascii_case("yes")
}

/// Reasons a player has to draw extra cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
pub enum Penalty {
    /// Ended a turn on one card without yelling "UNO".
    MissedUno,
    /// Caught playing a Wild Draw Four while holding a card of the matching colour.
    IllegalWildDrawFour,
    /// Challenged a Wild Draw Four that turned out to be legal.
    ChallengeFailed,
}

impl Penalty {
    pub fn cards(&self) -> usize {
        match self {
            Penalty::MissedUno => 2,
            Penalty::IllegalWildDrawFour => 4,
            Penalty::ChallengeFailed => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeOutcome {
    /// The challenged player could have followed colour and draws the penalty.
    Guilty,
    /// The play was legal; the challenger draws the penalty.
    Innocent,
}

/// How a human or computer turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TurnEnd {
    Done,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { winner: String },
    Quit { player: String },
}
