use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_POINTS, DRAW_FOUR_CARDS, DRAW_TWO_CARDS, WILD_CARD_POINTS};

/// Card colours in their canonical order, which is also the order offered by the colour prompt.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum CardColor {
    Blue,
    Green,
    Yellow,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn is_wild(&self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }
}

/// A single UNO card.
///
/// Wild cards are created without a colour. The colour is declared when the card is played and
/// cleared again when the card goes back into the draw pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: Option<CardColor>,
    rank: Rank,
}

impl Card {
    pub fn colored(color: CardColor, rank: Rank) -> Self {
        debug_assert!(!rank.is_wild(), "wild cards have no printed colour");
        Self {
            color: Some(color),
            rank,
        }
    }

    pub fn number(color: CardColor, number: u8) -> Self {
        Self::colored(color, Rank::Number(number))
    }

    pub fn wild() -> Self {
        Self {
            color: None,
            rank: Rank::Wild,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: None,
            rank: Rank::WildDrawFour,
        }
    }

    pub fn color(&self) -> Option<CardColor> {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    pub fn is_wild_draw_four(&self) -> bool {
        self.rank == Rank::WildDrawFour
    }

    /// Face value of number cards, zero for everything else.
    pub fn face_number(&self) -> u8 {
        match self.rank {
            Rank::Number(number) => number,
            _ => 0,
        }
    }

    pub fn points(&self) -> u32 {
        match self.rank {
            Rank::Number(number) => number.into(),
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => ACTION_CARD_POINTS,
            Rank::Wild | Rank::WildDrawFour => WILD_CARD_POINTS,
        }
    }

    /// Number of cards the next player must draw when this card is played.
    pub fn draw_count(&self) -> usize {
        match self.rank {
            Rank::DrawTwo => DRAW_TWO_CARDS,
            Rank::WildDrawFour => DRAW_FOUR_CARDS,
            _ => 0,
        }
    }

    /// Whether the two cards share a colour or a rank.
    ///
    /// Wild cards being playable on anything is a rule of the game, not of the card.
    pub fn matches(&self, other: &Card) -> bool {
        let same_color = matches!((self.color, other.color), (Some(a), Some(b)) if a == b);
        same_color || self.rank == other.rank
    }

    /// Declares the colour of a wild card. Coloured cards keep their printed colour.
    pub fn declare_color(&mut self, color: CardColor) {
        if self.is_wild() {
            self.color = Some(color);
        }
    }

    pub fn clear_color(&mut self) {
        if self.is_wild() {
            self.color = None;
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
            Rank::Wild => write!(f, "Wild"),
            Rank::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_wild(), self.color) {
            (true, Some(color)) => write!(f, "{} ({})", self.rank, color),
            (true, None) => write!(f, "{}", self.rank),
            (false, Some(color)) => write!(f, "{} {}", color, self.rank),
            (false, None) => write!(f, "{}", self.rank),
        }
    }
}
