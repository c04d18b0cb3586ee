use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: usize = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: usize = 2;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: usize = 2;

pub(crate) const WILD_CARDS_IN_DECK: usize = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: usize = 4;

pub(crate) const CARDS_PER_COLOR: usize = NUMBER_CARDS_PER_COLOR.len()
    + SKIP_CARDS_PER_COLOR
    + REVERSE_CARDS_PER_COLOR
    + DRAW_TWO_CARDS_PER_COLOR;

pub const TOTAL_CARDS_IN_DECK: usize =
    CARDS_PER_COLOR * CardColor::COUNT + WILD_CARDS_IN_DECK + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub(crate) const DRAW_TWO_CARDS: usize = 2;
pub(crate) const DRAW_FOUR_CARDS: usize = 4;

pub(crate) const ACTION_CARD_POINTS: u32 = 20;
pub(crate) const WILD_CARD_POINTS: u32 = 50;

pub const MINIMUM_PLAYERS: usize = 2;
pub const MAXIMUM_PLAYERS: usize = 10;
pub const INITIAL_HAND_CARDS: usize = 7;
