use crate::constants::{INITIAL_HAND_CARDS, MAXIMUM_PLAYERS, MINIMUM_PLAYERS};

/// Table rules that may differ between rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub min_players: usize,
    pub max_players: usize,
    pub initial_hand_size: usize,
}

impl GameConfig {
    pub fn seats(&self) -> std::ops::RangeInclusive<usize> {
        self.min_players..=self.max_players
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MINIMUM_PLAYERS,
            max_players: MAXIMUM_PLAYERS,
            initial_hand_size: INITIAL_HAND_CARDS,
        }
    }
}
