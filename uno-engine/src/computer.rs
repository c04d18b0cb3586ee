use rand::Rng;

use crate::console::Console;
use crate::error::Result;
use crate::turn::TurnEnd;
use crate::uno::Uno;

impl Uno {
    /// One play attempt, then a coin flip between a second attempt and a draw.
    pub(crate) fn computer_turn(
        &mut self,
        player_index: usize,
        console: &mut impl Console,
    ) -> Result<TurnEnd> {
        self.computer_play_hand_card(player_index, console)?;

        if self.players()[player_index].cards_count() == 0 {
            return Ok(TurnEnd::Done);
        }

        if self.rng.gen_bool(0.5) {
            self.computer_play_hand_card(player_index, console)?;
        } else {
            self.computer_draw_card(player_index, console)?;
        }

        Ok(TurnEnd::Done)
    }

    /// Index of the first card the computer is willing to play.
    ///
    /// A Wild Draw Four is only considered when no card follows the colour on the discard pile.
    pub(crate) fn computer_pick(&self, player_index: usize) -> Option<usize> {
        let top = self.top_discard()?;
        let player = &self.players()[player_index];
        let no_matching_color = top.color().map_or(true, |color| !player.has_color(color));

        player.hand.iter().position(|card| {
            top.matches(card)
                || if card.is_wild_draw_four() {
                    no_matching_color
                } else {
                    card.is_wild()
                }
        })
    }

    fn computer_play_hand_card(
        &mut self,
        player_index: usize,
        console: &mut impl Console,
    ) -> Result<()> {
        match self.computer_pick(player_index) {
            Some(hand_index) => self.play_from_hand(player_index, hand_index, console),
            None => self.computer_draw_card(player_index, console),
        }
    }

    /// Draws one card; a playable one is put down on a coin flip.
    fn computer_draw_card(&mut self, player_index: usize, console: &mut impl Console) -> Result<()> {
        let Some(card) = self.draw(player_index, console) else {
            return Ok(());
        };

        if self.is_playable(&card) && self.rng.gen_bool(0.5) {
            self.play_card(player_index, card, console)
        } else {
            self.room_mut().players[player_index].add_card(card);
            Ok(())
        }
    }
}
