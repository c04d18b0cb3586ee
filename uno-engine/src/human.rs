use strum::IntoEnumIterator;

use crate::console::Console;
use crate::error::Result;
use crate::message::Message;
use crate::turn::{GameCommand, TurnEnd, TurnInput};
use crate::uno::Uno;

impl Uno {
    /// Prompts the human until they play a card, draw, or quit.
    pub(crate) fn human_turn(
        &mut self,
        player_index: usize,
        console: &mut impl Console,
    ) -> Result<TurnEnd> {
        self.show_hand(player_index, console);

        loop {
            console.display(Message::GameCommands {
                commands: GameCommand::iter().map(|c| c.letter()).collect(),
            });
            let input = console.prompt(Message::EnterCardOrCommand)?;

            match input.parse::<TurnInput>() {
                Ok(TurnInput::Command(GameCommand::ShowHand)) => {
                    self.show_hand(player_index, console)
                }
                Ok(TurnInput::Command(GameCommand::ShowPlayableCards)) => {
                    self.show_playable_cards(player_index, console)
                }
                Ok(TurnInput::Command(GameCommand::Uno)) => {
                    let player = &mut self.room_mut().players[player_index];
                    if player.call_uno() {
                        console.display(Message::UnoCalled {
                            player: player.id().to_string(),
                        });
                    }
                }
                Ok(TurnInput::Command(GameCommand::DrawACard)) => {
                    self.human_draw_card(player_index, console)?;
                    return Ok(TurnEnd::Done);
                }
                Ok(TurnInput::Command(GameCommand::Quit)) => {
                    if Self::confirm(console, Message::ConfirmQuit)? {
                        return Ok(TurnEnd::Quit);
                    }
                }
                Ok(TurnInput::CardIndex(index)) => {
                    let card = self.players()[player_index].hand.get(index).copied();
                    match card {
                        None => console.display(Message::CardIndexOutOfRange { index }),
                        Some(card) if !self.is_playable(&card) => {
                            console.display(Message::UnplayableCard {
                                show_playable: GameCommand::ShowPlayableCards.letter(),
                            })
                        }
                        Some(_) => {
                            self.play_from_hand(player_index, index, console)?;
                            return Ok(TurnEnd::Done);
                        }
                    }
                }
                Err(()) => console.display(Message::UnknownCommand),
            }
        }
    }

    /// Draws one card; a playable one may be put down right away if the human agrees.
    fn human_draw_card(&mut self, player_index: usize, console: &mut impl Console) -> Result<()> {
        console.display(Message::TakeFromDrawPile);

        let Some(card) = self.draw(player_index, console) else {
            return Ok(());
        };

        if self.is_playable(&card) && Self::confirm(console, Message::DrawnCardPlayable { card })? {
            self.play_card(player_index, card, console)
        } else {
            self.room_mut().players[player_index].add_card(card);
            Ok(())
        }
    }

    fn show_playable_cards(&self, player_index: usize, console: &mut impl Console) {
        let mut playable = 0;
        for (index, card) in self.players()[player_index].hand.iter().enumerate() {
            if self.is_playable(card) {
                console.display(Message::HandCard { index, card: *card });
                playable += 1;
            }
        }

        if playable == 0 {
            console.display(Message::NoPlayableCards);
        }
    }
}
