use std::{collections::VecDeque, vec};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, info};

use crate::card::{Card, CardColor, Rank};
use crate::config::GameConfig;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::message::Message;
use crate::player::{Player, PlayerKind};
use crate::room::GameRoom;
use crate::turn::{is_affirmative, ChallengeOutcome, Direction, Penalty, RoundOutcome, TurnEnd};

/// The most recent Wild Draw Four, kept around so it can be challenged.
#[derive(Clone, Copy, Debug)]
struct WildDrawFourPlay {
    player_index: usize,
    previous_color: Option<CardColor>,
    challenged: bool,
}

/// A round of UNO played at a [`GameRoom`].
///
/// Turn order is a seat index plus a [`Direction`]; the roster itself is only reordered once per
/// round, when the first player is chosen.
#[derive(Debug)]
pub struct Uno {
    room: GameRoom,
    config: GameConfig,
    deck: Deck,
    discard_pile: VecDeque<Card>,
    draw_pile: vec::IntoIter<Card>,
    current_turn_player_index: usize,
    direction: Direction,
    last_wild_draw_four: Option<WildDrawFourPlay>,
    pub(crate) rng: StdRng,
}

impl Uno {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_deck(name, Deck::new(), StdRng::from_entropy())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::with_deck(name, Deck::new(), StdRng::seed_from_u64(seed))
    }

    pub fn with_deck(name: impl Into<String>, deck: Deck, rng: StdRng) -> Self {
        Self {
            room: GameRoom::new(name),
            config: GameConfig::default(),
            deck,
            discard_pile: VecDeque::new(),
            draw_pile: Vec::new().into_iter(),
            current_turn_player_index: 0,
            direction: Direction::Clockwise,
            last_wild_draw_four: None,
            rng,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn room(&self) -> &GameRoom {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut GameRoom {
        &mut self.room
    }

    pub fn join(&mut self, player: Player) -> Result<(), Player> {
        self.room.join(player)
    }

    pub fn leave(&mut self, player_id: &str) -> Option<Player> {
        self.room.leave(player_id)
    }

    pub fn players(&self) -> &[Player] {
        self.room.players()
    }

    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        self.room.get_player(player_id)
    }

    pub fn get_player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.room.get_player_mut(player_id)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_turn_player_index(&self) -> usize {
        self.current_turn_player_index
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.room.players.get(self.current_turn_player_index)
    }

    /// The player who would move after the current one.
    pub fn next_player(&self) -> Option<&Player> {
        self.room.players.get(self.get_nth_turn_player_index(1))
    }

    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.front()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards left to draw before the draw pile has to be rebuilt.
    pub fn draw_pile(&self) -> &[Card] {
        self.draw_pile.as_slice()
    }

    /// A card is playable on a matching colour or rank, and wild cards are playable on anything.
    pub fn is_playable(&self, card: &Card) -> bool {
        card.is_wild() || self.top_discard().map_or(true, |top| card.matches(top))
    }

    /// Plays a whole round: sets up the table, then lets players take turns until one of them
    /// runs out of cards or the human quits. Computer players leave the room afterwards.
    pub fn play_round(&mut self, console: &mut impl Console) -> Result<RoundOutcome> {
        self.setup(console)?;

        let outcome = loop {
            if let Some(outcome) = self.play_turn(console)? {
                break outcome;
            }
        };

        if let RoundOutcome::Won { winner } = &outcome {
            console.clear_screen();
            console.display(Message::Winner {
                player: winner.clone(),
            });
            info!(room = %self.room.name(), winner = %winner, "round won");
        }

        self.room.remove_computers();
        Ok(outcome)
    }

    /// Chooses the first player, shuffles and deals.
    pub fn setup(&mut self, console: &mut impl Console) -> Result<()> {
        self.check_seats()?;
        self.check_deck_size()?;

        self.choose_first_player();
        self.deck.shuffle_with(&mut self.rng);
        self.deal(console)?;
        self.open_discard_pile(console)
    }

    /// Runs one turn of the current player. Returns the outcome once the round is over.
    pub fn play_turn(&mut self, console: &mut impl Console) -> Result<Option<RoundOutcome>> {
        console.clear_screen();
        self.show_top_discard(console);

        let acting_player_index = self.current_turn_player_index;
        let Some(player) = self.room.players.get(acting_player_index) else {
            return Err(UnoError::NotEnoughPlayers);
        };
        let player_id = player.id().to_string();
        console.display(Message::PlayerTurn {
            player: player_id.clone(),
        });

        let turn_end = match self.room.players[acting_player_index].kind() {
            PlayerKind::Human => self.human_turn(acting_player_index, console)?,
            PlayerKind::Computer { .. } => self.computer_turn(acting_player_index, console)?,
        };

        if turn_end == TurnEnd::Quit {
            info!(player = %player_id, "player quit the round");
            return Ok(Some(RoundOutcome::Quit { player: player_id }));
        }

        self.move_turn_n_players_ahead(1);

        if self.room.players[acting_player_index].cards_count() == 0 {
            return Ok(Some(RoundOutcome::Won { winner: player_id }));
        }

        self.catch_missed_uno(acting_player_index, console);
        Ok(None)
    }

    /// Deals the deck as it lies, without shuffling, and turns up the first discard. The effect of
    /// that card is left to [`Uno::open_discard_pile`].
    ///
    /// A Wild Draw Four is never the first discard: while one is turned up, the undealt cards are
    /// shuffled again.
    pub fn deal(&mut self, console: &mut impl Console) -> Result<()> {
        self.check_seats()?;
        self.check_deck_size()?;

        let hand_size = self.config.initial_hand_size;
        let dealt = hand_size * self.room.len();

        for (seat, player) in self.room.players.iter_mut().enumerate() {
            player.deal_hand(self.deck.slice(seat * hand_size, (seat + 1) * hand_size).to_vec());
        }

        while self
            .deck
            .card(dealt)
            .map_or(false, |card| card.is_wild_draw_four())
        {
            self.deck.shuffle_tail(dealt, &mut self.rng);
        }

        self.draw_pile = self.deck.slice(dealt + 1, self.deck.len()).to_vec().into_iter();
        self.discard_pile.clear();
        self.current_turn_player_index = 0;
        self.direction = Direction::Clockwise;
        self.last_wild_draw_four = None;

        let first_discard = self.deck.cards()[dealt];
        info!(
            room = %self.room.name(),
            players = self.room.len(),
            first_discard = %first_discard,
            "cards dealt"
        );

        self.discard_pile.push_front(first_discard);
        self.show_top_discard(console);
        Ok(())
    }

    /// Puts a card from a player onto the discard pile and applies its effect.
    pub fn play_card(
        &mut self,
        player_index: usize,
        card: Card,
        console: &mut impl Console,
    ) -> Result<()> {
        let mut card = card;
        let player_id = self.room.players[player_index].id().to_string();

        console.display(Message::CardPlayed {
            player: player_id.clone(),
            card,
        });

        if card.is_wild() && card.color().is_none() {
            let color = self.choose_color(player_index, console)?;
            card.declare_color(color);
            console.display(Message::ColorChosen {
                player: player_id.clone(),
                color,
            });
        }

        let previous_color = self.top_discard().and_then(Card::color);
        self.discard_pile.push_front(card);
        self.show_top_discard(console);
        debug!(player = %player_id, card = %card, "card played");

        match card.rank() {
            Rank::Number(_) | Rank::Wild => {}
            Rank::Skip => self.perform_skip(console),
            Rank::Reverse => {
                self.perform_reverse();
                console.display(Message::ReverseEffect);
            }
            Rank::DrawTwo => {
                let target = self.get_nth_turn_player_index(1);
                self.perform_draw(target, card.draw_count(), console);
                self.move_turn_n_players_ahead(1);
            }
            Rank::WildDrawFour => {
                self.last_wild_draw_four = Some(WildDrawFourPlay {
                    player_index,
                    previous_color,
                    challenged: false,
                });
                self.perform_wild_draw_four(card.draw_count(), console)?;
            }
        }

        Ok(())
    }

    /// Draws the top card of the draw pile, rebuilding the pile from the discards when it is
    /// empty. Returns `None` when not a single card is left to draw.
    pub fn draw(&mut self, player_index: usize, console: &mut impl Console) -> Option<Card> {
        console.display(Message::DrawsACard {
            player: self.room.players[player_index].id().to_string(),
        });

        if self.draw_pile.len() == 0 {
            self.regenerate_draw_pile();
        }

        let card = self.draw_pile.next();
        if card.is_none() {
            console.display(Message::DrawPileEmpty);
        }
        card
    }

    /// Challenges the last Wild Draw Four on the discard pile.
    ///
    /// The player who played it is guilty when they held a card of the colour that was on top of
    /// the discard pile before. Returns `None` when there is nothing to challenge.
    pub fn challenge_wild_draw_four(
        &mut self,
        challenger_index: usize,
        console: &mut impl Console,
    ) -> Option<ChallengeOutcome> {
        if !self.top_discard().map_or(false, Card::is_wild_draw_four) {
            return None;
        }

        let play = self.last_wild_draw_four.as_mut()?;
        if play.challenged || play.player_index == challenger_index {
            return None;
        }
        play.challenged = true;
        let play = *play;

        if self.room.players[challenger_index].kind() == PlayerKind::Human {
            self.show_hand(play.player_index, console);
        }

        let challenged = &self.room.players[play.player_index];
        let guilty = play
            .previous_color
            .map_or(false, |color| challenged.has_color(color));
        debug!(
            challenger = %self.room.players[challenger_index].id(),
            challenged = %challenged.id(),
            guilty,
            "wild draw four challenged"
        );

        if guilty {
            console.display(Message::ChallengeGuilty {
                player: challenged.id().to_string(),
            });
            self.penalty(play.player_index, Penalty::IllegalWildDrawFour, console);
            Some(ChallengeOutcome::Guilty)
        } else {
            console.display(Message::ChallengeInnocent {
                player: challenged.id().to_string(),
            });
            self.penalty(challenger_index, Penalty::ChallengeFailed, console);
            Some(ChallengeOutcome::Innocent)
        }
    }

    /// Punishes the player for ending a turn on one card without having called UNO.
    pub fn catch_missed_uno(&mut self, player_index: usize, console: &mut impl Console) -> bool {
        if self.room.players[player_index].missed_uno() {
            self.penalty(player_index, Penalty::MissedUno, console);
            true
        } else {
            false
        }
    }

    pub fn get_current_turn_player_id(&self) -> Option<&str> {
        self.current_player().map(Player::id)
    }

    pub fn get_next_turn_player_id(&self) -> Option<&str> {
        self.next_player().map(Player::id)
    }

    pub(crate) fn show_top_discard(&self, console: &mut impl Console) {
        if let Some(card) = self.top_discard() {
            console.display(Message::TopDiscard { card: *card });
        }
    }

    pub(crate) fn show_hand(&self, player_index: usize, console: &mut impl Console) {
        let player = &self.room.players[player_index];
        console.display(Message::HandHeader {
            player: player.id().to_string(),
        });
        for (index, card) in player.hand.iter().enumerate() {
            console.display(Message::HandCard { index, card: *card });
        }
    }

    /// Plays the card at `hand_index`, calling UNO first when it is the next-to-last card.
    pub(crate) fn play_from_hand(
        &mut self,
        player_index: usize,
        hand_index: usize,
        console: &mut impl Console,
    ) -> Result<()> {
        let player = &mut self.room.players[player_index];
        if player.call_uno() {
            console.display(Message::UnoCalled {
                player: player.id().to_string(),
            });
        }

        match player.remove_card(hand_index) {
            Some(card) => self.play_card(player_index, card, console),
            None => Ok(()),
        }
    }

    pub(crate) fn choose_color(
        &mut self,
        player_index: usize,
        console: &mut impl Console,
    ) -> Result<CardColor> {
        match self.room.players[player_index].kind() {
            PlayerKind::Human => prompt_color(console),
            PlayerKind::Computer { .. } => {
                let index = self.rng.gen_range(0..CardColor::COUNT);
                Ok(CardColor::iter().nth(index).unwrap_or(CardColor::Red))
            }
        }
    }

    pub(crate) fn confirm(console: &mut impl Console, question: Message) -> Result<bool> {
        console.display(question);
        let answer = console.prompt(Message::YesNo)?;
        Ok(is_affirmative(&answer))
    }

    pub(crate) fn draw_cards_to_player(
        &mut self,
        player_index: usize,
        count: usize,
        console: &mut impl Console,
    ) {
        for _ in 0..count {
            let Some(card) = self.draw(player_index, console) else {
                break;
            };
            self.room.players[player_index].add_card(card);
        }
    }

    fn penalty(&mut self, player_index: usize, penalty: Penalty, console: &mut impl Console) {
        let player_id = self.room.players[player_index].id().to_string();
        debug!(player = %player_id, ?penalty, "penalty");
        console.display(Message::Penalty {
            player: player_id,
            penalty,
        });
        self.draw_cards_to_player(player_index, penalty.cards(), console);
    }

    /// Applies the effect of the first discard before the first turn.
    ///
    /// Skip costs the first player their turn. Draw Two hits the player after them, who draws and
    /// is skipped as well. A wild gets its colour from the first player.
    pub fn open_discard_pile(&mut self, console: &mut impl Console) -> Result<()> {
        let Some(mut card) = self.discard_pile.pop_front() else {
            return Ok(());
        };
        if card.is_wild() && card.color().is_none() {
            let first_player_index = self.current_turn_player_index;
            let color = self.choose_color(first_player_index, console)?;
            card.declare_color(color);
            console.display(Message::ColorChosen {
                player: self.room.players[first_player_index].id().to_string(),
                color,
            });
        }
        self.discard_pile.push_front(card);
        if card.is_wild() {
            self.show_top_discard(console);
        }

        match card.rank() {
            Rank::Number(_) | Rank::Wild | Rank::WildDrawFour => {}
            Rank::Skip => {
                self.announce_skip(self.current_turn_player_index, console);
                self.move_turn_n_players_ahead(1);
            }
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                console.display(Message::ReverseEffect);
            }
            Rank::DrawTwo => {
                let target = self.get_nth_turn_player_index(1);
                self.perform_draw(target, card.draw_count(), console);
                self.move_turn_n_players_ahead(2);
            }
        }

        Ok(())
    }

    /// The next player loses their turn.
    fn perform_skip(&mut self, console: &mut impl Console) {
        let skipped = self.get_nth_turn_player_index(1);
        self.announce_skip(skipped, console);
        self.move_turn_n_players_ahead(1);
    }

    fn announce_skip(&self, skipped: usize, console: &mut impl Console) {
        console.display(Message::SkipEffect {
            player: self.room.players[skipped].id().to_string(),
        });
    }

    /// The target draws `count` cards. Callers decide whether the target loses their turn.
    fn perform_draw(&mut self, target: usize, count: usize, console: &mut impl Console) {
        console.display(Message::DrawEffect {
            player: self.room.players[target].id().to_string(),
            count,
        });
        self.draw_cards_to_player(target, count, console);
    }

    fn perform_wild_draw_four(&mut self, count: usize, console: &mut impl Console) -> Result<()> {
        let target = self.get_nth_turn_player_index(1);

        if let (PlayerKind::Human, Some(play)) =
            (self.room.players[target].kind(), self.last_wild_draw_four)
        {
            let challenged = self.room.players[play.player_index].id().to_string();
            if Self::confirm(console, Message::ConfirmChallenge { player: challenged })? {
                match self.challenge_wild_draw_four(target, console) {
                    // The guilty player drew instead; the challenger keeps their turn.
                    Some(ChallengeOutcome::Guilty) => return Ok(()),
                    Some(ChallengeOutcome::Innocent) => {
                        self.move_turn_n_players_ahead(1);
                        return Ok(());
                    }
                    None => {}
                }
            }
        }

        self.perform_draw(target, count, console);
        self.move_turn_n_players_ahead(1);
        Ok(())
    }

    fn perform_reverse(&mut self) {
        self.direction = self.direction.reversed();
        debug!(direction = ?self.direction, "play order reversed");

        // Two players: the reverse works like a skip.
        if self.room.len() == 2 {
            self.move_turn_n_players_ahead(1);
        }
    }

    fn regenerate_draw_pile(&mut self) {
        let Some(top) = self.discard_pile.pop_front() else {
            return;
        };

        let mut cards: Vec<Card> = self.discard_pile.drain(..).collect();
        for card in &mut cards {
            card.clear_color();
        }
        cards.shuffle(&mut self.rng);
        info!(cards = cards.len(), "draw pile regenerated from the discard pile");

        self.draw_pile = cards.into_iter();
        self.discard_pile.push_front(top);
    }

    /// Rotates the roster so that the player who turns up the highest number sits first.
    fn choose_first_player(&mut self) {
        self.deck.shuffle_with(&mut self.rng);

        let numbers = self
            .deck
            .slice(0, self.room.len())
            .iter()
            .map(Card::face_number);
        let mut first = 0;
        let mut highest = 0;
        for (index, number) in numbers.enumerate() {
            if index == 0 || number > highest {
                first = index;
                highest = number;
            }
        }

        self.room.players.rotate_left(first);
        info!(
            player = %self.room.players[0].id(),
            number = highest,
            "first player chosen"
        );
    }

    fn check_seats(&self) -> Result<()> {
        if self.room.len() < self.config.min_players {
            return Err(UnoError::NotEnoughPlayers);
        }
        if self.room.len() > self.config.max_players {
            return Err(UnoError::TooManyPlayers);
        }
        Ok(())
    }

    fn check_deck_size(&self) -> Result<()> {
        let dealt = self.config.initial_hand_size * self.room.len();
        let playable_reveals = self
            .deck
            .cards()
            .iter()
            .skip(dealt)
            .filter(|card| !card.is_wild_draw_four())
            .count();

        if self.deck.len() <= dealt || playable_reveals == 0 {
            return Err(UnoError::NotEnoughCards {
                needed: dealt + 1,
                available: self.deck.len(),
            });
        }
        Ok(())
    }

    fn get_nth_turn_player_index(&self, n: usize) -> usize {
        let players = self.room.len();
        if players == 0 {
            return 0;
        }

        let n = n % players;
        match self.direction {
            Direction::Clockwise => (self.current_turn_player_index + n) % players,
            Direction::CounterClockwise => (self.current_turn_player_index + players - n) % players,
        }
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        self.current_turn_player_index = self.get_nth_turn_player_index(n);
    }
}

fn prompt_color(console: &mut impl Console) -> Result<CardColor> {
    loop {
        console.display(Message::SelectColor);
        for (index, color) in CardColor::iter().enumerate() {
            console.display(Message::ColorOption { index, color });
        }

        let input = console.prompt(Message::EnterColorNumber)?;
        match input.trim().parse::<usize>() {
            Ok(index) => match CardColor::iter().nth(index) {
                Some(color) => return Ok(color),
                None => console.display(Message::ColorIndexOutOfRange { index }),
            },
            Err(_) => console.display(Message::InvalidColorInput),
        }
    }
}
