use std::fmt;

use crate::card::{Card, CardColor};
use crate::error::{Result, UnoError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Takes turns through the console.
    Human,
    /// Takes randomised turns; `number` is the suffix of its generated name.
    Computer { number: usize },
}

#[derive(Debug)]
pub struct Player {
    id: String,
    pub hand: Vec<Card>,
    called_uno: bool,
    kind: PlayerKind,
    session: Option<String>,
}

impl Player {
    /// Creates a console-driven player. The name is trimmed and must not be blank.
    pub fn human(name: &str) -> Result<Self> {
        let id = name.trim();
        if id.is_empty() {
            return Err(UnoError::BlankPlayerId);
        }

        Ok(Self::with_kind(id.to_string(), PlayerKind::Human))
    }

    pub fn computer(number: usize) -> Self {
        Self::with_kind(format!("Player {number}"), PlayerKind::Computer { number })
    }

    fn with_kind(id: String, kind: PlayerKind) -> Self {
        Self {
            id,
            hand: Vec::new(),
            called_uno: false,
            kind,
            session: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Renames the player. Blank names are ignored and `false` is returned.
    pub fn rename(&mut self, name: &str) -> bool {
        let id = name.trim();
        if id.is_empty() {
            return false;
        }
        self.id = id.to_string();
        true
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer { .. })
    }

    /// Name of the game room this player has joined, if any.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub(crate) fn join_session(&mut self, room: &str) {
        if self.session.is_none() {
            self.session = Some(room.to_string());
        }
    }

    pub(crate) fn leave_session(&mut self) {
        self.hand.clear();
        self.called_uno = false;
        self.session = None;
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    /// Replaces the hand with freshly dealt cards.
    pub fn deal_hand(&mut self, cards: Vec<Card>) {
        self.hand = cards;
        self.called_uno = false;
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.called_uno = false;
    }

    /// Takes a card out of the hand to play it. Does not reset the UNO call.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Yells "UNO". Only counts while holding exactly two cards, right before playing one of them.
    pub fn call_uno(&mut self) -> bool {
        if self.hand.len() == 2 && !self.called_uno {
            self.called_uno = true;
            true
        } else {
            false
        }
    }

    pub fn called_uno(&self) -> bool {
        self.called_uno
    }

    /// Down to one card (or none) without having called UNO.
    pub fn missed_uno(&self) -> bool {
        self.hand.len() <= 1 && !self.called_uno
    }

    pub fn has_color(&self, color: CardColor) -> bool {
        self.hand.iter().any(|card| card.color() == Some(color))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
