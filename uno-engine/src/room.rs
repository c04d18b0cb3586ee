use tracing::debug;

use crate::player::Player;

/// A named table of seated players, unique by id.
#[derive(Debug)]
pub struct GameRoom {
    name: String,
    pub(crate) players: Vec<Player>,
}

impl GameRoom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_ids(&self) -> Vec<&str> {
        self.players.iter().map(Player::id).collect()
    }

    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|x| x.id() == player_id)
    }

    pub fn get_player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|x| x.id() == player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seats the player at the end of the roster.
    ///
    /// Returns the player back when the id is already taken, so the caller can rename and retry.
    pub fn join(&mut self, mut player: Player) -> Result<(), Player> {
        if self.get_player(player.id()).is_some() {
            return Err(player);
        }

        player.join_session(&self.name);
        debug!(room = %self.name, player = %player.id(), "player joined");
        self.players.push(player);
        Ok(())
    }

    /// Removes the player with the given id, emptying their hand.
    pub fn leave(&mut self, player_id: &str) -> Option<Player> {
        let index = self.players.iter().position(|x| x.id() == player_id)?;
        let mut player = self.players.remove(index);
        player.leave_session();
        debug!(room = %self.name, player = %player_id, "player left");
        Some(player)
    }

    /// Fills the room with computer players up to `total` seats, replacing any existing ones.
    pub fn generate_computers(&mut self, total: usize) {
        self.remove_computers();

        let computers = total.saturating_sub(self.players.len());
        let mut number = 0;
        for _ in 0..computers {
            // Numbers whose name is already taken are skipped.
            loop {
                number += 1;
                if self.join(Player::computer(number)).is_ok() {
                    break;
                }
            }
        }
        debug!(room = %self.name, computers, "computer players seated");
    }

    pub fn remove_computers(&mut self) {
        self.players.retain(|player| !player.is_computer());
    }
}
