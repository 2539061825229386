//! Player state for one seat at the table

use super::{Character, Id, Role, Side};
use serde::{Deserialize, Serialize};

/// Alias used across the session API
pub type PlayerId = Id;

/// One participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub character: Option<Character>,
    pub role: Option<Role>,          // Always `character.role()` once dealt
    pub has_revealed: bool,
    pub is_alive: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            character: None,
            role: None,
            has_revealed: false,
            is_alive: true,
        }
    }

    /// Deal a character; the role follows from it.
    pub fn assign(&mut self, character: Character) {
        self.character = Some(character);
        self.role = Some(character.role());
    }

    /// Back to a fresh seat, keeping id and name.
    pub fn reset_for_new_round(&mut self) {
        self.character = None;
        self.role = None;
        self.has_revealed = false;
        self.is_alive = true;
    }

    pub fn side(&self) -> Option<Side> {
        self.role.map(|role| role.side())
    }

    pub fn is_killer(&self) -> bool {
        self.role == Some(Role::Killer)
    }

    /// Alive and counted for the town (civilian or cop).
    pub fn is_alive_town(&self) -> bool {
        self.is_alive && self.side() == Some(Side::Town)
    }

    pub fn is_alive_killer(&self) -> bool {
        self.is_alive && self.is_killer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_unassigned_and_alive() {
        let player = Player::new("Maria");
        assert_eq!(player.name, "Maria");
        assert_eq!(player.character, None);
        assert_eq!(player.role, None);
        assert!(!player.has_revealed);
        assert!(player.is_alive);
    }

    #[test]
    fn assign_derives_role() {
        let mut player = Player::new("Nikos");
        player.assign(Character::HiddenKiller);
        assert_eq!(player.role, Some(Role::Killer));
        assert!(player.is_alive_killer());
        assert!(!player.is_alive_town());
    }

    #[test]
    fn reset_keeps_identity() {
        let mut player = Player::new("Eleni");
        let id = player.id;
        player.assign(Character::Cop);
        player.has_revealed = true;
        player.is_alive = false;

        player.reset_for_new_round();

        assert_eq!(player.id, id);
        assert_eq!(player.name, "Eleni");
        assert_eq!(player, Player { id, ..Player::new("Eleni") });
    }
}
