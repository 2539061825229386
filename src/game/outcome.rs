//! Win evaluation

use crate::data::{Player, Side};
use serde::{Deserialize, Serialize};

/// Head count of the living
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub alive: usize,
    pub killers: usize,
    /// Civilians and cops.
    pub town: usize,
}

impl Tally {
    pub fn of(players: &[Player]) -> Self {
        players.iter().fold(Self::default(), |mut tally, player| {
            if player.is_alive {
                tally.alive += 1;
            }
            if player.is_alive_killer() {
                tally.killers += 1;
            } else if player.is_alive_town() {
                tally.town += 1;
            }
            tally
        })
    }

    /// Town wins once no killer is left; killers win once they match the town.
    pub fn winner(&self) -> Option<Side> {
        if self.killers == 0 {
            Some(Side::Town)
        } else if self.killers >= self.town {
            Some(Side::Killers)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Character;

    fn table(characters: &[Character]) -> Vec<Player> {
        characters
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let mut player = Player::new(format!("P{}", i));
                player.assign(c);
                player
            })
            .collect()
    }

    #[test]
    fn cops_count_for_the_town() {
        let players = table(&[
            Character::Cop,
            Character::Civilian,
            Character::OpenKiller,
        ]);
        let tally = Tally::of(&players);
        assert_eq!(tally, Tally { alive: 3, killers: 1, town: 2 });
        assert_eq!(tally.winner(), None);
    }

    #[test]
    fn dead_players_are_not_counted() {
        let mut players = table(&[
            Character::Civilian,
            Character::Civilian,
            Character::HiddenKiller,
        ]);
        players[0].is_alive = false;
        let tally = Tally::of(&players);
        assert_eq!(tally, Tally { alive: 2, killers: 1, town: 1 });
        assert_eq!(tally.winner(), Some(Side::Killers));
    }

    #[test]
    fn no_killers_left_means_town() {
        let mut players = table(&[Character::Civilian, Character::OpenKiller]);
        players[1].is_alive = false;
        assert_eq!(Tally::of(&players).winner(), Some(Side::Town));
    }

    #[test]
    fn town_wins_even_when_everyone_is_dead() {
        assert_eq!(Tally::default().winner(), Some(Side::Town));
    }

    #[test]
    fn killers_outnumbering_town_win() {
        let tally = Tally { alive: 3, killers: 2, town: 1 };
        assert_eq!(tally.winner(), Some(Side::Killers));
    }
}
