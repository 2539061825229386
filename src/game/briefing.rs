//! What players learn: privately on reveal, publicly on elimination

use crate::data::{Character, Elimination, Player, PlayerId, Role};

/// The private card a player sees when revealing their character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Briefing {
    pub name: String,
    pub character: Character,
    /// Other killers, for killers.
    pub partners: Vec<String>,
    /// The open killer, for the cop.
    pub open_killer: Option<String>,
}

impl Briefing {
    /// `None` for unknown ids and players not dealt a character yet.
    pub fn for_player(players: &[Player], id: PlayerId) -> Option<Self> {
        let player = players.iter().find(|p| p.id == id)?;
        let character = player.character?;

        let partners = match character.role() {
            Role::Killer => players
                .iter()
                .filter(|p| p.id != id && p.is_killer())
                .map(|p| p.name.clone())
                .collect(),
            _ => Vec::new(),
        };

        let open_killer = match character.role() {
            Role::Cop => players
                .iter()
                .find(|p| p.character == Some(Character::OpenKiller))
                .map(|p| p.name.clone()),
            _ => None,
        };

        Some(Self {
            name: player.name.clone(),
            character,
            partners,
            open_killer,
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{}, you are the {}", self.name, self.character),
            format!("({})", self.character.local_name()),
            String::new(),
            self.character.description().to_string(),
        ];
        if !self.partners.is_empty() {
            lines.push(String::new());
            lines.push(format!("Your partner: {}", self.partners.join(" and ")));
        }
        if let Some(name) = &self.open_killer {
            lines.push(String::new());
            lines.push(format!("The open killer is {}", name));
        }
        lines
    }
}

/// Public announcement after an elimination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationNotice {
    pub name: String,
    /// Only announced for day votes.
    pub character: Option<Character>,
}

impl EliminationNotice {
    pub fn for_elimination(elimination: &Elimination) -> Self {
        Self {
            name: elimination.player.name.clone(),
            character: if elimination.during_day {
                elimination.player.character
            } else {
                None
            },
        }
    }

    pub fn message(&self) -> String {
        match self.character {
            Some(character) => format!("{} was the {}", self.name, character),
            None => format!("{} has been eliminated", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dealt(name: &str, character: Character) -> Player {
        let mut player = Player::new(name);
        player.assign(character);
        player
    }

    fn table() -> Vec<Player> {
        vec![
            dealt("Anna", Character::OpenKiller),
            dealt("Babis", Character::HiddenKiller),
            dealt("Chloe", Character::Cop),
            dealt("Dimitris", Character::Civilian),
        ]
    }

    #[test]
    fn killers_learn_their_partners() {
        let players = table();
        let briefing = Briefing::for_player(&players, players[1].id).unwrap();
        assert_eq!(briefing.character, Character::HiddenKiller);
        assert_eq!(briefing.partners, vec!["Anna".to_string()]);
        assert_eq!(briefing.open_killer, None);
    }

    #[test]
    fn cop_learns_only_the_open_killer() {
        let players = table();
        let briefing = Briefing::for_player(&players, players[2].id).unwrap();
        assert_eq!(briefing.open_killer.as_deref(), Some("Anna"));
        assert!(briefing.partners.is_empty());
        assert!(briefing.lines().iter().any(|l| l.contains("Anna")));
        assert!(!briefing.lines().iter().any(|l| l.contains("Babis")));
    }

    #[test]
    fn civilians_learn_nothing_else() {
        let players = table();
        let briefing = Briefing::for_player(&players, players[3].id).unwrap();
        assert!(briefing.partners.is_empty());
        assert_eq!(briefing.open_killer, None);
    }

    #[test]
    fn cop_without_open_killer_learns_nothing() {
        let players = vec![
            dealt("Anna", Character::HiddenKiller),
            dealt("Chloe", Character::Cop),
        ];
        let briefing = Briefing::for_player(&players, players[1].id).unwrap();
        assert_eq!(briefing.open_killer, None);
    }

    #[test]
    fn no_briefing_before_the_deal() {
        let players = vec![Player::new("Anna")];
        assert!(Briefing::for_player(&players, players[0].id).is_none());
        assert!(Briefing::for_player(&players, PlayerId::new()).is_none());
    }

    #[test]
    fn day_votes_announce_the_character() {
        let elimination = Elimination {
            player: dealt("Anna", Character::OpenKiller),
            round: 1,
            during_day: true,
            at: Utc::now(),
        };
        let notice = EliminationNotice::for_elimination(&elimination);
        assert_eq!(notice.message(), "Anna was the Open Killer");
    }

    #[test]
    fn night_kills_stay_secret() {
        let elimination = Elimination {
            player: dealt("Dimitris", Character::Cop),
            round: 2,
            during_day: false,
            at: Utc::now(),
        };
        let notice = EliminationNotice::for_elimination(&elimination);
        assert_eq!(notice.character, None);
        assert_eq!(notice.message(), "Dimitris has been eliminated");
    }
}
