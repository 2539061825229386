//! The character catalogue and the factions characters belong to

use serde::{Deserialize, Serialize};

/// Secret identity dealt to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Character {
    Civilian,
    OpenKiller,   // Known to the cop
    HiddenKiller, // Known only to the other killers
    Cop,
}

impl Character {
    /// Every character, in selection and pool-building order.
    pub const ALL: [Character; 4] = [
        Character::Civilian,
        Character::OpenKiller,
        Character::HiddenKiller,
        Character::Cop,
    ];

    /// Players past the end of the pool are dealt this.
    pub const DEFAULT: Character = Character::Civilian;

    pub fn role(&self) -> Role {
        match self {
            Character::Civilian => Role::Civilian,
            Character::OpenKiller | Character::HiddenKiller => Role::Killer,
            Character::Cop => Role::Cop,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Character::Civilian => "Civilian",
            Character::OpenKiller => "Open Killer",
            Character::HiddenKiller => "Hidden Killer",
            Character::Cop => "Cop",
        }
    }

    /// Label used on the printed Palermo cards.
    pub fn local_name(&self) -> &'static str {
        match self {
            Character::Civilian => "Πολίτης",
            Character::OpenKiller => "Φανερός Δολοφόνος",
            Character::HiddenKiller => "Κρυφός Δολοφόνος",
            Character::Cop => "Αστυνομικός",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Character::Civilian => "Innocent townsperson. Find the killers before they find you.",
            Character::OpenKiller => "Murderer. The cop knows your face.",
            Character::HiddenKiller => "Murderer. Nobody but your partners knows.",
            Character::Cop => "Knows the open killer. Protect the town.",
        }
    }

    pub fn icon(&self) -> &'static str {
        self.role().icon()
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse faction a character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Civilian,
    Killer,
    Cop,
}

impl Role {
    pub fn side(&self) -> Side {
        match self {
            Role::Killer => Side::Killers,
            Role::Civilian | Role::Cop => Side::Town,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Civilian => "👥",
            Role::Killer => "🔪",
            Role::Cop => "🛡",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Civilian => write!(f, "civilian"),
            Role::Killer => write!(f, "killer"),
            Role::Cop => write!(f, "cop"),
        }
    }
}

/// A winning side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Town,
    Killers,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Town => write!(f, "Town"),
            Side::Killers => write!(f, "Killers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_killer_variants_map_to_killer() {
        assert_eq!(Character::OpenKiller.role(), Role::Killer);
        assert_eq!(Character::HiddenKiller.role(), Role::Killer);
        assert_eq!(Character::Cop.role(), Role::Cop);
        assert_eq!(Character::Civilian.role(), Role::Civilian);
    }

    #[test]
    fn cops_play_for_the_town() {
        assert_eq!(Role::Cop.side(), Side::Town);
        assert_eq!(Role::Civilian.side(), Side::Town);
        assert_eq!(Role::Killer.side(), Side::Killers);
    }

    #[test]
    fn sides_print_as_history_labels() {
        assert_eq!(Side::Town.to_string(), "Town");
        assert_eq!(Side::Killers.to_string(), "Killers");
    }
}
