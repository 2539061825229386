//! How many of each character go into the deal

use super::Character;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Requested count per character; every character always has an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSelection {
    counts: BTreeMap<Character, u32>,
}

impl CharacterSelection {
    pub fn new() -> Self {
        Self {
            counts: Character::ALL.iter().map(|&c| (c, 0)).collect(),
        }
    }

    /// Set a count, flooring negative requests at zero. Returns the stored value.
    pub fn set(&mut self, character: Character, count: i64) -> u32 {
        let stored = count.clamp(0, i64::from(u32::MAX)) as u32;
        self.counts.insert(character, stored);
        stored
    }

    pub fn get(&self, character: Character) -> u32 {
        self.counts.get(&character).copied().unwrap_or(0)
    }

    /// Saturates rather than overflowing on absurd counts.
    pub fn total(&self) -> usize {
        self.counts
            .values()
            .fold(0usize, |sum, &n| sum.saturating_add(n as usize))
    }

    pub fn clear(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Counts in `Character::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Character, u32)> + '_ {
        Character::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl Default for CharacterSelection {
    fn default() -> Self {
        Self::new()
    }
}
