//! Data structures for a game of Night in Palermo
//!
//! Defines players, the character catalogue, selection counts and the
//! append-only records a session keeps.

pub mod character;
pub mod player;
pub mod record;
pub mod selection;

pub use character::*;
pub use player::*;
pub use record::*;
pub use selection::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First group is enough to tell players apart in logs
        let text = self.0.simple().to_string();
        write!(f, "{}", &text[..8])
    }
}
