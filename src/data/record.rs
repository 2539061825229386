//! Append-only logs kept by a session

use super::{Player, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the eliminated-players log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elimination {
    /// The player as they were just before being eliminated.
    pub player: Player,
    pub round: u32,
    pub during_day: bool,
    pub at: DateTime<Utc>,
}

/// One finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub round: u32,
    pub winner: Side,
}
