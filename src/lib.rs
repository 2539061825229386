//! Night in Palermo
//!
//! A pass-and-play social deduction game for one table and one screen.
//! Players are dealt secret characters (civilians, two kinds of killer, a
//! cop), look at their own card in turn, then alternate days of voting and
//! nights of killing until one side wins.
//!
//! # Architecture
//!
//! - `data` - Players, the character catalogue, selection counts, logs
//! - `game` - The session state machine and its action API
//! - `config` - Settings read from the environment
//! - `logging` - File-backed tracing for the terminal host
//! - `tui` - Terminal user interface with ratatui

pub mod config;
pub mod data;
pub mod game;
pub mod logging;
pub mod tui;

pub use data::*;
pub use game::{GameSession, Phase, SessionState};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Reasons the host refuses to take a step
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player name cannot be empty")]
    EmptyName,

    #[error("need at least {need} players, have {have}")]
    NotEnoughPlayers { have: usize, need: usize },

    #[error("selected {selected} characters for {players} players")]
    SelectionMismatch { selected: usize, players: usize },

    #[error("{remaining} player(s) still have to see their character")]
    RevealsPending { remaining: usize },

    #[error("expected phase {expected}, game is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },
}
