//! Core game logic and state management
//!
//! [`GameSession`] owns the only copy of a game's [`SessionState`] and is the
//! single place it changes. Every action runs to completion, including the win
//! check that follows an elimination, before the host can observe the state
//! again; hosts render from [`GameSession::snapshot`].
//!
//! Actions are total. Calls made in the wrong phase or with unknown ids are
//! ignored rather than reported; hosts that want to refuse such calls use
//! [`checks`] first.

pub mod assignment;
pub mod briefing;
pub mod checks;
pub mod outcome;

pub use briefing::{Briefing, EliminationNotice};
pub use outcome::Tally;

use crate::data::*;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Setup,           // Roster and character counts
    CharacterReveal, // Each player privately looks at their card
    Day,             // Town votes someone out
    Night,           // Killers pick a victim
    GameOver,
}

impl Phase {
    /// Day or night.
    pub fn in_play(&self) -> bool {
        matches!(self, Phase::Day | Phase::Night)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::CharacterReveal => "character-reveal",
            Phase::Day => "day",
            Phase::Night => "night",
            Phase::GameOver => "game-over",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything a host can render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Insertion order is display order.
    pub players: Vec<Player>,
    pub selection: CharacterSelection,
    pub phase: Phase,
    /// Starts at 1, bumped on every night to day transition.
    pub round: u32,
    pub is_day: bool,
    pub eliminated: Vec<Elimination>,
    pub history: Vec<GameRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            selection: CharacterSelection::new(),
            phase: Phase::Setup,
            round: 1,
            is_day: true,
            eliminated: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn all_revealed(&self) -> bool {
        self.players.iter().all(|p| p.has_revealed)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn tally(&self) -> Tally {
        Tally::of(&self.players)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller for one game at one table
pub struct GameSession {
    state: SessionState,
    rng: StdRng,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible deals.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: SessionState::new(),
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> &SessionState {
        &self.state
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.state.players.iter().filter(|p| p.is_alive)
    }

    pub fn selection(&self) -> &CharacterSelection {
        &self.state.selection
    }

    pub fn selection_total(&self) -> usize {
        self.state.selection.total()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn is_day(&self) -> bool {
        self.state.is_day
    }

    pub fn eliminated(&self) -> &[Elimination] {
        &self.state.eliminated
    }

    pub fn history(&self) -> &[GameRecord] {
        &self.state.history
    }

    pub fn all_revealed(&self) -> bool {
        self.state.all_revealed()
    }

    pub fn tally(&self) -> Tally {
        self.state.tally()
    }

    /// Side that won the finished game.
    pub fn winner(&self) -> Option<Side> {
        match self.state.phase {
            Phase::GameOver => self.state.history.last().map(|record| record.winner),
            _ => None,
        }
    }

    pub fn briefing(&self, id: PlayerId) -> Option<Briefing> {
        Briefing::for_player(&self.state.players, id)
    }

    // ------------------------------------------------------------------
    // Roster and selection
    // ------------------------------------------------------------------

    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let player = Player::new(name);
        let id = player.id;
        debug!(player = %id, name = %player.name, "player added");
        self.state.players.push(player);
        id
    }

    /// Unknown ids are ignored.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.state.players.iter().position(|p| p.id == id)?;
        let removed = self.state.players.remove(index);
        debug!(player = %id, name = %removed.name, "player removed");
        Some(removed)
    }

    /// Returns the stored count (negative requests become zero).
    pub fn update_selection(&mut self, character: Character, count: i64) -> u32 {
        let stored = self.state.selection.set(character, count);
        debug!(%character, requested = count, stored, "selection updated");
        stored
    }

    // ------------------------------------------------------------------
    // Round flow
    // ------------------------------------------------------------------

    /// Draw one selected character per seat at random and deal them in roster
    /// order. Seats beyond the selection get civilians. Dealing again before the game starts
    /// reshuffles and clears any reveals.
    pub fn assign_roles(&mut self) {
        if !matches!(self.state.phase, Phase::Setup | Phase::CharacterReveal) {
            return;
        }

        let seats = self.state.players.len();
        let pool = assignment::draw(&self.state.selection, seats, &mut self.rng);
        for player in &mut self.state.players {
            player.reset_for_new_round();
        }
        assignment::deal(&mut self.state.players, &pool);
        self.state.phase = Phase::CharacterReveal;

        info!(
            players = self.state.players.len(),
            pool = pool.len(),
            "characters dealt"
        );
        for player in &self.state.players {
            debug!(player = %player.id, character = ?player.character, "dealt");
        }
    }

    /// Returns whether the player was found. Only honoured during the reveal.
    pub fn reveal_character(&mut self, id: PlayerId) -> bool {
        if self.state.phase != Phase::CharacterReveal {
            return false;
        }
        match self.state.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.has_revealed = true;
                debug!(player = %id, "character revealed");
                true
            }
            None => false,
        }
    }

    /// Move from the reveal to day 1. Does not check that everyone has looked.
    pub fn start_game(&mut self) {
        if self.state.phase != Phase::CharacterReveal {
            return;
        }
        self.state.phase = Phase::Day;
        self.state.round = 1;
        self.state.is_day = true;
        info!(players = self.state.players.len(), "game started");
    }

    /// Eliminate a living player and settle the game if that decides it.
    ///
    /// Only honoured by day or night. Unknown and already dead players are
    /// ignored entirely. Returns the log entry that was appended.
    pub fn eliminate(&mut self, id: PlayerId) -> Option<Elimination> {
        if !self.state.phase.in_play() {
            return None;
        }
        let round = self.state.round;
        let during_day = self.state.is_day;
        let player = self
            .state
            .players
            .iter_mut()
            .find(|p| p.id == id && p.is_alive)?;

        let before = player.clone();
        player.is_alive = false;

        let elimination = Elimination {
            player: before,
            round,
            during_day,
            at: Utc::now(),
        };
        info!(
            player = %id,
            name = %elimination.player.name,
            round,
            during_day,
            "player eliminated"
        );
        self.state.eliminated.push(elimination.clone());
        self.settle();

        Some(elimination)
    }

    /// Day becomes night; night becomes the next day.
    pub fn advance_phase(&mut self) {
        match self.state.phase {
            Phase::Day => {
                self.state.phase = Phase::Night;
                self.state.is_day = false;
                info!(round = self.state.round, "night falls");
            }
            Phase::Night => {
                self.state.phase = Phase::Day;
                self.state.is_day = true;
                self.state.round += 1;
                info!(round = self.state.round, "day breaks");
            }
            _ => return,
        }
        self.settle();
    }

    /// End the game if a side has won. Only while day or night, so a game
    /// ends once and records once.
    fn settle(&mut self) -> Option<Side> {
        if !self.state.phase.in_play() {
            return None;
        }
        let tally = self.state.tally();
        let winner = tally.winner()?;

        self.state.phase = Phase::GameOver;
        self.state.history.push(GameRecord {
            round: self.state.round,
            winner,
        });
        info!(
            %winner,
            round = self.state.round,
            killers = tally.killers,
            town = tally.town,
            "game over"
        );
        Some(winner)
    }

    // ------------------------------------------------------------------
    // Resets
    // ------------------------------------------------------------------

    /// Back to an empty table.
    pub fn reset_full(&mut self) {
        self.state = SessionState::new();
        info!("session reset");
    }

    /// Play again with the same people.
    pub fn reset_keep_roster(&mut self) {
        let mut players = std::mem::take(&mut self.state.players);
        for player in &mut players {
            player.reset_for_new_round();
        }
        self.state = SessionState {
            players,
            ..SessionState::new()
        };
        info!(players = self.state.players.len(), "session reset, roster kept");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
