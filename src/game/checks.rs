//! Preconditions the host enforces before calling an action
//!
//! The session itself accepts any call. These checks are what the terminal
//! host runs to refuse a step and tell the table why.

use super::{Phase, SessionState};
use crate::GameError;

/// Fewest players the host lets a game start with.
pub const DEFAULT_MIN_PLAYERS: usize = 3;

/// Trimmed name, or `EmptyName`.
pub fn player_name(raw: &str) -> Result<String, GameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn roster_ready(state: &SessionState, min_players: usize) -> Result<(), GameError> {
    let have = state.players.len();
    if have < min_players {
        return Err(GameError::NotEnoughPlayers {
            have,
            need: min_players,
        });
    }
    Ok(())
}

/// One selected character per seat.
pub fn selection_ready(state: &SessionState) -> Result<(), GameError> {
    let selected = state.selection.total();
    let players = state.players.len();
    if selected != players {
        return Err(GameError::SelectionMismatch { selected, players });
    }
    Ok(())
}

pub fn reveals_complete(state: &SessionState) -> Result<(), GameError> {
    let remaining = state.players.iter().filter(|p| !p.has_revealed).count();
    if remaining > 0 {
        return Err(GameError::RevealsPending { remaining });
    }
    Ok(())
}

pub fn in_phase(state: &SessionState, expected: Phase) -> Result<(), GameError> {
    if state.phase != expected {
        return Err(GameError::WrongPhase {
            expected,
            actual: state.phase,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Character, Player};

    fn with_players(n: usize) -> SessionState {
        let mut state = SessionState::new();
        state.players = (0..n).map(|i| Player::new(format!("P{}", i))).collect();
        state
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(player_name("  Yannis ").unwrap(), "Yannis");
        assert!(matches!(player_name("   "), Err(GameError::EmptyName)));
    }

    #[test]
    fn roster_needs_minimum() {
        let state = with_players(2);
        let err = roster_ready(&state, DEFAULT_MIN_PLAYERS).unwrap_err();
        assert!(matches!(err, GameError::NotEnoughPlayers { have: 2, need: 3 }));
        assert!(roster_ready(&with_players(3), DEFAULT_MIN_PLAYERS).is_ok());
    }

    #[test]
    fn selection_must_match_roster() {
        let mut state = with_players(3);
        state.selection.set(Character::Civilian, 2);
        let err = selection_ready(&state).unwrap_err();
        assert_eq!(err.to_string(), "selected 2 characters for 3 players");

        state.selection.set(Character::OpenKiller, 1);
        assert!(selection_ready(&state).is_ok());

        state.selection.set(Character::Cop, 1);
        assert!(selection_ready(&state).is_err());
    }

    #[test]
    fn reveals_counts_remaining() {
        let mut state = with_players(3);
        state.players[0].has_revealed = true;
        assert!(matches!(
            reveals_complete(&state),
            Err(GameError::RevealsPending { remaining: 2 })
        ));
        for player in &mut state.players {
            player.has_revealed = true;
        }
        assert!(reveals_complete(&state).is_ok());
    }

    #[test]
    fn phase_check_reports_both_phases() {
        let state = SessionState::new();
        let err = in_phase(&state, Phase::Day).unwrap_err();
        assert_eq!(err.to_string(), "expected phase day, game is in setup");
    }
}
