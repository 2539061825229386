//! Runtime configuration for the terminal host.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::game::checks::DEFAULT_MIN_PLAYERS;

/// Host settings.
///
/// Environment variables (a `.env` file is honoured by the binary):
/// - `PALERMO_SEED` - Fixed shuffle seed (default: random per session)
/// - `PALERMO_MIN_PLAYERS` - Smallest roster allowed to continue (default: 3)
/// - `PALERMO_AUTO_ADVANCE_MS` - Pause after an elimination before the phase advances (default: 2000)
/// - `PALERMO_REVEAL_TIMEOUT_SECS` - How long a private card stays up (default: 30)
/// - `PALERMO_LOG_DIR` - Log root (default: platform cache dir)
/// - `PALERMO_SESSION_ID` - Log sub-directory name (default: `session_<unix secs>`)
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub min_players: usize,
    pub auto_advance: Duration,
    pub reveal_timeout: Duration,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_players: DEFAULT_MIN_PLAYERS,
            auto_advance: Duration::from_millis(2000),
            reveal_timeout: Duration::from_secs(30),
            log_dir: None,
            session_id: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = parse(&lookup, "PALERMO_SEED") {
            config.seed = Some(seed);
        }
        if let Some(min) = parse::<usize, _>(&lookup, "PALERMO_MIN_PLAYERS") {
            config.min_players = min.max(1);
        }
        if let Some(ms) = parse(&lookup, "PALERMO_AUTO_ADVANCE_MS") {
            config.auto_advance = Duration::from_millis(ms);
        }
        if let Some(secs) = parse(&lookup, "PALERMO_REVEAL_TIMEOUT_SECS") {
            config.reveal_timeout = Duration::from_secs(secs);
        }
        config.log_dir = non_empty(&lookup, "PALERMO_LOG_DIR").map(PathBuf::from);
        config.session_id = non_empty(&lookup, "PALERMO_SESSION_ID");

        config
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.seed, None);
        assert_eq!(config.min_players, 3);
        assert_eq!(config.auto_advance, Duration::from_millis(2000));
        assert_eq!(config.reveal_timeout, Duration::from_secs(30));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("PALERMO_SEED", "42"),
            ("PALERMO_MIN_PLAYERS", "5"),
            ("PALERMO_AUTO_ADVANCE_MS", "250"),
            ("PALERMO_REVEAL_TIMEOUT_SECS", "10"),
            ("PALERMO_LOG_DIR", "/var/log/palermo"),
            ("PALERMO_SESSION_ID", "friday"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.min_players, 5);
        assert_eq!(config.auto_advance, Duration::from_millis(250));
        assert_eq!(config.reveal_timeout, Duration::from_secs(10));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/palermo")));
        assert_eq!(config.session_id.as_deref(), Some("friday"));
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = config_from(&[
            ("PALERMO_SEED", "soon"),
            ("PALERMO_MIN_PLAYERS", "0"),
            ("PALERMO_AUTO_ADVANCE_MS", "-1"),
            ("PALERMO_SESSION_ID", "  "),
        ]);
        assert_eq!(config.seed, None);
        assert_eq!(config.min_players, 1);
        assert_eq!(config.auto_advance, Duration::from_millis(2000));
        assert_eq!(config.session_id, None);
    }
}
