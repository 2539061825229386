//! File-backed tracing for the terminal host
//!
//! The terminal is owned by the UI, so logs only go to a per-session file.

use crate::config::AppConfig;
use crate::Result;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "palermo.log";

/// Install the global subscriber. Keep the returned guard alive for as long
/// as logs should be flushed.
pub fn setup_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let session_id = config.session_id.clone().unwrap_or_else(default_session_id);
    let session_log_dir = log_directory(config).join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}

/// Configured directory, then the platform cache directory, then temp.
pub fn log_directory(config: &AppConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }
    match ProjectDirs::from("", "", "night-in-palermo") {
        Some(dirs) => dirs.cache_dir().join("logs"),
        None => std::env::temp_dir().join("night-in-palermo").join("logs"),
    }
}

fn default_session_id() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directory_wins() {
        let config = AppConfig {
            log_dir: Some(PathBuf::from("/srv/palermo")),
            ..AppConfig::default()
        };
        assert_eq!(log_directory(&config), PathBuf::from("/srv/palermo"));
    }

    #[test]
    fn default_directory_is_namespaced() {
        let dir = log_directory(&AppConfig::default());
        assert!(dir.to_string_lossy().contains("palermo"));
    }

    #[test]
    fn session_ids_are_timestamped() {
        assert!(default_session_id().starts_with("session_"));
    }
}
