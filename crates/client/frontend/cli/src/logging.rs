//! File logging for the terminal UI.
//!
//! The TUI owns stdout, so log output goes to a per-session file only.
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "client.log";

/// Install the global subscriber writing to `<log dir>/<session>/client.log`.
///
/// The log directory comes from `CAMTEL_LOG_DIR`, falling back to the
/// platform data directory. Keep the returned guard alive for the whole run;
/// dropping it flushes and closes the writer.
pub fn setup_logging() -> Result<WorkerGuard> {
    let base = log_directory(env::var("CAMTEL_LOG_DIR").ok());
    let session_dir = create_session_dir(&base, &session_id())?;

    let file_appender = tracing_appender::rolling::never(&session_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true); // colorized for tail -f

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging to {}", session_dir.join(LOG_FILE).display());
    Ok(guard)
}

/// Resolve the base log directory.
pub fn log_directory(override_dir: Option<String>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    ProjectDirs::from("io", "camtelligence", "camtel")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create `base/session` and return it.
pub fn create_session_dir(base: &Path, session: &str) -> Result<PathBuf> {
    let dir = base.join(session);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

fn session_id() -> String {
    format!("session_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_platform_dir() {
        assert_eq!(
            log_directory(Some("/tmp/camtel-logs".to_string())),
            PathBuf::from("/tmp/camtel-logs")
        );
        assert_ne!(log_directory(Some("  ".to_string())), PathBuf::from("  "));
    }

    #[test]
    fn session_dir_is_created_under_base() {
        let base = tempfile::tempdir().unwrap();
        let dir = create_session_dir(base.path(), "session_1").unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir, base.path().join("session_1"));
    }
}
