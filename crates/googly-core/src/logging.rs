use std::path::PathBuf;

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_RETENTION_DAYS: u64 = 7;

/// Return the log directory path.
///
/// Precedence: `GOOGLY_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/googly/`
/// Linux: `$XDG_DATA_HOME/googly/logs/` or `~/.local/share/googly/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("GOOGLY_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("googly");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("googly").join("logs");
        }
    }

    PathBuf::from("logs")
}

/// Remove googly log files older than `max_age_days` from the given directory.
///
/// Only deletes files whose name starts with `googly.log` (the prefix used by
/// the daily rolling appender) in case the log directory is shared.
fn cleanup_old_logs(log_path: &std::path::Path, max_age_days: u64) {
    let cutoff =
        std::time::SystemTime::now() - std::time::Duration::from_secs(max_age_days * 86400);
    if let Ok(entries) = std::fs::read_dir(log_path) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("googly.log") {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if let Ok(modified) = meta.modified() {
                    if modified < cutoff {
                        let _ = std::fs::remove_file(entry.path());
                    }
                }
            }
        }
    }
}

/// Initialize the logging subsystem.
///
/// Filter controlled by `GOOGLY_LOG` or `RUST_LOG` (default: `info`).
/// File output: daily rotation in [`log_dir`], 7-day retention. The process
/// renders to the terminal, so nothing is ever written to stdout/stderr
/// after startup.
pub fn init() {
    let filter = EnvFilter::try_from_env("GOOGLY_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_path) {
        eprintln!(
            "warning: failed to create log directory {:?}: {}",
            log_path, e
        );
    }

    cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_appender = rolling::daily(&log_path, "googly.log");
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::debug!(dir = %log_path.display(), "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid data races.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn log_dir_respects_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("GOOGLY_LOG_DIR").ok();

        std::env::set_var("GOOGLY_LOG_DIR", "/tmp/googly-test-logs");
        assert_eq!(log_dir(), PathBuf::from("/tmp/googly-test-logs"));

        match original {
            Some(v) => std::env::set_var("GOOGLY_LOG_DIR", v),
            None => std::env::remove_var("GOOGLY_LOG_DIR"),
        }
    }

    #[test]
    fn cleanup_old_logs_removes_stale_files() {
        let tmp = std::env::temp_dir().join("googly-test-cleanup");
        let _ = std::fs::create_dir_all(&tmp);

        let log_a = tmp.join("googly.log.2025-01-01");
        let log_b = tmp.join("googly.log.2025-01-02");
        let other = tmp.join("other.txt");
        std::fs::write(&log_a, "a").unwrap();
        std::fs::write(&log_b, "b").unwrap();
        std::fs::write(&other, "c").unwrap();

        // max_age_days=0 means the cutoff is "now", so all matching files
        // get cleaned.
        cleanup_old_logs(&tmp, 0);
        assert!(!log_a.exists(), "stale log file should be deleted");
        assert!(!log_b.exists(), "stale log file should be deleted");
        assert!(other.exists(), "unrelated file should be preserved");

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
