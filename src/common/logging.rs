//! Logging configuration using tracing
//!
//! The relay's stdout/stderr belong to Unity and the downstream editor, so
//! log output goes to a file, and only when explicitly requested.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::error::Result;

/// Log filter directive, e.g. `URELAY_LOG=debug`. Unset = logging off.
pub const ENV_LOG: &str = "URELAY_LOG";

/// Overrides the log directory (mainly for tests).
pub const ENV_LOG_DIR: &str = "URELAY_LOG_DIR";

/// Initialize the logging subsystem.
///
/// Logs are written to `~/.local/share/unity-relay/logs/` (or `URELAY_LOG_DIR`).
/// Without `URELAY_LOG` set, no subscriber is installed and all tracing
/// macros are no-ops. The relay runs on every Unity click, so it stays
/// silent unless someone is actively debugging it.
///
/// # Examples
/// ```bash
/// URELAY_LOG=debug urelay --from-unity /project -g 'lib/main.cs':12
/// ```
pub fn init() -> Result<()> {
    let Ok(directive) = std::env::var(ENV_LOG) else {
        return Ok(());
    };

    // The variable being set at all means logs were asked for; a typo in
    // the directive should not silence them entirely.
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    // Synchronous writer: every event must reach the file before exec()
    // replaces this process image.
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "urelay.log");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "unity-relay logging enabled"
    );

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_LOG_DIR) {
        return PathBuf::from(dir);
    }
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("unity-relay").join("logs")
}
