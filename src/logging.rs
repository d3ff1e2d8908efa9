//! Logging configuration using tracing
//!
//! Logs go to a daily-rolled file under the data directory, never to the
//! terminal, so command output stays clean.

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::VennPaths;
use crate::error::{VennError, VennResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "VENN_LOG";

const DEFAULT_FILTER: &str = "venn_cli=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/logs/venn.log.<date>`. The level is
/// controlled by `VENN_LOG`.
///
/// # Examples
/// ```bash
/// VENN_LOG=debug venn send
/// ```
pub fn init(paths: &VennPaths) -> VennResult<()> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "venn.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| VennError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(log_dir = %log_dir.display(), "Logging initialized");
    Ok(())
}
