use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TYPEMASTER_LOG";
pub const LOG_FILE: &str = "typemaster.log";
const DEFAULT_FILTER: &str = "typemaster=info";

/// Routes `tracing` output to a file so nothing draws over the terminal UI.
///
/// The returned guard flushes the writer when dropped; keep it alive for the
/// whole run. `None` means logging is off (directory not writable, or a
/// subscriber was already installed).
pub fn init(log_dir: &Path) -> Option<WorkerGuard> {
    fs::create_dir_all(log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(guard)
}
