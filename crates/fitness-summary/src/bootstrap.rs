use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Environment bootstrap ──────────────────────────────────────────────────────

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables that are already set are left untouched.
pub fn load_env_file() -> Result<PathBuf, dotenvy::Error> {
    dotenvy::dotenv()
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `DEBUG`/`INFO`/`WARNING`/`ERROR` level name to a tracing directive.
///
/// Unrecognised names are passed through unchanged.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" | "WARN" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Logs go to stderr so the report on stdout stays clean. Falls back to
/// `"warn"` if the level string is not a valid filter.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
