//! Tracing subscriber setup.
//!
//! Logs go to stderr through a non-blocking writer so stdout carries only
//! command output. Seeds, codes and key material are never logged.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `seedgate=debug`.
pub const LOG_ENV: &str = "SEEDGATE_LOG";

const FALLBACK_LEVEL: &str = "info";

/// Filter from `env_value` if it parses, else `default_level`, else `info`.
#[must_use]
pub fn build_filter(env_value: Option<&str>, default_level: &str) -> EnvFilter {
    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install the global subscriber. Keep the guard alive until exit or
/// buffered lines are lost.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(
    default_level: &str,
) -> Result<WorkerGuard, Box<dyn std::error::Error + Send + Sync + 'static>> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_value = std::env::var(LOG_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(env_value.as_deref(), default_level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()?;

    Ok(guard)
}
