//! Subscriber setup for the server binary.

use std::env::{self, VarError};

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::ServerError;

/// Env var that overrides the configured log filter.
pub const LOG_ENV: &str = "TODO_LOG";

/// Filter from `TODO_LOG` when set, otherwise from `config.log_level`.
pub fn env_filter(config: &AppConfig) -> Result<EnvFilter, ServerError> {
    parse_filter(env::var(LOG_ENV), &config.log_level)
}

/// A set-but-invalid override is an error, never a silent fallback.
fn parse_filter(
    from_env: Result<String, VarError>,
    fallback: &str,
) -> Result<EnvFilter, ServerError> {
    let directives = match from_env {
        Ok(directives) => directives,
        Err(VarError::NotPresent) => fallback.to_string(),
        Err(err @ VarError::NotUnicode(_)) => return Err(ServerError::LogEnv(err)),
    };
    Ok(EnvFilter::try_new(directives)?)
}

/// Install the global `fmt` subscriber. Fails if one is already installed.
pub fn init_logging(config: &AppConfig) -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(true)
        .try_init()
        .map_err(ServerError::Subscriber)?;
    tracing::debug!(level = %config.log_level, "logging initialized");
    Ok(())
}
