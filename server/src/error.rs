//! Errors surfaced by the server binary.

use thiserror::Error;
use todo_core::RegistryError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("unreadable TODO_LOG: {0}")]
    LogEnv(std::env::VarError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install log subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to wire components: {0}")]
    Registry(#[from] RegistryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
