//! Layered server configuration.
//!
//! Defaults first, then `TODO_`-prefixed environment variables, then a bare
//! `PORT` variable for hosts that only set that one.

use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Value handed to the todo-item service at construction.
    pub constant: String,
    /// Fallback filter when `TODO_LOG` is not set.
    pub log_level: String,
    /// Where to write the GraphQL SDL on startup, if anywhere.
    pub schema_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            constant: "constant value".to_string(),
            log_level: "info".to_string(),
            schema_file: None,
        }
    }
}

impl AppConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Env::prefixed("TODO_"))
            .merge(Env::raw().only(&["PORT"]))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        Jail::expect_with(|_| {
            let config = AppConfig::load()?;
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.addr(), "127.0.0.1:3000");
            Ok(())
        });
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("TODO_HOST", "0.0.0.0");
            jail.set_env("TODO_PORT", "8080");
            jail.set_env("TODO_CONSTANT", "from env");
            jail.set_env("TODO_SCHEMA_FILE", "schema.gql");
            let config = AppConfig::load()?;
            assert_eq!(config.addr(), "0.0.0.0:8080");
            assert_eq!(config.constant, "from env");
            assert_eq!(config.schema_file, Some(PathBuf::from("schema.gql")));
            Ok(())
        });
    }

    #[test]
    fn bare_port_wins_over_prefixed_port() {
        Jail::expect_with(|jail| {
            jail.set_env("TODO_PORT", "8080");
            jail.set_env("PORT", "9090");
            assert_eq!(AppConfig::load()?.port, 9090);
            Ok(())
        });
    }

    #[test]
    fn invalid_port_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("TODO_PORT", "not-a-port");
            assert!(AppConfig::load().is_err());
            Ok(())
        });
    }
}
