//! Per-component logger registration.
//!
//! `LoggerModule::for_feature` builds one `TracingLogger` per owning component
//! and files it under that component's token. Consumers resolve their logger
//! with `LoggerRegistry::inject::<Self>()` without knowing the key format.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::logger::{logger_token, Component, Logger, TracingLogger};

/// Named loggers keyed by owner token.
#[derive(Clone, Default)]
pub struct LoggerRegistry {
    loggers: BTreeMap<String, Arc<dyn Logger>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `logger` under `token`, replacing any previous entry.
    pub fn register(&mut self, token: impl Into<String>, logger: Arc<dyn Logger>) {
        self.loggers.insert(token.into(), logger);
    }

    pub fn get(&self, token: &str) -> Option<Arc<dyn Logger>> {
        self.loggers.get(token).cloned()
    }

    /// Resolve the logger owned by component `C`.
    pub fn inject<C: Component>(&self) -> Result<Arc<dyn Logger>, RegistryError> {
        let token = logger_token(C::NAME);
        self.get(&token)
            .ok_or(RegistryError::MissingLogger { token })
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.loggers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.tokens()).finish()
    }
}

/// Factory for feature-scoped logger registries.
pub struct LoggerModule;

impl LoggerModule {
    /// One `TracingLogger` per owner name, each registered under its token.
    pub fn for_feature(owners: &[&str]) -> LoggerRegistry {
        let mut registry = LoggerRegistry::new();
        for owner in owners {
            registry.register(logger_token(owner), Arc::new(TracingLogger::new(*owner)));
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alpha;

    impl Component for Alpha {
        const NAME: &'static str = "Alpha";
    }

    struct Beta;

    impl Component for Beta {
        const NAME: &'static str = "Beta";
    }

    #[test]
    fn for_feature_registers_one_logger_per_owner() {
        let registry = LoggerModule::for_feature(&["Alpha", "Beta"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.tokens().collect::<Vec<_>>(),
            vec!["AlphaLogger", "BetaLogger"]
        );
    }

    #[test]
    fn inject_resolves_logger_named_after_owner() {
        let registry = LoggerModule::for_feature(&["Alpha", "Beta"]);
        assert_eq!(registry.inject::<Alpha>().unwrap().name(), "Alpha");
        assert_eq!(registry.inject::<Beta>().unwrap().name(), "Beta");
    }

    #[test]
    fn inject_unregistered_owner_fails_with_token() {
        let registry = LoggerModule::for_feature(&["Alpha"]);
        let err = registry.inject::<Beta>().unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingLogger {
                token: "BetaLogger".to_string()
            }
        );
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut registry = LoggerModule::for_feature(&["Alpha"]);
        registry.register(logger_token("Alpha"), Arc::new(TracingLogger::new("Replacement")));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("AlphaLogger").unwrap().name(), "Replacement");
    }

    #[test]
    fn empty_feature_yields_empty_registry() {
        assert!(LoggerModule::for_feature(&[]).is_empty());
    }
}
