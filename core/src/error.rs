//! Error types for the todo-item core.
//!
//! # Design
//! `TodoItemError` is what the service returns to its callers; each façade maps
//! it onto its own "not found" representation. `RegistryError` only surfaces
//! while wiring components together at startup.

use thiserror::Error;

/// Errors returned by `TodoItemService` operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoItemError {
    /// No item with the requested id is in the store.
    #[error("Unable to find todoitem")]
    NotFound { id: u32 },

    /// Every id up to `u32::MAX` has already been allocated.
    #[error("Unable to allocate a todoitem id")]
    IdsExhausted,
}

/// Errors raised while resolving named loggers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No logger was registered under the requested token.
    #[error("no logger registered for token `{token}`")]
    MissingLogger { token: String },
}
