//! Domain core for the todo-item service.
//!
//! # Overview
//! An in-memory, insertion-ordered store of todo items and the service that
//! performs find/create/update/delete over it. The service logs through a
//! named `Logger` capability that is injected at construction.
//!
//! # Design
//! - No async runtime: the service is plain synchronous Rust. The server crate
//!   decides how to share it (one `RwLock` around the whole service).
//! - Loggers are resolved by token (`<Owner>Logger`) from a `LoggerRegistry`
//!   built by `LoggerModule::for_feature`, so several owners can each get their
//!   own instance.
//! - Creation and update inputs are explicit structs, not derived from
//!   `TodoItem`.

pub mod error;
pub mod logger;
pub mod registry;
pub mod service;
pub mod store;
pub mod types;

pub use error::{RegistryError, TodoItemError};
pub use logger::{logger_token, Component, Logger, TracingLogger};
pub use registry::{LoggerModule, LoggerRegistry};
pub use service::TodoItemService;
pub use store::TodoItemStore;
pub use types::{CreateTodoItem, TodoItem, UpdateTodoItem};
