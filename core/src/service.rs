//! CRUD operations over the todo-item store.
//!
//! # Design
//! Reads take `&self` and mutations take `&mut self`; callers that share the
//! service across tasks wrap it in a single lock so id allocation and store
//! mutation are serialized. Every operation logs one `info` line, and a failed
//! lookup logs a `warn` line before returning `TodoItemError::NotFound`.

use std::sync::Arc;

use serde::Serialize;

use crate::error::TodoItemError;
use crate::logger::{Component, Logger};
use crate::store::TodoItemStore;
use crate::types::{CreateTodoItem, TodoItem, UpdateTodoItem};

pub struct TodoItemService {
    logger: Arc<dyn Logger>,
    store: TodoItemStore,
}

impl Component for TodoItemService {
    const NAME: &'static str = "TodoItemService";
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl TodoItemService {
    /// Service over the seeded store. Logs the configured `constant` once.
    pub fn new(logger: Arc<dyn Logger>, constant: &str) -> Self {
        logger.info(&format!("CONSTANT = {constant}"), &[]);
        Self::with_store(logger, TodoItemStore::seeded())
    }

    pub fn with_store(logger: Arc<dyn Logger>, store: TodoItemStore) -> Self {
        Self { logger, store }
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub fn find_all(&self) -> &[TodoItem] {
        self.logger.info("Find All", &[]);
        self.store.items()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&TodoItem> {
        self.logger.info(&format!("Find by id {id}"), &[]);
        self.store.find(id)
    }

    /// Fails only when the store has run out of ids.
    pub fn create(&mut self, input: CreateTodoItem) -> Result<TodoItem, TodoItemError> {
        self.logger.info(&format!("Create {}", to_json(&input)), &[]);
        let Some(id) = self.store.next_id() else {
            self.logger.warn("no todoitem ids left to allocate", &[]);
            return Err(TodoItemError::IdsExhausted);
        };
        let item = TodoItem::from_input(id, input);
        self.store.push(item.clone());
        Ok(item)
    }

    pub fn update(&mut self, id: u32, patch: UpdateTodoItem) -> Result<TodoItem, TodoItemError> {
        self.logger
            .info(&format!("Update {id} {}", to_json(&patch)), &[]);
        let Some(item) = self.store.find_mut(id) else {
            return Err(self.not_found(id));
        };
        item.apply(patch);
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: u32) -> Result<TodoItem, TodoItemError> {
        self.logger.info(&format!("Delete {id}"), &[]);
        self.store.remove(id).ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: u32) -> TodoItemError {
        self.logger
            .warn(&format!("unable to find todoitem with id {id}"), &[]);
        TodoItemError::NotFound { id }
    }
}

impl std::fmt::Debug for TodoItemService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoItemService")
            .field("logger", &self.logger.name())
            .field("store", &self.store)
            .finish()
    }
}
