//! Domain DTOs for todo items.
//!
//! # Design
//! Creation and update inputs are separate structs rather than variants of
//! `TodoItem`: a creation input never carries an id, and every field of an
//! update input is optional so that only the fields present are applied.

use serde::{Deserialize, Serialize};

/// A single todo item held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// Combine an allocated id with a creation input.
    pub fn from_input(id: u32, input: CreateTodoItem) -> Self {
        Self {
            id,
            title: input.title,
            completed: input.completed,
        }
    }

    /// Apply the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: UpdateTodoItem) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Payload for creating a new todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodoItem {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for updating an existing todo item. Omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodoItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
