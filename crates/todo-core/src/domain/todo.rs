//! Todo Entity
//!
//! A single task record: text, completion flag, opaque unique ID.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// Opaque todo identifier, serialized as a plain string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item
///
/// Field names match the stored JSON layout: `{ "id", "text", "complete" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, immutable after creation
    pub id: TodoId,
    /// Item text content
    pub text: String,
    /// Completion status
    pub complete: bool,
}

impl TodoItem {
    /// Create a new, incomplete item with a fresh ID
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            text: text.into(),
            complete: false,
        }
    }

    pub fn toggle(&mut self) {
        self.complete = !self.complete;
    }
}

impl Entity for TodoItem {
    type Id = TodoId;

    fn id(&self) -> &TodoId {
        &self.id
    }
}
