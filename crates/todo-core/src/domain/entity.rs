//! Domain Layer - Core Entity Trait
//!
//! Every record kept in an ordered list has a unique ID.

use std::hash::Hash;

/// Core trait for list entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors surfaced by the todo model
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// Add was called with blank text
    #[error("Please enter a todo text.")]
    EmptyText,

    /// The backing key-value store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TodoError {
    /// True for the recoverable "warn and refuse" input error
    pub fn is_warning(&self) -> bool {
        matches!(self, TodoError::EmptyText)
    }
}
