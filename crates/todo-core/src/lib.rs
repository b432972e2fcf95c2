//! Todo Core
//!
//! Layered like a small backend:
//! - domain: todo item, theme, errors
//! - list: ordered list with ID lookup and adjacent-swap reordering
//! - repository: key-value storage and the persisted list
//! - config: widget settings

pub mod config;
pub mod domain;
pub mod list;
pub mod repository;

pub use config::TodoConfig;
pub use domain::{Entity, Theme, TodoError, TodoId, TodoItem, TodoResult};
pub use list::{Direction, OrderedList, TodoList};
pub use repository::{KeyValueStore, MemoryStore, ThemeRepository, TodoRepository};
