//! Domain Layer
//!
//! Entities and errors. No storage or browser dependencies.

mod entity;
mod theme;
mod todo;

pub use entity::{Entity, TodoError, TodoResult};
pub use theme::Theme;
pub use todo::{TodoId, TodoItem};
