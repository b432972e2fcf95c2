//! Repository Layer
//!
//! Storage abstraction and the persisted todo list / theme.

mod memory;
mod theme_repo;
mod todo_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use theme_repo::ThemeRepository;
pub use todo_repo::TodoRepository;
pub use traits::KeyValueStore;
