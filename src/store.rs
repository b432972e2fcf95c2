//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo list
//! and the theme live here together with the storage they persist to.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{
    Direction, Theme, ThemeRepository, TodoConfig, TodoId, TodoItem, TodoRepository, TodoResult,
};

use crate::storage::BrowserStorage;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Persisted todo list
    pub todos: TodoRepository<BrowserStorage>,
    /// Persisted light/dark theme
    pub theme: ThemeRepository<BrowserStorage>,
}

impl AppState {
    /// Load both slots from localStorage
    pub fn load(config: &TodoConfig) -> Self {
        Self {
            todos: TodoRepository::load(BrowserStorage, config.storage_key.as_str()),
            theme: ThemeRepository::load(BrowserStorage, config.theme_key.as_str()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Read Helpers
// ========================

pub fn store_todos(store: &AppStore) -> Vec<TodoItem> {
    store.todos().read().items().to_vec()
}

pub fn store_is_empty(store: &AppStore) -> bool {
    store.todos().read().is_empty()
}

/// (remaining, total)
pub fn store_counts(store: &AppStore) -> (usize, usize) {
    let todos = store.todos().read();
    (todos.remaining(), todos.len())
}

pub fn store_theme(store: &AppStore) -> Theme {
    store.theme().read().theme()
}

// ========================
// Store Mutations
// ========================

/// Append a todo; blank text is refused with a warning error
pub fn store_add_todo(store: &AppStore, text: &str) -> TodoResult<TodoId> {
    store.todos().write().add(text)
}

pub fn store_delete_todo(store: &AppStore, id: &TodoId) -> TodoResult<bool> {
    store.todos().write().delete(id)
}

/// Remove the todo and return its text for the input
pub fn store_edit_todo(store: &AppStore, id: &TodoId) -> TodoResult<Option<String>> {
    store.todos().write().edit(id)
}

pub fn store_toggle_todo(store: &AppStore, id: &TodoId) -> TodoResult<Option<bool>> {
    store.todos().write().toggle_complete(id)
}

pub fn store_move_todo(store: &AppStore, id: &TodoId, direction: Direction) -> TodoResult<bool> {
    store.todos().write().move_item(id, direction)
}

pub fn store_toggle_theme(store: &AppStore) -> TodoResult<Theme> {
    store.theme().write().toggle()
}
