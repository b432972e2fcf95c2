//! Todo Repository
//!
//! The todo list bound to its storage slot. Every mutating operation
//! re-serializes the whole list and overwrites the slot.

use crate::domain::{TodoError, TodoId, TodoItem, TodoResult};
use crate::list::{Direction, TodoList};
use super::traits::KeyValueStore;

/// Persisted, ordered todo list
#[derive(Debug, Clone)]
pub struct TodoRepository<S> {
    store: S,
    key: String,
    list: TodoList,
}

impl<S: KeyValueStore> TodoRepository<S> {
    /// Load the list stored under `key`.
    ///
    /// A missing slot, an unreadable store or a corrupt value all yield an
    /// empty list. Nothing is written until the first mutation.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let list = match store.get(&key) {
            Ok(Some(raw)) => decode(&key, &raw),
            Ok(None) => TodoList::new(),
            Err(e) => {
                log::warn!("Could not read '{}', starting empty: {}", key, e);
                TodoList::new()
            }
        };
        log::info!("Loaded {} todos from '{}'", list.len(), key);
        Self { store, key, list }
    }

    pub fn items(&self) -> &[TodoItem] {
        self.list.as_slice()
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.list.get(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.list.remaining()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a new incomplete item, keeping the text as typed.
    ///
    /// Blank text is refused with [`TodoError::EmptyText`] and leaves both the
    /// list and the slot untouched.
    pub fn add(&mut self, text: &str) -> TodoResult<TodoId> {
        if text.trim().is_empty() {
            log::debug!("Refusing to add blank todo");
            return Err(TodoError::EmptyText);
        }
        let item = TodoItem::new(text);
        let id = item.id.clone();
        self.list.push(item);
        log::debug!("Added todo {}", id);
        self.persist()?;
        Ok(id)
    }

    /// Remove the item; returns whether anything was removed
    pub fn delete(&mut self, id: &TodoId) -> TodoResult<bool> {
        let removed = self.list.remove(id).is_some();
        log::debug!("Delete {} (removed: {})", id, removed);
        self.persist()?;
        Ok(removed)
    }

    /// Take the item out of the list and hand back its text for re-entry.
    ///
    /// The item is gone once this returns; re-adding the text creates a new
    /// item with a new ID at the end of the list.
    pub fn edit(&mut self, id: &TodoId) -> TodoResult<Option<String>> {
        let text = self.list.remove(id).map(|item| item.text);
        log::debug!("Edit {} (found: {})", id, text.is_some());
        self.persist()?;
        Ok(text)
    }

    /// Flip the completion flag; returns the new value if the item exists
    pub fn toggle_complete(&mut self, id: &TodoId) -> TodoResult<Option<bool>> {
        let complete = self.list.toggle(id);
        log::debug!("Toggle {} -> {:?}", id, complete);
        self.persist()?;
        Ok(complete)
    }

    /// Swap with the neighbour; returns whether the order changed
    pub fn move_item(&mut self, id: &TodoId, direction: Direction) -> TodoResult<bool> {
        let moved = self.list.move_item(id, direction);
        log::debug!("Move {} {:?} (moved: {})", id, direction, moved);
        self.persist()?;
        Ok(moved)
    }

    /// Write the whole list to the slot
    pub fn persist(&mut self) -> TodoResult<()> {
        let json = serde_json::to_string(&self.list)?;
        self.store.set(&self.key, &json).map_err(|e| {
            log::error!("Failed to save todos to '{}': {}", self.key, e);
            e
        })
    }
}

fn decode(key: &str, raw: &str) -> TodoList {
    let entries: Vec<TodoItem> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Stored value under '{}' is not a todo list, starting empty: {}", key, e);
            return TodoList::new();
        }
    };
    let (list, dropped) = TodoList::from_entries(entries);
    if dropped > 0 {
        log::warn!("Dropped {} todos with duplicate ids from '{}'", dropped, key);
    }
    list
}
