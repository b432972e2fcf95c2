//! Ordered List
//!
//! Insertion-ordered sequence of entities with ID lookup, removal and
//! adjacent-swap reordering. Order only changes through these operations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Entity, TodoId, TodoItem};

/// Direction for an adjacent swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Swap with the predecessor
    Up,
    /// Swap with the successor
    Down,
}

/// Ordered sequence keyed by entity ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedList<T> {
    entries: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: Entity> OrderedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded entries, keeping the first occurrence of each ID.
    ///
    /// Returns the list and the number of dropped duplicates.
    pub fn from_entries(entries: Vec<T>) -> (Self, usize) {
        let mut seen = HashSet::new();
        let total = entries.len();
        let entries: Vec<T> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id().clone()))
            .collect();
        let dropped = total - entries.len();
        (Self { entries }, dropped)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Append at the end. Caller guarantees the ID is fresh.
    pub fn push(&mut self, entry: T) {
        debug_assert!(self.position(entry.id()).is_none());
        self.entries.push(entry);
    }

    /// Remove by ID, returning the removed entry
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Swap with the neighbour in `direction`.
    ///
    /// Returns false when the ID is absent or already at the boundary.
    pub fn move_item(&mut self, id: &T::Id, direction: Direction) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.entries.len() => index + 1,
            _ => return false,
        };
        self.entries.swap(index, target);
        true
    }
}

/// The todo list: an ordered list of todo items
pub type TodoList = OrderedList<TodoItem>;

impl OrderedList<TodoItem> {
    /// Flip the completion flag, returning the new value
    pub fn toggle(&mut self, id: &TodoId) -> Option<bool> {
        let item = self.get_mut(id)?;
        item.toggle();
        Some(item.complete)
    }

    /// Number of items not yet complete
    pub fn remaining(&self) -> usize {
        self.entries.iter().filter(|item| !item.complete).count()
    }
}
