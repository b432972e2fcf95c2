//! Repository Layer - Core Traits
//!
//! Abstract key-value slot storage.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::TodoResult;

/// String key-value store with whole-value reads and writes
pub trait KeyValueStore {
    /// Read the value under `key` (`None` when absent)
    fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> TodoResult<()>;
}
