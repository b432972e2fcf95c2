//! Theme Repository
//!
//! Persists the selected theme name in its own slot.

use crate::domain::{Theme, TodoResult};
use super::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct ThemeRepository<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeRepository<S> {
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = match store.get(&key) {
            Ok(Some(raw)) => Theme::from_str(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Could not read theme from '{}': {}", key, e);
                Theme::default()
            }
        };
        Self { store, key, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch light/dark and persist; the in-memory theme changes even if
    /// the write fails
    pub fn toggle(&mut self) -> TodoResult<Theme> {
        self.theme = self.theme.toggled();
        self.store.set(&self.key, self.theme.as_str())?;
        Ok(self.theme)
    }
}
