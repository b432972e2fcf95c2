//! Widget Configuration
//!
//! Every key is optional; missing keys take the defaults below.

use serde::Deserialize;

use crate::domain::{TodoError, TodoResult};

pub const DEFAULT_STORAGE_KEY: &str = "todos";
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Storage slot holding the serialized list
    pub storage_key: String,
    /// Storage slot holding the theme name
    pub theme_key: String,
    /// How long a warning stays visible
    pub warning_timeout_ms: u32,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            warning_timeout_ms: 3000,
            log_capacity: 200,
            log_level: "info".to_string(),
        }
    }
}

impl TodoConfig {
    /// Parse a JSON config document
    pub fn from_json(json: &str) -> TodoResult<Self> {
        let config: TodoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> TodoResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(TodoError::Config("storage_key must not be empty".to_string()));
        }
        if self.theme_key.trim().is_empty() {
            return Err(TodoError::Config("theme_key must not be empty".to_string()));
        }
        if self.storage_key == self.theme_key {
            return Err(TodoError::Config("storage_key and theme_key must differ".to_string()));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(TodoError::Config(format!("unknown log_level '{}'", self.log_level)));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = TodoConfig::from_json(r#"{ "warning_timeout_ms": 500 }"#).unwrap();
        assert_eq!(config.warning_timeout_ms, 500);
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            TodoConfig::from_json(r#"{ "storage_key": " " }"#),
            Err(TodoError::Config(_))
        ));
        assert!(matches!(
            TodoConfig::from_json(r#"{ "log_level": "loud" }"#),
            Err(TodoError::Config(_))
        ));
        assert!(matches!(
            TodoConfig::from_json("{ not json"),
            Err(TodoError::Serialization(_))
        ));
    }

    #[test]
    fn test_level_filter() {
        let config = TodoConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }
}
