//! Page Configuration
//!
//! Reads the optional JSON block `<script id="todo-config" type="application/json">`.

use todo_core::{TodoConfig, TodoError};

const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Config from the page, or defaults plus the reason the page config was rejected.
///
/// Runs before the logger exists, so the caller logs the error.
pub fn read_config() -> (TodoConfig, Option<TodoError>) {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw.as_deref().map(str::trim).filter(|json| !json.is_empty()) {
        None => (TodoConfig::default(), None),
        Some(json) => match TodoConfig::from_json(json) {
            Ok(config) => (config, None),
            Err(e) => (TodoConfig::default(), Some(e)),
        },
    }
}
