//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use todo_core::{KeyValueStore, TodoError, TodoResult};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to the page's localStorage, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> TodoResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| TodoError::Storage("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| TodoError::Storage("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

/// Convert a thrown JS value (e.g. QuotaExceededError) into a storage error
fn js_error(value: JsValue) -> TodoError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    TodoError::Storage(message)
}
