//! Console Logging
//!
//! Installs the rolling logger with a browser-console sink.

use log::Level;
use rolling_logger::{LogLine, RollingLogger};
use todo_core::TodoConfig;
use wasm_bindgen::prelude::*;
use web_sys::console;

pub fn init(config: &TodoConfig) {
    let logger = RollingLogger::new(config.level_filter(), config.log_capacity)
        .with_sink(console_sink);
    if rolling_logger::init(logger).is_err() {
        console::warn_1(&"[LOG] logger already installed".into());
    }
}

fn console_sink(line: &LogLine) {
    let text = JsValue::from_str(&line.to_string());
    match line.level {
        Level::Error => console::error_1(&text),
        Level::Warn => console::warn_1(&text),
        Level::Info => console::info_1(&text),
        Level::Debug | Level::Trace => console::log_1(&text),
    }
}

/// Recent log lines, callable from the devtools console as `todoLogs()`
#[wasm_bindgen(js_name = todoLogs)]
pub fn todo_logs() -> String {
    rolling_logger::global()
        .map(RollingLogger::dump)
        .unwrap_or_default()
}
