//! Application Context
//!
//! Transient UI state shared via Leptos Context API: the input draft and
//! the warning banner.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use todo_core::TodoError;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Text in the new-todo input - read
    pub draft: ReadSignal<String>,
    /// Text in the new-todo input - write
    set_draft: WriteSignal<String>,
    /// Currently shown warning - read
    pub warning: ReadSignal<Option<String>>,
    /// Currently shown warning - write
    set_warning: WriteSignal<Option<String>>,
    /// Bumped per warning so a stale timer does not clear a newer one
    warning_seq: StoredValue<u32>,
    warning_timeout_ms: u32,
}

impl AppContext {
    pub fn new(warning_timeout_ms: u32) -> Self {
        let (draft, set_draft) = signal(String::new());
        let (warning, set_warning) = signal(None::<String>);
        Self {
            draft,
            set_draft,
            warning,
            set_warning,
            warning_seq: StoredValue::new(0),
            warning_timeout_ms,
        }
    }

    pub fn set_draft(&self, text: String) {
        self.set_draft.set(text);
    }

    /// Show a warning that clears itself after the configured timeout
    pub fn show_warning(&self, message: String) {
        let seq = self.warning_seq.get_value().wrapping_add(1);
        self.warning_seq.set_value(seq);
        self.set_warning.set(Some(message));

        let ctx = *self;
        Timeout::new(self.warning_timeout_ms, move || {
            if ctx.warning_seq.get_value() == seq {
                ctx.set_warning.set(None);
            }
        })
        .forget();
    }

    pub fn dismiss_warning(&self) {
        self.warning_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        self.set_warning.set(None);
    }

    /// Surface an operation error in the banner
    pub fn report(&self, error: &TodoError) {
        if !error.is_warning() {
            log::error!("{}", error);
        }
        self.show_warning(error.to_string());
    }
}
