//! Navigation Bar Component
//!
//! App title, home link and the light/dark theme toggle.

use leptos::prelude::*;
use todo_core::Theme;

use crate::context::AppContext;
use crate::store::{store_theme, store_toggle_theme, use_app_store};

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let toggle_theme = move |_| {
        match store_toggle_theme(&store) {
            Ok(theme) => log::debug!("Theme switched to {}", theme.as_str()),
            Err(e) => ctx.report(&e),
        }
    };

    let is_dark = move || store_theme(&store) == Theme::Dark;

    view! {
        <nav class="navbar">
            <div class="navbar-logo">
                <span class="navbar-icon">"✅"</span>
                <span class="navbar-title">"Todo_app"</span>
            </div>
            <ul class="navbar-links">
                <li class="navbar-link">"Home"</li>
                <li class="navbar-link">
                    <button
                        class="theme-toggle"
                        title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                        on:click=toggle_theme
                    >
                        {move || if is_dark() { "☀" } else { "🌙" }}
                    </button>
                </li>
            </ul>
        </nav>
    }
}
