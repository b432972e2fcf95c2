//! Todo App
//!
//! Root component: navbar, input form, warning banner and the list.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoConfig;

use crate::components::{Navbar, NewTodoForm, TodoListView, WarningBanner};
use crate::context::AppContext;
use crate::store::{store_theme, AppState};

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    // Load once; every mutation afterwards rewrites the slot
    let store = Store::new(AppState::load(&config));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config.warning_timeout_ms));

    let layout_class = move || format!("app-layout theme-{}", store_theme(&store).as_str());

    view! {
        <div class=layout_class>
            <Navbar />

            <main class="main-content">
                <NewTodoForm />
                <WarningBanner />
                <hr class="divider" />
                <TodoListView />
            </main>
        </div>
    }
}
