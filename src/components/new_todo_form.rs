//! New Todo Form Component
//!
//! Text input plus add button. Enter submits.

use leptos::prelude::*;
use todo_core::TodoError;

use crate::context::AppContext;
use crate::store::{store_add_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = ctx.draft.get_untracked();
        let result = store_add_todo(&store, &text);

        // A failed save still added the item in memory, so the draft goes either way
        if !matches!(result, Err(TodoError::EmptyText)) {
            ctx.set_draft(String::new());
        }
        match result {
            Ok(_) => ctx.dismiss_warning(),
            Err(e) => ctx.report(&e),
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <h1 class="new-todo-heading">"Enter your Todo"</h1>
            <div class="new-todo-row">
                <input
                    type="text"
                    class="new-todo-input"
                    placeholder="What needs to be done?"
                    prop:value=move || ctx.draft.get()
                    on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                />
                <button type="submit" class="add-btn" title="Add todo">"+"</button>
            </div>
        </form>
    }
}
