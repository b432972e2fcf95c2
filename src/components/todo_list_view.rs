//! Todo List View Component
//!
//! Renders the rows in list order, or an empty-state message.

use leptos::prelude::*;
use todo_core::TodoItem;

use crate::components::TodoRow;
use crate::store::{store_counts, store_is_empty, store_todos, use_app_store};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let rows = move || with_boundaries(store_todos(&store));

    view! {
        <div class="todo-list-container">
            <Show
                when=move || !store_is_empty(&store)
                fallback=|| view! { <p class="empty-state">"No todos yet."</p> }
            >
                <ul class="todo-list">
                    <For
                        each=rows
                        key=|(item, is_first, is_last)| {
                            // Boundary flags are part of the key so rows refresh their buttons after a move
                            (item.id.clone(), item.complete, *is_first, *is_last)
                        }
                        children=move |(item, is_first, is_last)| {
                            view! { <TodoRow item=item is_first=is_first is_last=is_last /> }
                        }
                    />
                </ul>
            </Show>
            <p class="item-count">
                {move || {
                    let (remaining, total) = store_counts(&store);
                    format!("{} of {} remaining", remaining, total)
                }}
            </p>
        </div>
    }
}

/// Pair each item with (is_first, is_last) in display order
fn with_boundaries(items: Vec<TodoItem>) -> Vec<(TodoItem, bool, bool)> {
    let last = items.len().saturating_sub(1);
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (item, index == 0, index == last))
        .collect()
}
