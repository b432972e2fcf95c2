//! Todo Row Component
//!
//! Checkbox, text and the move/edit/delete buttons for one todo.

use leptos::prelude::*;
use todo_core::{Direction, TodoItem};

use crate::context::AppContext;
use crate::store::{store_delete_todo, store_edit_todo, store_move_todo, store_toggle_todo, use_app_store};

/// A single todo row
#[component]
pub fn TodoRow(
    item: TodoItem,
    is_first: bool,
    is_last: bool,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let TodoItem { id, text, complete } = item;
    let checkbox_id = format!("todo-{}", id);

    let toggle = {
        let id = id.clone();
        move |_| {
            if let Err(e) = store_toggle_todo(&store, &id) {
                ctx.report(&e);
            }
        }
    };

    let move_up = {
        let id = id.clone();
        move |_| {
            if let Err(e) = store_move_todo(&store, &id, Direction::Up) {
                ctx.report(&e);
            }
        }
    };

    let move_down = {
        let id = id.clone();
        move |_| {
            if let Err(e) = store_move_todo(&store, &id, Direction::Down) {
                ctx.report(&e);
            }
        }
    };

    // Edit takes the todo out of the list and puts its text back in the input
    let edit = {
        let id = id.clone();
        move |_| match store_edit_todo(&store, &id) {
            Ok(Some(text)) => ctx.set_draft(text),
            Ok(None) => {}
            Err(e) => ctx.report(&e),
        }
    };

    let delete = move |_| {
        if let Err(e) = store_delete_todo(&store, &id) {
            ctx.report(&e);
        }
    };

    let row_class = if complete { "todo-row completed" } else { "todo-row" };

    view! {
        <li class=row_class>
            <input type="checkbox" id=checkbox_id checked=complete on:change=toggle />
            <span class="todo-text">{text}</span>
            <span class="todo-actions">
                <button class="move-btn" title="Move up" disabled=is_first on:click=move_up>"↑"</button>
                <button class="move-btn" title="Move down" disabled=is_last on:click=move_down>"↓"</button>
                <button class="edit-btn" title="Edit" on:click=edit>"✎"</button>
                <button class="delete-btn" title="Delete" on:click=delete>"🗑"</button>
            </span>
        </li>
    }
}
