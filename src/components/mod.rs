//! UI Components
//!
//! Leptos components for the todo widget.

mod navbar;
mod new_todo_form;
mod todo_list_view;
mod todo_row;
mod warning_banner;

pub use navbar::Navbar;
pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use warning_banner::WarningBanner;
