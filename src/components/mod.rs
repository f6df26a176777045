//! UI Components
//!
//! Leptos components for the todo page.

mod todo_form;
mod todo_item;
mod todo_list;

pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
