//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::todos;

/// State owned by the app shell
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// The todo collection, in insertion order
    pub todos: Vec<String>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Reactive view of the todo collection
pub fn store_todos(store: TodoStore) -> Signal<Vec<String>> {
    Signal::derive(move || store.todos().get())
}

/// Append a todo to the store
pub fn store_add_todo(store: &TodoStore, text: String) {
    log::debug!("[TODOS] add {:?}", text);
    todos::add_todo(&mut store.todos().write(), text);
}

/// Remove the todo at `index` from the store
pub fn store_remove_todo(store: &TodoStore, index: usize) {
    if let Some(removed) = todos::remove_todo(&mut store.todos().write(), index) {
        log::debug!("[TODOS] removed #{} {:?}", index, removed);
    }
}
