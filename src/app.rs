//! Todo App
//!
//! Shell component: owns the todo collection and wires the form and list.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStore};
use crate::store::{store_add_todo, store_remove_todo, store_todos, TodoState};

/// Local storage when reachable, otherwise an in-memory map for this session
fn draft_backend() -> Arc<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Arc::new(BrowserStorage)
    } else {
        log::warn!("[APP] local storage unavailable, draft will not survive a reload");
        Arc::new(MemoryStore::new())
    }
}

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let title = config.title.clone();
    let count_config = config.clone();

    let store = Store::new(TodoState::default());
    provide_context(AppContext::new(draft_backend(), config));

    let todos = store_todos(store);

    view! {
        <main class="todo-app">
            <h1>{title}</h1>

            <TodoForm on_add=move |text: String| store_add_todo(&store, text) />

            <TodoList
                todos=todos
                on_delete=move |index: usize| store_remove_todo(&store, index)
            />

            <p class="item-count">{move || count_config.count_label(todos.with(Vec::len))}</p>
        </main>
    }
}
