//! Todo List Component
//!
//! Renders the todo collection; each row deletes by its current position.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::todos::indexed_entries;

/// Stateless list of todos
///
/// # Arguments
/// * `todos` - Collection owned by the parent
/// * `on_delete` - Called with the row's position when its delete button is clicked
#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<String>>,
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || todos.with(|todos| indexed_entries(todos))
                // Position and text together, so a shifted row re-binds its index
                key=|entry| entry.clone()
                children=move |entry| {
                    view! {
                        <TodoItem
                            text=entry.text.clone()
                            on_delete=move || entry.delete(|index| on_delete.run(index))
                        />
                    }
                }
            />
        </ul>
    }
}
