//! Todo Item Component
//!
//! A single row in the todo list.

use leptos::prelude::*;

#[component]
pub fn TodoItem(
    #[prop(into)] text: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <li class="todo-item">
            <span class="todo-text">{text}</span>
            <button class="delete-btn" on:click=move |_| on_delete.run(())>"×"</button>
        </li>
    }
}
