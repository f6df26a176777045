//! Todo Form Component
//!
//! Text input whose draft survives page reloads via the context store.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::draft::{persist_draft, restore_draft, take_submission};
use crate::storage::KeyValueStore;

/// Save the current draft. Tracks `draft` when run inside an effect.
fn persist_current(store: &dyn KeyValueStore, key: &str, draft: ReadSignal<String>) {
    let text = draft.get();
    if let Err(e) = persist_draft(store, key, &text) {
        log::error!("[DRAFT] failed to save draft: {}", e);
    }
}

/// Submit the draft: `on_add` gets the text, then `set_draft` gets the emptied draft.
///
/// Blank drafts call neither. Returns whether a todo was added.
fn submit_draft(
    draft: ReadSignal<String>,
    set_draft: impl FnOnce(String),
    on_add: impl FnOnce(String),
) -> bool {
    let mut current = draft.get_untracked();
    let Some(text) = take_submission(&mut current) else {
        return false;
    };
    on_add(text);
    set_draft(current);
    true
}

/// Form for entering a new todo
///
/// # Arguments
/// * `on_add` - Called with the draft (untrimmed) when a non-blank draft is submitted
#[component]
pub fn TodoForm(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let ctx = use_app_context();
    let key = ctx.config.storage_key.clone();

    let (draft, set_draft) = signal(restore_draft(ctx.store.as_ref(), &key));

    // Persist after every change (and once after mount)
    let store = ctx.store.clone();
    Effect::new(move |_| persist_current(store.as_ref(), &key, draft));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_draft(draft, |rest| set_draft.set(rest), |text| on_add.run(text));
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                placeholder=ctx.config.placeholder.clone()
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">{ctx.config.submit_label.clone()}</button>
        </form>
    }
}
