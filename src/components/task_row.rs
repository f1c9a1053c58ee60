//! Task Row Component
//!
//! A task in either display or edit mode.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{
    store_begin_edit, store_cancel_edit, store_delete_task, store_save_edit,
    store_toggle_task, store_update_draft, use_todo_store,
};
use crate::todo::TodoStateStoreFields;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_todo_store();

    let id = task.id;
    let completed = task.completed;
    let text = task.text;

    // Memo so typing in the draft does not rebuild the row
    let is_editing = Memo::new(move |_| {
        store.edit().with(|edit| edit.as_ref().is_some_and(|s| s.target == id))
    });
    let draft = move || {
        store.edit().with(|edit| edit.as_ref().map(|s| s.draft.clone()).unwrap_or_default())
    };

    view! {
        <div class=move || if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| store_toggle_task(&store, id)
            />

            {move || if is_editing.get() {
                view! {
                    <input
                        class="edit-input"
                        prop:value=draft
                        on:input=move |ev| store_update_draft(&store, event_target_value(&ev))
                        on:keydown=move |ev| match ev.key().as_str() {
                            "Enter" => store_save_edit(&store),
                            "Escape" => store_cancel_edit(&store),
                            _ => {}
                        }
                    />
                    <button class="save-btn" on:click=move |_| store_save_edit(&store)>"Save"</button>
                    <button class="cancel-btn" on:click=move |_| store_cancel_edit(&store)>"Cancel"</button>
                }.into_any()
            } else {
                view! {
                    <span class="task-text">{text.clone()}</span>
                    <button class="edit-btn" on:click=move |_| store_begin_edit(&store, id)>"Edit"</button>
                    <button class="delete-btn" on:click=move |_| store_delete_task(&store, id)>"Delete"</button>
                }.into_any()
            }}
        </div>
    }
}
