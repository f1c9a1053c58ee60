//! New Task Form Component
//!
//! Text input and Add button for creating tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_task, use_todo_store};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_todo_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is ignored and left in place
        if store_add_task(&store, &new_text.get()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
