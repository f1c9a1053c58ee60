//! Todo View
//!
//! Task input, filter selector and the filtered task list.

use leptos::prelude::*;

use crate::components::{FilterSelector, NewTaskForm, TaskRow};
use crate::store::{store_set_filter, use_todo_store};
use crate::todo::TodoStateStoreFields;

#[component]
pub fn TodoView() -> impl IntoView {
    let store = use_todo_store();

    let has_tasks = move || store.with(|todo| !todo.is_empty());
    let visible_tasks = move || store.with(|todo| todo.visible_tasks());
    let current_filter = Signal::derive(move || store.filter().get());

    view! {
        <div class="todo-app">
            <h2>"Todo List"</h2>

            <NewTaskForm />

            // Filters only make sense once there is something to filter
            <Show when=has_tasks>
                <FilterSelector
                    current=current_filter
                    on_change=move |filter| store_set_filter(&store, filter)
                />
            </Show>

            <div class="task-list">
                <For
                    each=visible_tasks
                    key=|task| (task.id, task.text.clone(), task.completed)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </div>

            <Show when=has_tasks>
                <p class="task-count">
                    {move || store.with(|todo| {
                        format!("{} remaining, {} completed", todo.remaining_count(), todo.completed_count())
                    })}
                </p>
            </Show>
        </div>
    }
}
