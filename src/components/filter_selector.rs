//! Filter Selector Component
//!
//! All / Completed / Incomplete buttons for the todo list.

use leptos::prelude::*;

use crate::models::Filter;

/// Filter selector buttons
#[component]
pub fn FilterSelector(
    #[prop(into)] current: Signal<Filter>,
    on_change: impl Fn(Filter) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="filter-selector">
            {Filter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_selected = move || current.get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| on_change(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
