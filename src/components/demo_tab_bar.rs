//! Demo Tab Bar Component
//!
//! Tab bar for switching between the cart and todo demos.

use leptos::prelude::*;

use crate::context::{use_app_context, Demo};

/// Demo Tab Bar component
#[component]
pub fn DemoTabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="demo-tab-bar">
            {Demo::ALL.iter().map(|demo| {
                let demo = *demo;
                let is_active = move || ctx.active_demo.get() == demo;
                let tab_class = move || {
                    if is_active() { "demo-tab active" } else { "demo-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| ctx.show(demo)
                    >
                        {demo.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
