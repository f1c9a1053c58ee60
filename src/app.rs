//! Cart & Todo Frontend App
//!
//! Application shell: provides context and stores, switches between demos.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::CartState;
use crate::components::{CartView, DemoTabBar, TodoView};
use crate::config::AppConfig;
use crate::context::{AppContext, Demo};
use crate::todo::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (active_demo, set_active_demo) = signal(Demo::Cart);
    let default_filter = config.default_filter;

    // Stores live at the shell so switching tabs keeps each demo's state
    provide_context(AppContext::new(config, (active_demo, set_active_demo)));
    provide_context(Store::new(CartState::new()));
    provide_context(Store::new(TodoState::with_filter(default_filter)));

    view! {
        <div class="app-layout">
            <DemoTabBar />

            <main class="main-content">
                {move || match active_demo.get() {
                    Demo::Cart => view! { <CartView /> }.into_any(),
                    Demo::Todo => view! { <TodoView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
