//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::config::AppConfig;

/// The two demos the shell can show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    Cart,
    Todo,
}

impl Demo {
    pub const ALL: [Demo; 2] = [Demo::Cart, Demo::Todo];

    pub fn label(&self) -> &'static str {
        match self {
            Demo::Cart => "Shop",
            Demo::Todo => "Todo List",
        }
    }
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Startup configuration
    pub config: StoredValue<AppConfig>,
    /// Products offered by the cart demo
    pub catalog: StoredValue<Catalog>,
    /// Visible demo - read
    pub active_demo: ReadSignal<Demo>,
    /// Visible demo - write
    set_active_demo: WriteSignal<Demo>,
}

impl AppContext {
    pub fn new(config: AppConfig, active_demo: (ReadSignal<Demo>, WriteSignal<Demo>)) -> Self {
        let catalog = config.catalog();
        Self {
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
            active_demo: active_demo.0,
            set_active_demo: active_demo.1,
        }
    }

    /// Switch the visible demo
    pub fn show(&self, demo: Demo) {
        self.set_active_demo.set(demo);
    }

    /// Format a price with the configured currency symbol
    pub fn price(&self, amount: u64) -> String {
        self.config.with_value(|c| c.format_price(amount))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
