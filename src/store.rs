//! Application State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Views read
//! store fields; every mutation goes through one of the helpers below so
//! each user action is a single write.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::CartState;
use crate::models::{CatalogItem, Filter, TaskId};
use crate::todo::TodoState;

/// Type alias for the cart store
pub type CartStore = Store<CartState>;

/// Type alias for the todo store
pub type TodoStore = Store<TodoState>;

/// Get the cart store from context
pub fn use_cart_store() -> CartStore {
    expect_context::<CartStore>()
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Cart Helpers
// ========================

pub fn store_add_to_cart(store: &CartStore, item: &CatalogItem) {
    store.write().add_to_cart(item);
    log::info!("added {} (id {}) to cart", item.name, item.id);
}

pub fn store_increment(store: &CartStore, id: u32) {
    let changed = store.write().increment(id);
    if changed {
        log_quantity(store, id);
    } else {
        log::debug!("increment ignored for cart line {}", id);
    }
}

pub fn store_decrement(store: &CartStore, id: u32) {
    let changed = store.write().decrement(id);
    if changed {
        log_quantity(store, id);
    } else {
        log::debug!("decrement ignored for cart line {}", id);
    }
}

fn log_quantity(store: &CartStore, id: u32) {
    if let Some(line) = store.read_untracked().line(id) {
        log::debug!("{} quantity now {}", line.name, line.quantity);
    }
}

pub fn store_remove_line(store: &CartStore, id: u32) {
    let removed = store.write().remove(id);
    match removed {
        Some(line) => log::info!("removed {} x{} from cart", line.name, line.quantity),
        None => log::debug!("remove ignored, no cart line {}", id),
    }
}

// ========================
// Todo Helpers
// ========================

/// Returns true if a task was added (the caller clears its input then)
pub fn store_add_task(store: &TodoStore, raw: &str) -> bool {
    let added = store.write().add_task(raw);
    match added {
        Ok(Some(id)) => {
            log::info!("added task {}", id);
            log::debug!("tasks: {:?}", store.read_untracked().tasks);
            true
        }
        Ok(None) => {
            log::debug!("blank task text ignored");
            false
        }
        Err(e) => {
            log::warn!("add task failed: {}", e);
            false
        }
    }
}

pub fn store_toggle_task(store: &TodoStore, id: TaskId) {
    if let Err(e) = store.write().toggle(id) {
        log::warn!("toggle failed: {}", e);
    }
}

pub fn store_delete_task(store: &TodoStore, id: TaskId) {
    let deleted = store.write().delete(id);
    match deleted {
        Ok(task) => log::info!("deleted task {}", task.id),
        Err(e) => log::warn!("delete failed: {}", e),
    }
}

pub fn store_begin_edit(store: &TodoStore, id: TaskId) {
    if let Err(e) = store.write().begin_edit(id) {
        log::warn!("begin edit failed: {}", e);
    }
}

pub fn store_update_draft(store: &TodoStore, text: String) {
    if let Err(e) = store.write().update_draft(text) {
        log::warn!("draft update failed: {}", e);
    }
}

pub fn store_save_edit(store: &TodoStore) {
    let saved = store.write().save_edit();
    match saved {
        Ok(Some(id)) => log::info!("saved task {}", id),
        Ok(None) => log::debug!("save ignored, no active edit"),
        Err(e) => log::warn!("save failed: {}", e),
    }
}

pub fn store_cancel_edit(store: &TodoStore) {
    store.write().cancel_edit();
}

pub fn store_set_filter(store: &TodoStore, filter: Filter) {
    store.write().set_filter(filter);
    log::debug!("filter set to {}", filter.as_str());
}
