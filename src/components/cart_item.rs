//! Cart Item Component
//!
//! A cart line with quantity controls.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::CartLine;
use crate::store::{store_decrement, store_increment, store_remove_line, use_cart_store};

/// A single cart line row
#[component]
pub fn CartItem(line: CartLine) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_cart_store();

    let id = line.id;
    let summary = format!(
        "{} × {} = {}",
        ctx.price(u64::from(line.price)),
        line.quantity,
        ctx.price(line.line_total()),
    );
    // "-" stays disabled at the quantity floor
    let at_floor = !line.can_decrement();

    view! {
        <div class="cart-item">
            <h4>{line.name}</h4>
            <p>{summary}</p>
            <div class="cart-controls">
                <button disabled=at_floor on:click=move |_| store_decrement(&store, id)>"-"</button>
                <span class="quantity">{line.quantity}</span>
                <button on:click=move |_| store_increment(&store, id)>"+"</button>
                <button class="remove-btn" on:click=move |_| store_remove_line(&store, id)>
                    "Remove"
                </button>
            </div>
        </div>
    }
}
