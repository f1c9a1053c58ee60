//! Product Card Component
//!
//! One catalog entry with an "Add to Cart" button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::CatalogItem;
use crate::store::{store_add_to_cart, use_cart_store};

#[component]
pub fn ProductCard(item: CatalogItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_cart_store();
    let price = ctx.price(u64::from(item.price));
    let name = item.name.clone();

    view! {
        <div class="product-card">
            <h3>{name}</h3>
            <p>{price}</p>
            <button class="add-btn" on:click=move |_| store_add_to_cart(&store, &item)>
                "Add to Cart"
            </button>
        </div>
    }
}
