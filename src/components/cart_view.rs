//! Cart View
//!
//! Product grid on the left, cart panel with running total on the right.

use leptos::prelude::*;

use crate::cart::CartStateStoreFields;
use crate::components::{CartItem, ProductCard};
use crate::context::use_app_context;
use crate::store::use_cart_store;

#[component]
pub fn CartView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_cart_store();

    let total = Memo::new(move |_| store.with(|cart| cart.total()));
    let item_count = Memo::new(move |_| store.with(|cart| cart.item_count()));
    let is_empty = move || store.with(|cart| cart.is_empty());
    let products = ctx.catalog.with_value(|catalog| catalog.items().to_vec());

    view! {
        <div class="cart-app">
            <section class="product-list">
                <h2 class="section-title">"Products"</h2>
                <div class="product-grid">
                    {products.into_iter().map(|item| view! { <ProductCard item=item /> }).collect_view()}
                </div>
            </section>

            <section class="cart-section">
                <h2 class="section-title">"Your Cart"</h2>
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="cart-empty">"Cart is empty"</p> }
                >
                    <For
                        each=move || store.lines().get()
                        // quantity is the only field that changes in place
                        key=|line| (line.id, line.quantity)
                        children=move |line| view! { <CartItem line=line /> }
                    />
                    <p class="cart-count">{move || format!("{} items", item_count.get())}</p>
                    <h3 class="cart-total">"Total: " {move || ctx.price(total.get())}</h3>
                </Show>
            </section>
        </div>
    }
}
