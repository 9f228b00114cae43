use leptos::prelude::*;

use crate::adapters::ids;
use crate::context::use_app_context;

/// Floating cart button; shown by the controller once the cart has items
#[component]
pub fn CartFloating() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            id=ids::CART_FLOATING
            class="cart-floating btn"
            on:click=move |_| { ctx.run(|c| c.show_cart()); }
        >
            <span class="cart-floating-icon">"🛒"</span>
            <span id=ids::CART_COUNT class="cart-count">"0"</span>
            <span id=ids::CART_TOTAL class="cart-total">"0.00 €"</span>
        </button>
    }
}
