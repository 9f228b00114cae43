//! Cart Modal Component
//!
//! Lists cart lines with quantity controls. Opened by the controller through
//! the modal store; closed by its button or a tap on the backdrop.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::CartLineView;
use crate::store::{close_cart_modal, use_cart_modal, CartModalStoreFields};

#[component]
pub fn CartModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_cart_modal();
    let close = move || close_cart_modal(&store);

    view! {
        <Show when=move || store.open().get()>
            <div
                class="cart-modal-backdrop"
                on:click=move |ev| {
                    if ev.target() == ev.current_target() {
                        close();
                    }
                }
            >
                <div class="cart-modal">
                    <h3>"🛒 Votre Panier"</h3>
                    <Show
                        when=move || !store.cart().read().is_empty()
                        fallback=|| view! { <p class="cart-empty">"Votre panier est vide"</p> }
                    >
                        <ul class="cart-lines">
                            <For
                                each=move || store.cart().get().lines
                                key=|line| (line.name.clone(), line.quantity)
                                children=|line| view! { <CartLineRow line=line /> }
                            />
                        </ul>
                        <div class="cart-modal-total">
                            {move || format!("Total: {}", store.cart().read().total)}
                        </div>
                        <button class="cart-clear btn" on:click=move |_| { ctx.run(|c| c.clear_cart()); }>
                            "Vider le panier"
                        </button>
                    </Show>
                    <button class="cart-modal-close btn" on:click=move |_| close()>
                        "Fermer"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartLineRow(line: CartLineView) -> impl IntoView {
    let ctx = use_app_context();
    let quantity = line.quantity;
    let less = line.name.clone();
    let more = line.name.clone();
    let remove = line.name.clone();

    view! {
        <li class="cart-line">
            <div class="cart-line-info">
                <strong>{line.name}</strong>
                <small>{format!("Quantité: {}", quantity)}</small>
            </div>
            <div class="cart-line-actions">
                <button
                    class="qty-btn btn"
                    on:click=move |_| { let _ = ctx.run(|c| c.set_quantity(&less, quantity - 1)); }
                >
                    "−"
                </button>
                <button
                    class="qty-btn btn"
                    on:click=move |_| { let _ = ctx.run(|c| c.set_quantity(&more, quantity + 1)); }
                >
                    "+"
                </button>
                <span class="cart-line-total">{line.line_total}</span>
                <button
                    class="remove-btn btn"
                    title="Retirer"
                    on:click=move |_| { let _ = ctx.run(|c| c.remove_from_cart(&remove)); }
                >
                    "×"
                </button>
            </div>
        </li>
    }
}
