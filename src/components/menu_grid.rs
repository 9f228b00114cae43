use leptos::prelude::*;

use crate::adapters::ids;
use crate::catalog::DISHES;
use crate::context::use_app_context;

/// Dish cards. `data-*` attributes are what search, category filtering and
/// add-to-cart read back.
#[component]
pub fn MenuGrid() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <main id=ids::MENU_GRID class="menu-grid">
            {DISHES
                .iter()
                .map(|dish| {
                    let name = dish.name;
                    view! {
                        <article
                            class="menu-item"
                            data-name=name
                            data-price=dish.price
                            data-category=dish.category
                        >
                            <div class="menu-item-icon">{dish.icon}</div>
                            <div class="menu-item-body">
                                <h3 class="menu-item-name">{name}</h3>
                                <p class="menu-item-description">{dish.description}</p>
                                <div class="menu-item-footer">
                                    <span class="menu-item-price">{format!("{} €", dish.price)}</span>
                                    <button
                                        class="add-to-cart btn"
                                        aria-label="Ajouter au panier"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            let _ = ctx.run(|c| c.add_to_cart(name));
                                        }
                                    >
                                        "+"
                                    </button>
                                </div>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </main>
    }
}
