use leptos::prelude::*;

use crate::catalog::SUBCATEGORIES;
use crate::context::use_app_context;

/// Horizontal chip strip under the header
#[component]
pub fn SubcategoryBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="subcategory-bar">
            {SUBCATEGORIES
                .iter()
                .enumerate()
                .map(|(i, sub)| {
                    let key = sub.key;
                    view! {
                        <button
                            class=if i == 0 { "subcategory-item active" } else { "subcategory-item" }
                            data-subcategory=key
                            on:click=move |_| { ctx.run(|c| c.select_subcategory(key)); }
                        >
                            {sub.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
