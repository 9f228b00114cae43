use leptos::prelude::*;

use crate::adapters::ids;
use crate::catalog::CATEGORIES;
use crate::context::use_app_context;
use crate::search::ALL_CATEGORIES;

/// Slide-in category list and the overlay behind it
#[component]
pub fn CategorySidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div
            id=ids::OVERLAY
            class="sidebar-overlay"
            on:click=move |_| { ctx.run(|c| c.tap_overlay()); }
        ></div>

        <aside id=ids::SIDEBAR class="categories-sidebar">
            <div class="sidebar-header">
                <h2>"Catégories"</h2>
                <button
                    id=ids::CLOSE_SIDEBAR
                    class="icon-btn btn"
                    on:click=move |_| { ctx.run(|c| c.close_sidebar()); }
                >
                    "✕"
                </button>
            </div>

            <ul class="category-list">
                {CATEGORIES
                    .iter()
                    .map(|category| {
                        let key = category.key;
                        view! {
                            <li
                                class=if key == ALL_CATEGORIES { "category-item active" } else { "category-item" }
                                data-category=key
                                on:click=move |_| { ctx.run(|c| c.select_category(key)); }
                            >
                                <span class="category-icon">{category.icon}</span>
                                <span class="category-name">{category.label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
