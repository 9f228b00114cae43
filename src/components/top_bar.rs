//! Header with the sidebar toggle and the search panel

use leptos::prelude::*;

use crate::adapters::ids;
use crate::context::use_app_context;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <button
                id=ids::MENU_TOGGLE
                class="icon-btn btn"
                aria-label="Catégories"
                on:click=move |_| { ctx.run(|c| c.toggle_sidebar()); }
            >
                "☰"
            </button>
            <h1 class="app-title">"Le Petit Bistro"</h1>
            <button
                id=ids::SEARCH_BUTTON
                class="icon-btn btn"
                aria-label="Rechercher"
                on:click=move |_| { ctx.run(|c| c.toggle_search()); }
            >
                "🔍"
            </button>
        </header>

        <div id=ids::SEARCH_CONTAINER class="search-container">
            <input
                id=ids::SEARCH_INPUT
                type="search"
                placeholder="Rechercher un plat..."
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    ctx.run(|c| c.search(&query));
                }
            />
            <button
                id=ids::SEARCH_CLOSE
                class="icon-btn btn"
                on:click=move |_| { ctx.run(|c| c.close_search()); }
            >
                "✕"
            </button>
        </div>
    }
}
