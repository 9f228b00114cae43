use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::nav::NavTab;

/// Bottom navigation. Each entry is tagged with its `NavTab` key in
/// `data-nav`; clicks dispatch on that attribute.
#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        let key = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-nav"));
        if let Some(key) = key {
            ctx.run(|c| c.navigate_key(&key));
        }
    };

    view! {
        <nav class="bottom-nav">
            {NavTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=if tab == NavTab::Menu { "nav-item active" } else { "nav-item" }
                            data-nav=tab.key()
                            on:click=on_click
                        >
                            <span class="nav-icon">{tab.icon()}</span>
                            <span class="nav-label">{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
