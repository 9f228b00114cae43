//! Menu Frontend App
//!
//! Single-screen layout: header, category sidebar, menu grid, floating cart
//! and bottom navigation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::adapters::{DomPresentation, HostDialogs, NavigatorHaptics, TimeoutScheduler};
use crate::components::{BottomNav, CartFloating, CartModal, CategorySidebar, MenuGrid, SubcategoryBar, TopBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::ViewController;
use crate::host::{self, HostKind};
use crate::store::{CartModal as CartModalState, CartModalStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let modal: CartModalStore = Store::new(CartModalState::default());
    provide_context(modal);

    let host_kind = HostKind::detect();
    let controller = ViewController::new(
        DomPresentation::new(modal),
        Box::new(NavigatorHaptics),
        Box::new(HostDialogs::new(host_kind.is_native())),
        Box::new(TimeoutScheduler),
        config.clone(),
    );
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Runs after mount so the controller finds the rendered regions
    Effect::new(move |_| {
        ctx.run(|c| c.initialize());
        host::install(ctx, host_kind, &config);
    });

    view! {
        <div class="app-layout">
            <TopBar />
            <CategorySidebar />
            <SubcategoryBar />
            <MenuGrid />
            <CartFloating />
            <BottomNav />
            <CartModal />
        </div>
    }
}
