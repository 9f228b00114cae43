//! DOM Presentation
//!
//! Looks regions up by element id and entry groups by class selector on
//! every call, so it never holds stale nodes. The cart modal is the one
//! Leptos-rendered piece; it is driven through the UI store.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::models::CartView;
use crate::presentation::{EntryGroup, Presentation, Region, RegionHandle};
use crate::store::{CartModalStore, CartModalStoreFields};

/// Element ids shared with the components that render them
pub mod ids {
    pub const MENU_TOGGLE: &str = "menuToggle";
    pub const SIDEBAR: &str = "categoriesSidebar";
    pub const CLOSE_SIDEBAR: &str = "closeSidebar";
    pub const OVERLAY: &str = "sidebarOverlay";
    pub const SEARCH_BUTTON: &str = "searchBtn";
    pub const SEARCH_CONTAINER: &str = "searchContainer";
    pub const SEARCH_INPUT: &str = "searchInput";
    pub const SEARCH_CLOSE: &str = "searchClose";
    pub const MENU_GRID: &str = "menuGrid";
    pub const CART_COUNT: &str = "cartCount";
    pub const CART_TOTAL: &str = "cartTotal";
    pub const CART_FLOATING: &str = "cartFloating";
}

/// Selector of the navigation entry badges fly to
const CART_NAV_SELECTOR: &str = ".nav-item[data-nav=\"cart\"]";

fn group_selector(group: EntryGroup) -> (&'static str, &'static str) {
    match group {
        EntryGroup::Categories => (".category-item", "data-category"),
        EntryGroup::Subcategories => (".subcategory-item", "data-subcategory"),
        EntryGroup::NavEntries => (".nav-item", "data-nav"),
        EntryGroup::MenuItems => (".menu-item", "data-name"),
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[derive(Clone)]
pub struct DomHandle {
    el: HtmlElement,
    key_attr: Option<&'static str>,
}

impl DomHandle {
    fn new(el: HtmlElement) -> Self {
        Self { el, key_attr: None }
    }

    fn center(&self) -> (f64, f64) {
        let rect = self.el.get_bounding_client_rect();
        (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0)
    }
}

impl RegionHandle for DomHandle {
    fn key(&self) -> Option<String> {
        self.attribute(self.key_attr?)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    fn text(&self) -> String {
        self.el.text_content().unwrap_or_default()
    }

    fn add_class(&self, class: &str) {
        let _ = self.el.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.el.class_list().remove_1(class);
    }

    fn set_text(&self, text: &str) {
        self.el.set_text_content(Some(text));
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn focus(&self) {
        let _ = self.el.focus();
    }

    fn set_displayed(&self, displayed: bool) {
        let style = self.el.style();
        if displayed {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_inline(ScrollLogicalPosition::Center);
        options.set_block(ScrollLogicalPosition::Nearest);
        self.el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn remove(&self) {
        self.el.remove();
    }
}

pub struct DomPresentation {
    modal: CartModalStore,
}

impl DomPresentation {
    pub fn new(modal: CartModalStore) -> Self {
        Self { modal }
    }
}

impl Presentation for DomPresentation {
    type Handle = DomHandle;

    fn region(&self, region: Region) -> Option<DomHandle> {
        let doc = document()?;
        let el = match region {
            Region::Sidebar => doc.get_element_by_id(ids::SIDEBAR),
            Region::Overlay => doc.get_element_by_id(ids::OVERLAY),
            Region::SearchContainer => doc.get_element_by_id(ids::SEARCH_CONTAINER),
            Region::SearchInput => doc.get_element_by_id(ids::SEARCH_INPUT),
            Region::MenuGrid => doc.get_element_by_id(ids::MENU_GRID),
            Region::CartCount => doc.get_element_by_id(ids::CART_COUNT),
            Region::CartTotal => doc.get_element_by_id(ids::CART_TOTAL),
            Region::CartFloating => doc.get_element_by_id(ids::CART_FLOATING),
            Region::CartNavEntry => doc.query_selector(CART_NAV_SELECTOR).ok().flatten(),
        }?;
        el.dyn_into::<HtmlElement>().ok().map(DomHandle::new)
    }

    fn entries(&self, group: EntryGroup) -> Vec<DomHandle> {
        let (selector, key_attr) = group_selector(group);
        let Some(nodes) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|el| DomHandle { el, key_attr: Some(key_attr) })
            .collect()
    }

    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = document().and_then(|doc| doc.body()) else { return };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }

    fn open_cart_modal(&self, cart: &CartView) {
        *self.modal.cart().write() = cart.clone();
        *self.modal.open().write() = true;
    }

    fn refresh_cart_modal(&self, cart: &CartView) {
        if self.modal.open().get_untracked() {
            *self.modal.cart().write() = cart.clone();
        }
    }

    fn launch_cart_badge(&self, from: &DomHandle, to: &DomHandle) -> Option<DomHandle> {
        let doc = document()?;
        let body = doc.body()?;
        let (start_x, start_y) = from.center();
        let (end_x, end_y) = to.center();

        let badge = doc.create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
        badge.set_class_name("cart-badge");
        badge.set_inner_html("🛒");
        badge.style().set_css_text(&format!(
            "position: fixed; top: {start_y}px; left: {start_x}px; font-size: 2rem; z-index: 10000; \
             pointer-events: none; transition: all 0.6s ease; transform: scale(1);"
        ));
        body.append_child(&badge).ok()?;

        // Move on the next frame so the transition runs
        let moving = badge.clone();
        let fly = Closure::once_into_js(move || {
            let style = moving.style();
            let _ = style.set_property("top", &format!("{end_y}px"));
            let _ = style.set_property("left", &format!("{end_x}px"));
            let _ = style.set_property("transform", "scale(0.5)");
            let _ = style.set_property("opacity", "0");
        });
        if let Some(win) = web_sys::window() {
            let _ = win.request_animation_frame(fly.unchecked_ref());
        }

        Some(DomHandle::new(badge))
    }
}
