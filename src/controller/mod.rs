//! View Controller
//!
//! Owns the cart and the panel flags, reacts to one user or lifecycle event
//! at a time and pushes the result to the page through `Presentation`.
//! Platform effects (vibration, dialogs, timers) go through the injected
//! collaborators so the controller runs the same in tests.

#[cfg(test)]
mod fakes;

use swipe_gestures::{SwipeRecognizer, TouchPhase};

use crate::cart::{Cart, CartTotals};
use crate::config::AppConfig;
use crate::error::CartError;
use crate::models::MenuEntry;
use crate::nav::{NavAction, NavDispatcher, NavTab};
use crate::presentation::{class, Dialogs, EntryGroup, Haptics, Presentation, Region, RegionHandle, Scheduler};
use crate::search::{category_visibility, filter_visibility, ALL_CATEGORIES};
use crate::sidebar::{SidebarEvent, SidebarState, UiState};

/// Title of user-facing notifications
pub const NOTIFICATION_TITLE: &str = "Restaurant Menu";

/// What the back button ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    ClosedSearch,
    ClosedSidebar,
    ExitRequested,
}

pub struct ViewController<P: Presentation> {
    presentation: P,
    haptics: Box<dyn Haptics>,
    dialogs: Box<dyn Dialogs>,
    scheduler: Box<dyn Scheduler>,
    config: AppConfig,
    cart: Cart,
    ui: UiState,
    nav: NavDispatcher,
    swipe: SwipeRecognizer,
    initialized: bool,
}

impl<P: Presentation> ViewController<P> {
    pub fn new(
        presentation: P,
        haptics: Box<dyn Haptics>,
        dialogs: Box<dyn Dialogs>,
        scheduler: Box<dyn Scheduler>,
        config: AppConfig,
    ) -> Self {
        Self {
            presentation,
            haptics,
            dialogs,
            scheduler,
            swipe: SwipeRecognizer::new(config.swipe),
            config,
            cart: Cart::new(),
            ui: UiState::default(),
            nav: NavDispatcher::default(),
            initialized: false,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ui_state(&self) -> UiState {
        self.ui
    }

    pub fn active_tab(&self) -> NavTab {
        self.nav.active()
    }

    /// Sync the page with the initial state. Runs once.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        log::info!("[APP] Categories loaded");
        self.refresh_cart_display();
    }

    // ========================
    // Sidebar
    // ========================

    pub fn handle_sidebar(&mut self, event: SidebarEvent) {
        let next = self.ui.sidebar.next(event);
        log::debug!("[SIDEBAR] {:?} -> {:?} on {:?}", self.ui.sidebar, next, event);
        self.ui.sidebar = next;
        self.render_sidebar();
    }

    pub fn toggle_sidebar(&mut self) {
        self.handle_sidebar(SidebarEvent::Toggle);
    }

    pub fn close_sidebar(&mut self) {
        self.handle_sidebar(SidebarEvent::CloseButton);
    }

    pub fn tap_overlay(&mut self) {
        self.handle_sidebar(SidebarEvent::OverlayTap);
    }

    fn render_sidebar(&self) {
        let open = self.ui.sidebar == SidebarState::Open;
        if let Some(sidebar) = self.presentation.region(Region::Sidebar) {
            set_class(&sidebar, class::OPEN, open);
        }
        if let Some(overlay) = self.presentation.region(Region::Overlay) {
            set_class(&overlay, class::ACTIVE, open);
        }
        self.presentation.set_scroll_locked(open);
    }

    /// Feed one touch phase to the swipe recognizer
    pub fn touch(&mut self, phase: TouchPhase) {
        match phase {
            TouchPhase::Start { x, y } => self.swipe.start(x, y),
            TouchPhase::Move { x, y } => self.swipe.track(x, y),
            TouchPhase::End { x, y } => {
                if let Some(intent) = self.swipe.finish(x, y, self.ui.sidebar_open()) {
                    self.handle_sidebar(intent.into());
                }
            }
            TouchPhase::Cancel => self.swipe.cancel(),
        }
    }

    // ========================
    // Search
    // ========================

    pub fn toggle_search(&mut self) {
        if self.ui.search_active {
            self.close_search();
            return;
        }
        if let Some(container) = self.presentation.region(Region::SearchContainer) {
            container.add_class(class::ACTIVE);
        }
        if let Some(input) = self.presentation.region(Region::SearchInput) {
            input.focus();
        }
        self.ui.search_active = true;
    }

    pub fn close_search(&mut self) {
        if let Some(container) = self.presentation.region(Region::SearchContainer) {
            container.remove_class(class::ACTIVE);
        }
        if let Some(input) = self.presentation.region(Region::SearchInput) {
            input.set_value("");
        }
        self.ui.search_active = false;
        self.show_all_menu_items();
    }

    /// Apply the search query to every menu item. Search spans all
    /// categories, so the category selection goes back to `all`.
    pub fn search(&self, query: &str) {
        self.activate_entry(EntryGroup::Categories, ALL_CATEGORIES);
        let (handles, entries) = self.menu_entries();
        let visibility = filter_visibility(query, &entries);
        apply_visibility(&handles, &visibility);
    }

    /// Show every item and select the `all` category to match
    fn show_all_menu_items(&self) {
        self.activate_entry(EntryGroup::Categories, ALL_CATEGORIES);
        for item in self.presentation.entries(EntryGroup::MenuItems) {
            item.set_displayed(true);
        }
    }

    fn menu_entries(&self) -> (Vec<P::Handle>, Vec<MenuEntry>) {
        let handles = self.presentation.entries(EntryGroup::MenuItems);
        let entries = handles
            .iter()
            .map(|handle| MenuEntry {
                name: handle.key().unwrap_or_default(),
                category: handle.attribute("data-category").unwrap_or_default(),
                text: handle.text(),
            })
            .collect();
        (handles, entries)
    }

    // ========================
    // Categories
    // ========================

    pub fn select_category(&mut self, category: &str) {
        self.activate_entry(EntryGroup::Categories, category);
        self.handle_sidebar(SidebarEvent::CategorySelected);

        let (handles, entries) = self.menu_entries();
        apply_visibility(&handles, &category_visibility(category, &entries));

        if let Some(grid) = self.presentation.region(Region::MenuGrid) {
            grid.add_class(class::LOADING);
            self.scheduler.schedule(
                self.config.timings.loading_ms,
                Box::new(move || grid.remove_class(class::LOADING)),
            );
        }

        self.haptics.pulse(self.config.haptics.category_ms);
    }

    pub fn select_subcategory(&mut self, subcategory: &str) {
        if let Some(entry) = self.activate_entry(EntryGroup::Subcategories, subcategory) {
            entry.scroll_into_view();
        }
        self.haptics.pulse(self.config.haptics.subcategory_ms);
    }

    /// Give `class::ACTIVE` to the entry keyed `key` and take it from the rest
    fn activate_entry(&self, group: EntryGroup, key: &str) -> Option<P::Handle> {
        let mut selected = None;
        for entry in self.presentation.entries(group) {
            if entry.key().as_deref() == Some(key) {
                entry.add_class(class::ACTIVE);
                selected = Some(entry);
            } else {
                entry.remove_class(class::ACTIVE);
            }
        }
        selected
    }

    // ========================
    // Cart
    // ========================

    /// Add one unit of the menu item `name`, priced from its `data-price`.
    /// An invalid price rejects the add and tells the user.
    pub fn add_to_cart(&mut self, name: &str) -> Result<CartTotals, CartError> {
        let Some(item) = self.presentation.entry(EntryGroup::MenuItems, name) else {
            log::warn!("[CART] No menu item named {:?}", name);
            return Err(CartError::UnknownItem(name.to_string()));
        };
        let raw_price = item.attribute("data-price").unwrap_or_default();

        if let Err(e) = self.cart.add_priced(name, &raw_price) {
            log::warn!("[CART] Rejected {:?}: {}", name, e);
            if let CartError::InvalidPrice(_) = e {
                self.dialogs.notify(NOTIFICATION_TITLE, &format!("Prix invalide pour « {} »", name));
            }
            return Err(e);
        }

        let totals = self.refresh_cart_display();
        log::info!("[CART] Added {:?}, {} items, {}", name, totals.item_count, totals.total);
        self.animate_to_cart(&item);
        self.haptics.pulse(self.config.haptics.add_to_cart_ms);
        Ok(totals)
    }

    pub fn remove_from_cart(&mut self, name: &str) -> Result<CartTotals, CartError> {
        self.cart.remove_item(name)?;
        Ok(self.refresh_cart_display())
    }

    /// Zero removes the line
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Result<CartTotals, CartError> {
        self.cart.set_quantity(name, quantity)?;
        Ok(self.refresh_cart_display())
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.refresh_cart_display();
    }

    /// Push cart count, total and floating button state to the page
    fn refresh_cart_display(&self) -> CartTotals {
        let totals = self.cart.totals();

        if let Some(count) = self.presentation.region(Region::CartCount) {
            count.set_text(&totals.item_count.to_string());
        }
        if let Some(total) = self.presentation.region(Region::CartTotal) {
            total.set_text(&totals.total.to_string());
        }
        if let Some(floating) = self.presentation.region(Region::CartFloating) {
            set_class(&floating, class::VISIBLE, totals.item_count > 0);
        }
        self.presentation.refresh_cart_modal(&self.cart.view());

        totals
    }

    fn animate_to_cart(&self, item: &P::Handle) {
        let Some(target) = self.presentation.region(Region::CartNavEntry) else { return };
        let Some(badge) = self.presentation.launch_cart_badge(item, &target) else { return };
        self.scheduler
            .schedule(self.config.timings.cart_animation_ms, Box::new(move || badge.remove()));
    }

    pub fn show_cart(&self) {
        log::info!("[CART] Showing cart with {} lines", self.cart.lines().len());
        self.presentation.open_cart_modal(&self.cart.view());
    }

    // ========================
    // Navigation
    // ========================

    pub fn navigate(&mut self, tab: NavTab) {
        self.activate_entry(EntryGroup::NavEntries, tab.key());

        match self.nav.select(tab) {
            NavAction::ShowHome => log::info!("[NAV] Navigating to Home"),
            NavAction::ShowMenu => log::info!("[NAV] Navigating to Menu"),
            NavAction::ShowCart => self.show_cart(),
            NavAction::ShowProfile => log::info!("[NAV] Navigating to Profile"),
        }

        self.haptics.pulse(self.config.haptics.navigation_ms);
    }

    /// Navigate from a raw `data-nav` value; unknown values are ignored
    pub fn navigate_key(&mut self, key: &str) {
        match key.parse::<NavTab>() {
            Ok(tab) => self.navigate(tab),
            Err(e) => log::warn!("[NAV] {}", e),
        }
    }

    // ========================
    // Lifecycle
    // ========================

    /// Hardware back: close search, else the sidebar, else offer to exit
    pub fn on_back_button(&mut self) -> BackOutcome {
        if self.ui.search_active {
            self.close_search();
            BackOutcome::ClosedSearch
        } else if self.ui.sidebar_open() {
            self.handle_sidebar(SidebarEvent::BackNavigation);
            BackOutcome::ClosedSidebar
        } else {
            self.dialogs.confirm_exit();
            BackOutcome::ExitRequested
        }
    }

    pub fn on_pause(&self) {
        log::info!("[APP] App paused");
    }

    pub fn on_resume(&self) {
        log::info!("[APP] App resumed");
    }
}

fn set_class<H: RegionHandle>(handle: &H, name: &str, on: bool) {
    if on {
        handle.add_class(name);
    } else {
        handle.remove_class(name);
    }
}

fn apply_visibility<H: RegionHandle>(handles: &[H], visibility: &[bool]) {
    for (handle, visible) in handles.iter().zip(visibility) {
        handle.set_displayed(*visible);
    }
}
