//! In-memory page and platform doubles for controller tests

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::models::CartView;
use crate::presentation::{Dialogs, EntryGroup, Haptics, Presentation, Region, RegionHandle, Scheduler};

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
    pub attrs: HashMap<String, String>,
    pub displayed: bool,
    pub focused: bool,
    pub scrolled_into_view: u32,
    pub removed: bool,
}

#[derive(Default)]
pub struct Page {
    pub elements: HashMap<String, FakeElement>,
    regions: HashMap<Region, String>,
    groups: HashMap<EntryGroup, (Vec<String>, &'static str)>,
    pub scroll_locked: bool,
    /// Current modal content while open
    pub modal: Option<CartView>,
    pub badges_launched: u32,
}

impl Page {
    pub fn element(&self, id: &str) -> &FakeElement {
        &self.elements[id]
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).map_or(false, |el| el.classes.contains(class))
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

#[derive(Clone)]
pub struct FakeHandle {
    page: Rc<RefCell<Page>>,
    id: String,
    key_attr: Option<&'static str>,
}

impl FakeHandle {
    fn with<R>(&self, f: impl FnOnce(&mut FakeElement) -> R) -> Option<R> {
        self.page.borrow_mut().elements.get_mut(&self.id).map(f)
    }
}

impl RegionHandle for FakeHandle {
    fn key(&self) -> Option<String> {
        self.attribute(self.key_attr?)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.with(|el| el.attrs.get(name).cloned()).flatten()
    }

    fn text(&self) -> String {
        self.with(|el| el.text.clone()).unwrap_or_default()
    }

    fn add_class(&self, class: &str) {
        self.with(|el| el.classes.insert(class.to_string()));
    }

    fn remove_class(&self, class: &str) {
        self.with(|el| el.classes.remove(class));
    }

    fn set_text(&self, text: &str) {
        self.with(|el| el.text = text.to_string());
    }

    fn set_value(&self, value: &str) {
        self.with(|el| el.value = value.to_string());
    }

    fn focus(&self) {
        self.with(|el| el.focused = true);
    }

    fn set_displayed(&self, displayed: bool) {
        self.with(|el| el.displayed = displayed);
    }

    fn scroll_into_view(&self) {
        self.with(|el| el.scrolled_into_view += 1);
    }

    fn remove(&self) {
        self.with(|el| el.removed = true);
    }
}

/// Page with the regions and entries of the menu screen
#[derive(Clone, Default)]
pub struct FakePresentation {
    pub page: Rc<RefCell<Page>>,
}

impl FakePresentation {
    pub fn restaurant() -> Self {
        let fake = Self::default();
        {
            let mut page = fake.page.borrow_mut();
            for (region, id) in [
                (Region::Sidebar, "categoriesSidebar"),
                (Region::Overlay, "sidebarOverlay"),
                (Region::SearchContainer, "searchContainer"),
                (Region::SearchInput, "searchInput"),
                (Region::MenuGrid, "menuGrid"),
                (Region::CartCount, "cartCount"),
                (Region::CartTotal, "cartTotal"),
                (Region::CartFloating, "cartFloating"),
                (Region::CartNavEntry, "nav-cart"),
            ] {
                page.regions.insert(region, id.to_string());
                page.elements.insert(id.to_string(), FakeElement { displayed: true, ..Default::default() });
            }

            add_group(&mut page, EntryGroup::Categories, "data-category", &["all", "pizzas", "salades"], "cat");
            add_group(&mut page, EntryGroup::Subcategories, "data-subcategory", &["populaires", "vegetarien"], "sub");
            add_group(&mut page, EntryGroup::NavEntries, "data-nav", &["home", "menu", "cart", "profile"], "nav");
            if let Some(el) = page.elements.get_mut("nav-menu") {
                el.classes.insert("active".into());
            }

            let items = [
                ("Pizza Margherita", "9.00", "pizzas", "Pizza Margherita Tomate, mozzarella 9.00 €"),
                ("Salad", "7.50", "salades", "Salad Laitue, parmesan 7.50 €"),
                ("Coke", "2.50", "boissons", "Coke Canette 33cl 2.50 €"),
                ("Mystère", "douze", "desserts", "Mystère Surprise du chef"),
            ];
            let mut ids = Vec::new();
            for (name, price, category, text) in items {
                let id = format!("item-{name}");
                let mut el = FakeElement { displayed: true, text: text.to_string(), ..Default::default() };
                el.attrs.insert("data-name".into(), name.into());
                el.attrs.insert("data-price".into(), price.into());
                el.attrs.insert("data-category".into(), category.into());
                page.elements.insert(id.clone(), el);
                ids.push(id);
            }
            page.groups.insert(EntryGroup::MenuItems, (ids, "data-name"));
        }
        fake
    }

    /// Drop a region from the page, as if the markup lacked it
    pub fn without(self, region: Region) -> Self {
        self.page.borrow_mut().regions.remove(&region);
        self
    }

    pub fn displayed_items(&self) -> Vec<String> {
        let page = self.page.borrow();
        page.groups[&EntryGroup::MenuItems]
            .0
            .iter()
            .filter(|id| page.elements[*id].displayed)
            .map(|id| page.elements[id].attrs["data-name"].clone())
            .collect()
    }
}

fn add_group(page: &mut Page, group: EntryGroup, attr: &'static str, keys: &[&str], prefix: &str) {
    let mut ids = Vec::new();
    for key in keys {
        let id = format!("{prefix}-{key}");
        let mut el = FakeElement { displayed: true, ..Default::default() };
        el.attrs.insert(attr.to_string(), key.to_string());
        page.elements.insert(id.clone(), el);
        ids.push(id);
    }
    page.groups.insert(group, (ids, attr));
}

impl Presentation for FakePresentation {
    type Handle = FakeHandle;

    fn region(&self, region: Region) -> Option<FakeHandle> {
        let id = self.page.borrow().regions.get(&region)?.clone();
        Some(FakeHandle { page: self.page.clone(), id, key_attr: None })
    }

    fn entries(&self, group: EntryGroup) -> Vec<FakeHandle> {
        let page = self.page.borrow();
        let Some((ids, attr)) = page.groups.get(&group) else { return Vec::new() };
        ids.iter()
            .map(|id| FakeHandle { page: self.page.clone(), id: id.clone(), key_attr: Some(*attr) })
            .collect()
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.page.borrow_mut().scroll_locked = locked;
    }

    fn open_cart_modal(&self, cart: &CartView) {
        self.page.borrow_mut().modal = Some(cart.clone());
    }

    fn refresh_cart_modal(&self, cart: &CartView) {
        let mut page = self.page.borrow_mut();
        if page.modal.is_some() {
            page.modal = Some(cart.clone());
        }
    }

    fn launch_cart_badge(&self, _from: &FakeHandle, _to: &FakeHandle) -> Option<FakeHandle> {
        let mut page = self.page.borrow_mut();
        page.badges_launched += 1;
        let id = format!("badge-{}", page.badges_launched);
        page.elements.insert(id.clone(), FakeElement { displayed: true, ..Default::default() });
        drop(page);
        Some(FakeHandle { page: self.page.clone(), id, key_attr: None })
    }
}

#[derive(Clone, Default)]
pub struct FakeHaptics {
    pub pulses: Rc<RefCell<Vec<u32>>>,
}

impl Haptics for FakeHaptics {
    fn pulse(&self, duration_ms: u32) {
        self.pulses.borrow_mut().push(duration_ms);
    }
}

#[derive(Default)]
pub struct DialogLog {
    pub exit_prompts: u32,
    pub notifications: Vec<(String, String)>,
}

#[derive(Clone, Default)]
pub struct FakeDialogs {
    pub log: Rc<RefCell<DialogLog>>,
}

impl Dialogs for FakeDialogs {
    fn confirm_exit(&self) {
        self.log.borrow_mut().exit_prompts += 1;
    }

    fn notify(&self, title: &str, message: &str) {
        self.log.borrow_mut().notifications.push((title.to_string(), message.to_string()));
    }
}

/// Collects tasks; tests decide when time passes
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pub pending: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<u32> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_all(&self) {
        let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay_ms, task));
    }
}
