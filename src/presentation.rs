//! Presentation Boundary
//!
//! Capabilities the controller needs from the page and the host platform.
//! Region lookups return `Option`; an absent region turns the operation into
//! a no-op at the call site.

use crate::models::CartView;

/// Named single elements of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Sidebar,
    Overlay,
    SearchContainer,
    SearchInput,
    MenuGrid,
    CartCount,
    CartTotal,
    CartFloating,
    /// Navigation entry the add-to-cart badge flies to
    CartNavEntry,
}

/// Repeated elements, each identified by a key attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryGroup {
    /// `data-category`
    Categories,
    /// `data-subcategory`
    Subcategories,
    /// `data-nav`
    NavEntries,
    /// `data-name`
    MenuItems,
}

/// CSS classes toggled by the controller
pub mod class {
    pub const OPEN: &str = "open";
    pub const ACTIVE: &str = "active";
    pub const VISIBLE: &str = "visible";
    pub const LOADING: &str = "loading";
}

/// Handle to one element of the page
pub trait RegionHandle: Clone + 'static {
    /// Value of the group's key attribute
    fn key(&self) -> Option<String>;
    fn attribute(&self, name: &str) -> Option<String>;
    /// Full rendered text
    fn text(&self) -> String;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_text(&self, text: &str);
    /// Input value; ignored by non-input elements
    fn set_value(&self, value: &str);
    fn focus(&self);
    fn set_displayed(&self, displayed: bool);
    fn scroll_into_view(&self);
    /// Detach from the page
    fn remove(&self);
}

pub trait Presentation {
    type Handle: RegionHandle;

    fn region(&self, region: Region) -> Option<Self::Handle>;

    /// Every element of `group`, in page order
    fn entries(&self, group: EntryGroup) -> Vec<Self::Handle>;

    fn entry(&self, group: EntryGroup, key: &str) -> Option<Self::Handle> {
        self.entries(group)
            .into_iter()
            .find(|handle| handle.key().as_deref() == Some(key))
    }

    /// Stop the page from scrolling behind an open panel
    fn set_scroll_locked(&self, locked: bool);

    fn open_cart_modal(&self, cart: &CartView);

    /// Re-render the modal if it is currently open
    fn refresh_cart_modal(&self, cart: &CartView);

    /// Start the badge flying from `from` to `to`; returns the badge so it
    /// can be removed when the animation is over
    fn launch_cart_badge(&self, from: &Self::Handle, to: &Self::Handle) -> Option<Self::Handle>;
}

/// Best-effort vibration
pub trait Haptics {
    fn pulse(&self, duration_ms: u32);
}

pub trait Dialogs {
    /// Ask the user whether to leave the app; exiting is the dialog's job
    fn confirm_exit(&self);
    fn notify(&self, title: &str, message: &str);
}

/// One-shot delayed tasks. Not cancellable.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
