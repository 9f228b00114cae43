//! Cart Modal Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Written by the
//! DOM presentation, read by the `CartModal` component.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::CartView;

#[derive(Clone, Debug, Default, Store)]
pub struct CartModal {
    /// Modal currently shown
    pub open: bool,
    /// Snapshot rendered by the modal
    pub cart: CartView,
}

/// Type alias for the store
pub type CartModalStore = Store<CartModal>;

/// Get the modal store from context
pub fn use_cart_modal() -> CartModalStore {
    expect_context::<CartModalStore>()
}

/// Hide the modal; the cart is untouched
pub fn close_cart_modal(store: &CartModalStore) {
    *store.open().write() = false;
}
