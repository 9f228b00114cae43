//! Application Context
//!
//! Hands the view controller to every component via the Leptos Context API.

use leptos::prelude::*;

use crate::adapters::DomPresentation;
use crate::controller::ViewController;

pub type Controller = ViewController<DomPresentation>;

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Run `f` against the controller; `None` once the owner is disposed
    pub fn run<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        self.controller.try_update_value(f)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
