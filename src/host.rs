//! Host Lifecycle
//!
//! Inside the hybrid wrapper the page gets device hooks (back button, pause,
//! resume). In a plain browser those are skipped and only the touch handling
//! is bound.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::commands;
use crate::config::AppConfig;
use crate::context::AppContext;

/// Elements that shrink while touched
const PRESS_FEEDBACK_SELECTOR: &str = ".menu-item, .category-item, .subcategory-item, .nav-item, .btn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Running in the Tauri web view
    Native,
    Browser,
}

impl HostKind {
    pub fn detect() -> Self {
        if commands::is_native_host() {
            HostKind::Native
        } else {
            HostKind::Browser
        }
    }

    pub fn is_native(self) -> bool {
        self == HostKind::Native
    }
}

fn on_document<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Bind gestures and, in the wrapper, the device lifecycle hooks
pub fn install(ctx: AppContext, host: HostKind, config: &AppConfig) {
    swipe_gestures::bind_global_touch(move |phase| {
        ctx.run(|c| c.touch(phase));
    });
    swipe_gestures::bind_press_feedback(PRESS_FEEDBACK_SELECTOR, config.timings.press_reset_ms as i32);
    install_touch_guards(config.timings.double_tap_ms as f64);

    if host.is_native() {
        log::info!("[HOST] Device is ready");
        bind_back_button(ctx);
        bind_pause_resume(ctx);
    } else {
        log::info!("[HOST] Browser mode, device hooks skipped");
    }
}

/// Hardware back arrives as `popstate`; keep one history entry to absorb it
fn bind_back_button(ctx: AppContext) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else { return };
    let _ = history.push_state(&JsValue::NULL, "");

    let Some(win) = web_sys::window() else { return };
    let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let outcome = ctx.run(|c| c.on_back_button());
        log::debug!("[HOST] Back button: {:?}", outcome);
        let _ = history.push_state(&JsValue::NULL, "");
    });
    let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    on_popstate.forget();
}

fn bind_pause_resume(ctx: AppContext) {
    on_document("visibilitychange", move |_ev: web_sys::Event| {
        let hidden = web_sys::window()
            .and_then(|w| w.document())
            .map(|doc| doc.hidden())
            .unwrap_or(false);
        if hidden {
            ctx.run(|c| c.on_pause());
        } else {
            ctx.run(|c| c.on_resume());
        }
    });
}

/// Block double-tap zoom and the long-press context menu
fn install_touch_guards(double_tap_ms: f64) {
    let last_touch_end = Rc::new(Cell::new(0.0_f64));
    on_document("touchend", move |ev: web_sys::Event| {
        let now = js_sys::Date::now();
        if now - last_touch_end.get() <= double_tap_ms {
            ev.prevent_default();
        }
        last_touch_end.set(now);
    });

    on_document("contextmenu", |ev: web_sys::Event| ev.prevent_default());
}
