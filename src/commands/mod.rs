//! Tauri Command Wrappers
//!
//! Frontend bindings to the native shell. Only usable when the page runs
//! inside the hybrid wrapper; see `is_native_host`.

mod dialog;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

/// True when the Tauri bridge is injected into the page
pub fn is_native_host() -> bool {
    let Some(window) = web_sys::window() else { return false };
    js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__"))
        .map(|bridge| !bridge.is_undefined() && !bridge.is_null())
        .unwrap_or(false)
}

pub use dialog::*;
