use wasm_bindgen::JsValue;

use crate::presentation::Haptics;

/// `navigator.vibrate`, skipped where the browser lacks it
pub struct NavigatorHaptics;

impl Haptics for NavigatorHaptics {
    fn pulse(&self, duration_ms: u32) {
        let Some(window) = web_sys::window() else { return };
        let navigator = window.navigator();
        if js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
            let _ = navigator.vibrate_with_duration(duration_ms);
        }
    }
}
