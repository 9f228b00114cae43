//! Swipe Gesture Utilities
//!
//! Edge-swipe detection for slide-in panels using touch events.
//! Uses distance thresholds to tell a horizontal swipe from a scroll.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

/// Distance thresholds for swipe classification, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeThresholds {
    /// An opening swipe must start this close to the left edge
    pub edge_zone_px: f64,
    /// Minimum horizontal travel for both directions
    pub min_horizontal_px: f64,
    /// Vertical travel must stay strictly below this
    pub max_vertical_px: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            edge_zone_px: 50.0,
            min_horizontal_px: 100.0,
            max_vertical_px: 100.0,
        }
    }
}

/// What a finished touch sequence asks the panel to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeIntent {
    Open,
    Close,
}

/// One touch-start to touch-end sequence
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub start_x: f64,
    pub start_y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
}

impl GestureSample {
    pub fn new(start_x: f64, start_y: f64) -> Self {
        Self { start_x, start_y, delta_x: 0.0, delta_y: 0.0 }
    }

    /// Update deltas from the current touch position
    pub fn track(&mut self, x: f64, y: f64) {
        self.delta_x = x - self.start_x;
        self.delta_y = y - self.start_y;
    }
}

/// Classify a finished sample.
///
/// Opening only counts when the swipe starts inside the edge zone; closing
/// only counts while the panel is open.
pub fn classify(sample: &GestureSample, thresholds: &SwipeThresholds, panel_open: bool) -> Option<SwipeIntent> {
    let horizontal = sample.delta_y.abs() < thresholds.max_vertical_px;

    if sample.start_x < thresholds.edge_zone_px
        && sample.delta_x > thresholds.min_horizontal_px
        && horizontal
    {
        return Some(SwipeIntent::Open);
    }

    if panel_open && sample.delta_x < -thresholds.min_horizontal_px && horizontal {
        return Some(SwipeIntent::Close);
    }

    None
}

/// Tracks at most one touch sequence at a time
#[derive(Clone, Debug, Default)]
pub struct SwipeRecognizer {
    thresholds: SwipeThresholds,
    sample: Option<GestureSample>,
}

impl SwipeRecognizer {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self { thresholds, sample: None }
    }

    /// Begin a new sequence, dropping any unfinished one
    pub fn start(&mut self, x: f64, y: f64) {
        self.sample = Some(GestureSample::new(x, y));
    }

    pub fn track(&mut self, x: f64, y: f64) {
        if let Some(sample) = self.sample.as_mut() {
            sample.track(x, y);
        }
    }

    /// End the sequence at `(x, y)` and classify it.
    /// The sample is discarded whatever the outcome.
    pub fn finish(&mut self, x: f64, y: f64, panel_open: bool) -> Option<SwipeIntent> {
        let mut sample = self.sample.take()?;
        sample.track(x, y);
        classify(&sample, &self.thresholds, panel_open)
    }

    pub fn cancel(&mut self) {
        self.sample = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.sample.is_some()
    }
}

// ========================
// DOM Bindings
// ========================

/// Touch phase forwarded from the document listeners, in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchPhase {
    Start { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    End { x: f64, y: f64 },
    Cancel,
}

/// Scale applied to an element while it is pressed
const PRESSED_TRANSFORM: &str = "scale(0.95)";

fn first_touch(list: web_sys::TouchList) -> Option<(f64, f64)> {
    list.get(0).map(|t| (t.client_x() as f64, t.client_y() as f64))
}

fn add_document_listener(event: &str, handler: &js_sys::Function) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(event, handler);
    }
}

/// Bind document-level touch listeners and forward every phase to `on_touch`
pub fn bind_global_touch<F>(on_touch: F)
where
    F: Fn(TouchPhase) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_start = {
        let on_touch = on_touch.clone();
        Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            if let Some((x, y)) = first_touch(ev.touches()) {
                on_touch(TouchPhase::Start { x, y });
            }
        })
    };
    let on_move = {
        let on_touch = on_touch.clone();
        Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            if let Some((x, y)) = first_touch(ev.touches()) {
                on_touch(TouchPhase::Move { x, y });
            }
        })
    };
    let on_end = {
        let on_touch = on_touch.clone();
        Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            // The lifted finger is no longer in `touches`
            match first_touch(ev.changed_touches()) {
                Some((x, y)) => on_touch(TouchPhase::End { x, y }),
                None => on_touch(TouchPhase::Cancel),
            }
        })
    };
    let on_cancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        on_touch(TouchPhase::Cancel);
    });

    add_document_listener("touchstart", on_start.as_ref().unchecked_ref());
    add_document_listener("touchmove", on_move.as_ref().unchecked_ref());
    add_document_listener("touchend", on_end.as_ref().unchecked_ref());
    add_document_listener("touchcancel", on_cancel.as_ref().unchecked_ref());

    on_start.forget();
    on_move.forget();
    on_end.forget();
    on_cancel.forget();
}

fn set_transform(el: &web_sys::HtmlElement, value: &str) {
    let style = el.style();
    if value.is_empty() {
        let _ = style.remove_property("transform");
    } else {
        let _ = style.set_property("transform", value);
    }
}

/// Shrink every element matching `selector` while it is touched.
///
/// The element springs back `reset_ms` after touch-end, or at once when the
/// touch is cancelled. Only elements present at call time are bound.
pub fn bind_press_feedback(selector: &str, reset_ms: i32) {
    use wasm_bindgen::closure::Closure;

    let Some(win) = web_sys::window() else { return };
    let Some(doc) = win.document() else { return };
    let Ok(nodes) = doc.query_selector_all(selector) else { return };

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };

        let pressed = el.clone();
        let on_start = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
            set_transform(&pressed, PRESSED_TRANSFORM);
        });

        let released = el.clone();
        let on_end = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
            let target = released.clone();
            let reset = Closure::once_into_js(move || set_transform(&target, ""));
            if let Some(win) = web_sys::window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(reset.unchecked_ref(), reset_ms);
            }
        });

        let cancelled = el.clone();
        let on_cancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
            set_transform(&cancelled, "");
        });

        let _ = el.add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref());
        let _ = el.add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref());
        let _ = el.add_event_listener_with_callback("touchcancel", on_cancel.as_ref().unchecked_ref());

        on_start.forget();
        on_end.forget();
        on_cancel.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(start: (f64, f64), end: (f64, f64), panel_open: bool) -> Option<SwipeIntent> {
        let mut recognizer = SwipeRecognizer::default();
        recognizer.start(start.0, start.1);
        recognizer.track((start.0 + end.0) / 2.0, (start.1 + end.1) / 2.0);
        recognizer.finish(end.0, end.1, panel_open)
    }

    #[test]
    fn test_edge_swipe_opens() {
        assert_eq!(swipe((10.0, 300.0), (160.0, 320.0), false), Some(SwipeIntent::Open));
    }

    #[test]
    fn test_swipe_away_from_edge_is_ignored() {
        assert_eq!(swipe((200.0, 300.0), (350.0, 300.0), false), None);
    }

    #[test]
    fn test_mostly_vertical_swipe_is_ignored() {
        assert_eq!(swipe((10.0, 100.0), (160.0, 250.0), false), None);
        // Exactly at the vertical limit is not horizontal enough
        assert_eq!(swipe((10.0, 100.0), (160.0, 200.0), false), None);
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        assert_eq!(swipe((10.0, 300.0), (110.0, 300.0), false), None);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Start exactly on the edge zone limit
        assert_eq!(swipe((50.0, 300.0), (200.0, 300.0), false), None);
        assert_eq!(swipe((49.0, 300.0), (199.0, 300.0), false), Some(SwipeIntent::Open));
        // Travel exactly the minimum distance
        assert_eq!(swipe((10.0, 300.0), (110.0, 300.0), false), None);
        assert_eq!(swipe((10.0, 300.0), (111.0, 300.0), false), Some(SwipeIntent::Open));
        // Close swipe at the vertical limit
        assert_eq!(swipe((300.0, 300.0), (150.0, 400.0), true), None);
        assert_eq!(swipe((300.0, 300.0), (150.0, 399.0), true), Some(SwipeIntent::Close));
        // Close swipe of exactly the minimum distance
        assert_eq!(swipe((300.0, 300.0), (200.0, 300.0), true), None);
    }

    #[test]
    fn test_left_swipe_closes_only_when_open() {
        assert_eq!(swipe((300.0, 300.0), (150.0, 310.0), true), Some(SwipeIntent::Close));
        assert_eq!(swipe((300.0, 300.0), (150.0, 310.0), false), None);
    }

    #[test]
    fn test_finish_without_start_is_ignored() {
        let mut recognizer = SwipeRecognizer::default();
        assert_eq!(recognizer.finish(400.0, 0.0, false), None);
    }

    #[test]
    fn test_sample_is_discarded_after_finish_and_cancel() {
        let mut recognizer = SwipeRecognizer::default();
        recognizer.start(10.0, 10.0);
        assert!(recognizer.is_tracking());
        recognizer.finish(20.0, 10.0, false);
        assert!(!recognizer.is_tracking());

        recognizer.start(10.0, 10.0);
        recognizer.cancel();
        assert_eq!(recognizer.finish(300.0, 10.0, false), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = SwipeThresholds { edge_zone_px: 20.0, min_horizontal_px: 40.0, max_vertical_px: 30.0 };
        let sample = GestureSample { start_x: 15.0, start_y: 0.0, delta_x: 50.0, delta_y: 10.0 };
        assert_eq!(classify(&sample, &thresholds, false), Some(SwipeIntent::Open));

        let sample = GestureSample { start_x: 25.0, ..sample };
        assert_eq!(classify(&sample, &thresholds, false), None);
    }

    #[test]
    fn test_thresholds_deserialize_with_defaults() {
        let parsed: SwipeThresholds = serde_json::from_str(r#"{"edge_zone_px": 30}"#).unwrap();
        assert_eq!(parsed.edge_zone_px, 30.0);
        assert_eq!(parsed.min_horizontal_px, 100.0);
        assert_eq!(parsed.max_vertical_px, 100.0);
    }
}
