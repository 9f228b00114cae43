//! App Configuration
//!
//! Tunables read once at startup from an optional JSON block embedded in the
//! page (`<script id="app-config" type="application/json">`). Every field has
//! a default, so a missing block or missing keys fall back silently.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use swipe_gestures::SwipeThresholds;

use crate::error::ConfigError;

/// Element holding the embedded configuration
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Vibration lengths in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticDurations {
    pub category_ms: u32,
    pub subcategory_ms: u32,
    pub navigation_ms: u32,
    pub add_to_cart_ms: u32,
}

impl Default for HapticDurations {
    fn default() -> Self {
        Self {
            category_ms: 50,
            subcategory_ms: 30,
            navigation_ms: 30,
            add_to_cart_ms: 100,
        }
    }
}

/// Delays of the one-shot cosmetic effects, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub loading_ms: u32,
    pub cart_animation_ms: u32,
    pub press_reset_ms: u32,
    pub double_tap_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading_ms: 500,
            cart_animation_ms: 600,
            press_reset_ms: 150,
            double_tap_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub swipe: SwipeThresholds,
    pub haptics: HapticDurations,
    pub timings: Timings,
    /// `log` level name, e.g. "debug"
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            swipe: SwipeThresholds::default(),
            haptics: HapticDurations::default(),
            timings: Timings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read the embedded block, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        Self::from_optional(raw.as_deref())
    }

    fn from_optional(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => {
                log::info!("[CONFIG] #{} not set, using defaults", CONFIG_ELEMENT_ID);
                Self::default()
            }
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }),
        }
    }
}
