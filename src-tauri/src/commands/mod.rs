//! Commands Layer
//!
//! Tauri command handlers the web view calls for native capabilities.

mod app_cmd;
mod dialog_cmd;

pub use app_cmd::*;
pub use dialog_cmd::*;
