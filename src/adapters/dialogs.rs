//! Exit confirmation and notifications.
//!
//! Inside the hybrid wrapper both go to native dialogs; in a plain browser
//! the exit prompt is only logged and notifications use `window.alert`.

use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::presentation::Dialogs;

pub struct HostDialogs {
    native: bool,
}

impl HostDialogs {
    pub fn new(native: bool) -> Self {
        Self { native }
    }
}

impl Dialogs for HostDialogs {
    fn confirm_exit(&self) {
        if !self.native {
            log::info!("[HOST] Back button pressed in web browser");
            return;
        }

        spawn_local(async {
            match commands::confirm_exit().await {
                Ok(true) => {
                    if let Err(e) = commands::exit_app().await {
                        log::error!("[HOST] Exit failed: {}", e);
                    }
                }
                Ok(false) => log::info!("[HOST] Exit cancelled"),
                Err(e) => log::warn!("[HOST] Exit prompt failed: {}", e),
            }
        });
    }

    fn notify(&self, title: &str, message: &str) {
        if !self.native {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
            return;
        }

        let title = title.to_string();
        let message = message.to_string();
        spawn_local(async move {
            if let Err(e) = commands::notify(&title, &message).await {
                log::warn!("[HOST] Notification failed: {}", e);
            }
        });
    }
}
