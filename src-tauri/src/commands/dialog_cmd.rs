//! Native Dialog Commands
//!
//! Exit confirmation and user notifications shown by the platform.

use tauri::{command, AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

pub const EXIT_TITLE: &str = "Quitter";
pub const EXIT_MESSAGE: &str = "Voulez-vous quitter l'application?";
pub const EXIT_CONFIRM: &str = "Oui";
pub const EXIT_CANCEL: &str = "Non";

/// Ask whether the app should exit. `true` when the user picked "Oui".
#[command]
pub async fn confirm_exit<R: Runtime>(app: AppHandle<R>) -> Result<bool, String> {
    let confirmed = app
        .dialog()
        .message(EXIT_MESSAGE)
        .title(EXIT_TITLE)
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::OkCancelCustom(
            EXIT_CONFIRM.to_string(),
            EXIT_CANCEL.to_string(),
        ))
        .blocking_show();

    log::info!("Exit confirmation answered: {}", confirmed);
    Ok(confirmed)
}

/// Show a non-blocking alert
#[command]
pub async fn notify<R: Runtime>(app: AppHandle<R>, title: String, message: String) -> Result<(), String> {
    if message.trim().is_empty() {
        return Err("Empty notification".to_string());
    }

    log::warn!("Notification: {}", message);
    app.dialog()
        .message(message)
        .title(title)
        .kind(MessageDialogKind::Warning)
        .show(|_| {});
    Ok(())
}
