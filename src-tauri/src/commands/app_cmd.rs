//! App Lifecycle Commands

use tauri::{AppHandle, Runtime};

/// Quit the application after the user confirmed it
#[tauri::command]
pub async fn exit_app<R: Runtime>(app: AppHandle<R>) -> Result<(), String> {
    log::info!("Exit requested from web view");
    app.exit(0);
    Ok(())
}

/// Latest log lines, oldest first, for in-app diagnostics
#[tauri::command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_logs_empty_without_logger() {
        assert!(recent_logs().is_empty());
    }
}
