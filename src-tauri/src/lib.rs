//! Menu Cart Native Shell
//!
//! Hosts the menu web view and exposes the few native capabilities it needs:
//! - exit confirmation and alerts (dialog plugin)
//! - app exit and recent log lines
//!
//! Menu and cart state live entirely in the web view.

use tauri::{Manager, RunEvent};

mod commands;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            // Initialize logging
            rolling_logger::init_logger(app.path().app_log_dir()?, "MenuCart")?;

            log::info!(
                "[{}] App setup done, log file: {:?}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                rolling_logger::log_file_path()
            );
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::confirm_exit,
            commands::notify,
            commands::exit_app,
            commands::recent_logs,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|_app, event| match event {
        RunEvent::Ready => {
            let _ = rolling_logger::info("Web view host ready");
        }
        RunEvent::Exit => {
            let _ = rolling_logger::info("App exiting");
        }
        _ => {}
    });
}
