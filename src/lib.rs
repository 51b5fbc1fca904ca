//! Accessibility capability surface for a Tauri host application.
//!
//! This crate is the unsupported-platform variant: the real backend exists
//! only on macOS and is not part of this crate, so every operation returns
//! a well-defined negative/empty answer instead of a missing command or a
//! crash. Callers must read `false`/empty as "feature unavailable here",
//! not as an error.

pub mod ax;
mod commands;

use tauri::Runtime;

fn debug_log(msg: &str) {
    if cfg!(debug_assertions) {
        eprintln!("[accessibility] {msg}");
    }
}

/// Install the four capability commands on the host's builder.
///
/// This is a static, one-time name-to-handler mapping; no configuration,
/// environment, or persisted state is involved.
pub fn register<R: Runtime>(builder: tauri::Builder<R>) -> tauri::Builder<R> {
    builder.invoke_handler(tauri::generate_handler![
        commands::check_accessibility_permission,
        commands::request_accessibility_permission,
        commands::simulate_key_press,
        commands::get_active_app_info
    ])
}
