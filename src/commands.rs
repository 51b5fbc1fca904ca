use crate::ax::{self, Accessibility, AppInfo, KeyPress};
use crate::debug_log;

#[tauri::command]
pub fn check_accessibility_permission() -> Result<bool, String> {
    let granted = ax::platform().check_permission();
    debug_log(&format!("[perm] check granted={granted}"));
    Ok(granted)
}

#[tauri::command]
pub fn request_accessibility_permission() -> Result<bool, String> {
    let granted = ax::platform().request_permission();
    debug_log(&format!("[perm] request granted={granted}"));
    Ok(granted)
}

#[tauri::command]
pub fn simulate_key_press(
    key: Option<String>,
    modifiers: Option<Vec<String>>,
) -> Result<bool, String> {
    let press = KeyPress {
        key,
        modifiers: modifiers.unwrap_or_default(),
        ..KeyPress::default()
    };
    Ok(ax::platform().simulate_key_press(&press))
}

#[tauri::command]
pub fn get_active_app_info() -> Result<AppInfo, String> {
    Ok(ax::platform().active_app_info())
}
