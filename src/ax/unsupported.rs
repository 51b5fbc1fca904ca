use super::{Accessibility, AppInfo, KeyPress};

/// Constant-returning variant for platforms without an accessibility
/// backend. Stateless and zero-sized; every answer is the fixed
/// negative/empty value and no input is consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl Accessibility for Unsupported {
    fn check_permission(&self) -> bool {
        false
    }

    fn request_permission(&self) -> bool {
        // Nothing to prompt for; requesting is a no-op here.
        false
    }

    fn simulate_key_press(&self, _press: &KeyPress) -> bool {
        false
    }

    fn active_app_info(&self) -> AppInfo {
        AppInfo::default()
    }
}
