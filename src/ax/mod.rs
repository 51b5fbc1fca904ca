use serde::{Deserialize, Serialize};

/// The four-operation accessibility contract.
///
/// One variant exists per platform; callers obtain the build-selected
/// variant through [`platform()`] and never name one directly, so a real
/// backend can replace the constant-returning one without caller changes.
pub trait Accessibility {
    fn check_permission(&self) -> bool;
    fn request_permission(&self) -> bool;
    fn simulate_key_press(&self, press: &KeyPress) -> bool;
    fn active_app_info(&self) -> AppInfo;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub bundle_id: String,
    pub pid: i32,
}

/// Argument bag for `simulate_key_press`. The caller may send nothing,
/// a partial shape, or fields we have never heard of; unknown fields land
/// in `extra` instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPress {
    pub key: Option<String>,
    pub modifiers: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Capability implementation for the current build target.
pub fn platform() -> impl Accessibility {
    Unsupported
}

pub use unsupported::Unsupported;

mod unsupported;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_info_defaults_to_empty_record() {
        let info = AppInfo::default();
        assert_eq!(info.name, "");
        assert_eq!(info.bundle_id, "");
        assert_eq!(info.pid, 0);
    }

    #[test]
    fn app_info_wire_shape() {
        let value = serde_json::to_value(AppInfo::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "", "bundleId": "", "pid": 0 })
        );
    }

    #[test]
    fn key_press_accepts_empty_arguments() {
        let press: KeyPress = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(press.key.is_none());
        assert!(press.modifiers.is_empty());
        assert!(press.extra.is_empty());
    }

    #[test]
    fn key_press_accepts_unknown_fields() {
        let press: KeyPress = serde_json::from_value(serde_json::json!({
            "key": "A",
            "modifiers": ["cmd", "shift"],
            "repeat": 3,
            "bogus": { "nested": true }
        }))
        .unwrap();
        assert_eq!(press.key.as_deref(), Some("A"));
        assert_eq!(press.modifiers, vec!["cmd", "shift"]);
        assert_eq!(press.extra.len(), 2);
    }
}
