use serde::{Deserialize, Serialize};

/// Per-user feature flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            dark_mode: false,
            notifications: true,
        }
    }
}

/// Partial update to a preference set. Keys outside the set are dropped
/// during deserialization, so only known preferences can change.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PreferencesPatch {
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
}

impl Preferences {
    /// Apply the fields present in the patch, leaving the rest untouched
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
    }
}
