//! Validator behaviour switches.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationSettings {
    /// When a synced field's label changes without a `name`, derive the name
    /// from the new label. When false, the stored name must already match the
    /// new label and the update is rejected otherwise.
    #[serde(default = "default_true")]
    pub derive_name_from_label: bool,
}

impl ValidationSettings {
    /// Reject label-only updates whose stored name no longer matches.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            derive_name_from_label: false,
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            derive_name_from_label: default_true(),
        }
    }
}
