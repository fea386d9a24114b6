//! Field-metadata validation switches.

use serde::{Deserialize, Serialize};

const fn default_derive_name() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Derive a synced field's name from its label when an update supplies
    /// only the label. Off means such updates must keep the stored name valid.
    #[serde(default = "default_derive_name")]
    pub derive_name_from_label: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            derive_name_from_label: default_derive_name(),
        }
    }
}
