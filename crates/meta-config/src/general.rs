//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default location of the registry snapshot, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = ".metafield/registry.json";

fn default_snapshot_path() -> String {
    DEFAULT_SNAPSHOT_PATH.to_string()
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// JSON file the metadata registry is loaded from and saved to.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            pretty: default_pretty(),
        }
    }
}
