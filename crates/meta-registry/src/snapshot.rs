//! JSON snapshot persistence for the registry.
//!
//! A snapshot is a versioned list of [`ObjectEntry`] values:
//!
//! ```json
//! { "version": 1, "objects": [ { "object": { ... }, "fields": [ ... ] } ] }
//! ```

use std::fs;
use std::path::Path;

use meta_validation::FieldMetadataValidator;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::RegistryError;
use crate::registry::{MetadataRegistry, ObjectEntry};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrySnapshot {
    pub version: u32,
    pub objects: Vec<ObjectEntry>,
}

impl MetadataRegistry {
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            version: SNAPSHOT_VERSION,
            objects: self.entries().cloned().collect(),
        }
    }

    pub fn from_snapshot(
        snapshot: RegistrySnapshot,
        validator: FieldMetadataValidator,
    ) -> Result<Self, RegistryError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RegistryError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(Self::from_entries(snapshot.objects, validator))
    }

    /// Load a registry from `path`. A missing file yields an empty registry.
    pub fn load(path: &Path, validator: FieldMetadataValidator) -> Result<Self, RegistryError> {
        if !path.exists() {
            debug!(path = %path.display(), "no snapshot found, starting empty");
            return Ok(Self::new(validator));
        }
        let content = fs::read_to_string(path)?;
        let snapshot: RegistrySnapshot = serde_json::from_str(&content)?;
        let registry = Self::from_snapshot(snapshot, validator)?;
        debug!(
            path = %path.display(),
            objects = registry.object_count(),
            fields = registry.field_count(),
            "loaded registry snapshot"
        );
        Ok(registry)
    }

    /// Write the registry to `path`, creating parent directories as needed.
    ///
    /// The snapshot is written to a temporary file next to `path` and renamed
    /// over it, so readers see either the old or the new snapshot in full.
    pub fn save(&self, path: &Path) -> Result<(), RegistryError> {
        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut staged, &self.snapshot())?;
        staged.as_file_mut().sync_all()?;
        staged.persist(path).map_err(|error| error.error)?;

        debug!(path = %path.display(), "saved registry snapshot");
        Ok(())
    }
}
