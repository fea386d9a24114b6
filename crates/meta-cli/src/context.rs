use std::path::PathBuf;

use anyhow::Context;
use meta_config::MetaConfig;
use meta_registry::MetadataRegistry;
use meta_validation::{FieldMetadataValidator, ValidationSettings};
use tracing::debug;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::write_lock::{self, WriteLockGuard};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub registry: MetadataRegistry,
    pub snapshot_path: PathBuf,
    pub format: OutputFormat,
    /// Held until the context drops when the command writes the snapshot.
    pub write_lock: Option<WriteLockGuard>,
}

impl AppContext {
    /// Load the registry snapshot named by `--snapshot` or `general.snapshot_path`.
    ///
    /// With `exclusive`, the snapshot's write lock is taken before loading so
    /// the later [`Self::persist`] cannot overwrite a concurrent writer.
    pub fn init(config: &MetaConfig, flags: &GlobalFlags, exclusive: bool) -> anyhow::Result<Self> {
        let snapshot_path = flags
            .snapshot
            .as_ref()
            .map_or_else(|| PathBuf::from(&config.general.snapshot_path), PathBuf::from);

        let write_lock = if exclusive {
            Some(write_lock::acquire_for_snapshot(&snapshot_path)?)
        } else {
            None
        };

        let registry = MetadataRegistry::load(&snapshot_path, validator_for(config))
            .with_context(|| format!("failed to load registry from {}", snapshot_path.display()))?;

        let format = resolve_format(flags, config);
        debug!(
            snapshot = %snapshot_path.display(),
            derive_name_from_label = config.validation.derive_name_from_label,
            exclusive,
            "initialized context"
        );

        Ok(Self {
            registry,
            snapshot_path,
            format,
            write_lock,
        })
    }

    /// Write the registry back to its snapshot file.
    pub fn persist(&self) -> anyhow::Result<()> {
        if self.write_lock.is_none() {
            tracing::warn!(
                snapshot = %self.snapshot_path.display(),
                "saving snapshot without holding its write lock"
            );
        }
        self.registry
            .save(&self.snapshot_path)
            .with_context(|| format!("failed to save registry to {}", self.snapshot_path.display()))
    }

    pub fn validator(&self) -> FieldMetadataValidator {
        *self.registry.validator()
    }
}

fn validator_for(config: &MetaConfig) -> FieldMetadataValidator {
    FieldMetadataValidator::new(ValidationSettings {
        derive_name_from_label: config.validation.derive_name_from_label,
    })
}

/// `--format` wins; otherwise `general.pretty` picks between json and raw.
pub fn resolve_format(flags: &GlobalFlags, config: &MetaConfig) -> OutputFormat {
    flags.format.unwrap_or(if config.general.pretty {
        OutputFormat::Json
    } else {
        OutputFormat::Raw
    })
}
