//! Name/label synchronization.

use meta_core::entities::FieldMetadata;
use meta_core::updates::FieldMetadataUpdate;
use tracing::debug;

use crate::canonical::compute_name_from_label;
use crate::error::ValidationError;
use crate::settings::ValidationSettings;

/// Enforce `name == compute_name_from_label(label)` while sync is in effect.
///
/// Only updates that supply `name`, `label`, or the sync flag are checked.
/// A label-only update gets its derived name written into `update` unless
/// `settings.derive_name_from_label` is off.
pub fn check(
    current: &FieldMetadata,
    update: &mut FieldMetadataUpdate,
    settings: &ValidationSettings,
) -> Result<(), ValidationError> {
    let synced = update
        .is_label_synced_with_name
        .unwrap_or(current.is_label_synced_with_name);
    if !synced || !update.touches_naming() {
        return Ok(());
    }

    let label = update.label.as_deref().unwrap_or(&current.label);
    let expected = compute_name_from_label(label);

    match (update.name.as_deref(), update.label.is_some()) {
        (Some(name), _) if name == expected => Ok(()),
        (Some(name), _) => Err(mismatch(expected, name)),
        (None, true) if settings.derive_name_from_label => {
            if current.name != expected {
                debug!(field = %current.id, name = %expected, "deriving name from label");
                update.name = Some(expected);
            }
            Ok(())
        }
        (None, _) if current.name == expected => Ok(()),
        (None, _) => Err(mismatch(expected, &current.name)),
    }
}

fn mismatch(expected: String, actual: &str) -> ValidationError {
    ValidationError::NameLabelSyncMismatch {
        expected,
        actual: actual.to_string(),
    }
}
