//! Stored names must be identifiers.

use meta_core::entities::FieldMetadata;
use meta_core::updates::FieldMetadataUpdate;

use crate::canonical::is_identifier;
use crate::error::ValidationError;
use crate::settings::ValidationSettings;

/// Reject an update whose `name` (supplied or derived by an earlier rule) is
/// not an identifier. Updates that leave the name alone pass.
pub fn check(
    _current: &FieldMetadata,
    update: &mut FieldMetadataUpdate,
    _settings: &ValidationSettings,
) -> Result<(), ValidationError> {
    match update.name.as_deref() {
        Some(name) if !is_identifier(name) => Err(ValidationError::InvalidName {
            name: name.to_string(),
        }),
        _ => Ok(()),
    }
}
