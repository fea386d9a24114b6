//! The field-metadata validator.

use meta_core::entities::FieldMetadata;
use meta_core::updates::FieldMetadataUpdate;
use tracing::debug;

use crate::error::ValidationError;
use crate::rules::RULES;
use crate::settings::ValidationSettings;

/// An update that passed every rule.
///
/// `update` is the normalized payload (a derived `name` filled in) and `field`
/// is the stored field with that payload merged over it. Nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPatch {
    pub update: FieldMetadataUpdate,
    pub field: FieldMetadata,
}

impl ValidatedPatch {
    /// Whether applying the patch changes any attribute of `current`.
    #[must_use]
    pub fn changes(&self, current: &FieldMetadata) -> bool {
        self.field != *current
    }
}

/// Stateless validator for field-metadata create and update requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMetadataValidator {
    settings: ValidationSettings,
}

impl FieldMetadataValidator {
    #[must_use]
    pub const fn new(settings: ValidationSettings) -> Self {
        Self { settings }
    }

    /// Validate `update` against the stored `current` field.
    ///
    /// Rules run in fixed order and the first failure is returned.
    ///
    /// # Errors
    ///
    /// `NameLabelSyncMismatch` or `DefaultValueNotInOptions`.
    pub fn validate_update(
        &self,
        current: &FieldMetadata,
        update: &FieldMetadataUpdate,
    ) -> Result<ValidatedPatch, ValidationError> {
        let mut normalized = update.clone();
        for (rule_name, rule) in RULES {
            debug!(field = %current.id, rule = rule_name, "applying rule");
            rule(current, &mut normalized, &self.settings)?;
        }

        let field = normalized.apply_to(current);
        Ok(ValidatedPatch {
            update: normalized,
            field,
        })
    }

    /// Run every rule and collect all failures, in rule order.
    ///
    /// Rules share one normalized copy of the update, as in
    /// [`Self::validate_update`], but a failure does not stop later rules. A
    /// failing rule leaves the copy as it found it.
    #[must_use]
    pub fn violations(
        &self,
        current: &FieldMetadata,
        update: &FieldMetadataUpdate,
    ) -> Vec<ValidationError> {
        let mut normalized = update.clone();
        RULES
            .iter()
            .filter_map(|(_, rule)| rule(current, &mut normalized, &self.settings).err())
            .collect()
    }

    /// Validate a field about to be created, treating every naming and
    /// option attribute as supplied.
    ///
    /// # Errors
    ///
    /// Same kinds as [`Self::validate_update`].
    pub fn validate_create(&self, field: &FieldMetadata) -> Result<(), ValidationError> {
        let as_update = FieldMetadataUpdate {
            name: Some(field.name.clone()),
            label: Some(field.label.clone()),
            is_label_synced_with_name: Some(field.is_label_synced_with_name),
            options: field.options.clone(),
            default_value: Some(field.default_value.clone()),
            ..FieldMetadataUpdate::default()
        };
        self.validate_update(field, &as_update).map(|_| ())
    }
}
