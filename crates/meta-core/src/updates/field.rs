//! Field metadata update payload and builder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{FieldMetadata, FieldMetadataOption};
use crate::serde_helpers::double_option;

/// Partial field metadata: the `updatePayload` of `updateOneField`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldMetadataUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub icon: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_label_synced_with_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldMetadataOption>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<serde_json::Value>")]
    pub default_value: Option<Option<serde_json::Value>>,
}

impl FieldMetadataUpdate {
    /// Whether the payload supplies `name`, `label`, or the sync flag.
    #[must_use]
    pub const fn touches_naming(&self) -> bool {
        self.name.is_some() || self.label.is_some() || self.is_label_synced_with_name.is_some()
    }

    /// Merge the payload over `current`, returning the resulting field.
    ///
    /// Identity and timestamps are carried over unchanged; bumping
    /// `updated_at` is the caller's decision.
    #[must_use]
    pub fn apply_to(&self, current: &FieldMetadata) -> FieldMetadata {
        let mut merged = current.clone();
        if let Some(ref name) = self.name {
            merged.name.clone_from(name);
        }
        if let Some(ref label) = self.label {
            merged.label.clone_from(label);
        }
        if let Some(ref description) = self.description {
            merged.description.clone_from(description);
        }
        if let Some(ref icon) = self.icon {
            merged.icon.clone_from(icon);
        }
        if let Some(synced) = self.is_label_synced_with_name {
            merged.is_label_synced_with_name = synced;
        }
        if let Some(active) = self.is_active {
            merged.is_active = active;
        }
        if let Some(nullable) = self.is_nullable {
            merged.is_nullable = nullable;
        }
        if let Some(ref options) = self.options {
            merged.options = Some(options.clone());
        }
        if let Some(ref default_value) = self.default_value {
            merged.default_value.clone_from(default_value);
        }
        merged
    }
}

pub struct FieldMetadataUpdateBuilder(FieldMetadataUpdate);

impl FieldMetadataUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FieldMetadataUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.0.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.0.icon = Some(icon);
        self
    }

    #[must_use]
    pub const fn label_synced_with_name(mut self, synced: bool) -> Self {
        self.0.is_label_synced_with_name = Some(synced);
        self
    }

    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.0.is_active = Some(active);
        self
    }

    #[must_use]
    pub const fn nullable(mut self, nullable: bool) -> Self {
        self.0.is_nullable = Some(nullable);
        self
    }

    #[must_use]
    pub fn options(mut self, options: Vec<FieldMetadataOption>) -> Self {
        self.0.options = Some(options);
        self
    }

    #[must_use]
    pub fn default_value(mut self, default_value: Option<serde_json::Value>) -> Self {
        self.0.default_value = Some(default_value);
        self
    }

    #[must_use]
    pub fn build(self) -> FieldMetadataUpdate {
        self.0
    }
}

impl Default for FieldMetadataUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
