use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FieldMetadataOption;
use crate::enums::FieldMetadataType;

/// A field definition on an [`ObjectMetadata`](super::ObjectMetadata).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    pub id: String,
    pub object_metadata_id: String,
    #[serde(rename = "type")]
    pub field_type: FieldMetadataType,
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_label_synced_with_name: bool,
    pub is_custom: bool,
    pub is_active: bool,
    pub is_nullable: bool,
    /// Ordered option set; only meaningful for enumerated kinds.
    pub options: Option<Vec<FieldMetadataOption>>,
    /// Column default. Enumerated kinds store single-quoted literals, e.g. `"'OPTION_1'"`.
    pub default_value: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FieldMetadata {
    /// Option values in declaration order. Empty when the field has no options.
    pub fn option_values(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .flatten()
            .map(|option| option.value.as_str())
    }

    /// The default value, treating JSON `null` as absent.
    #[must_use]
    pub fn effective_default(&self) -> Option<&serde_json::Value> {
        self.default_value.as_ref().filter(|value| !value.is_null())
    }
}
