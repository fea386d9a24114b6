//! Create, update, and delete request payloads for the metadata API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::FieldMetadataOption;
use crate::enums::FieldMetadataType;
use crate::updates::FieldMetadataUpdate;

const fn default_true() -> bool {
    true
}

/// Payload of `createOneObject`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateObjectInput {
    pub name_singular: String,
    pub name_plural: String,
    pub label_singular: String,
    pub label_plural: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_label_synced_with_name: bool,
}

/// Payload of `createOneField`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateFieldInput {
    pub object_metadata_id: String,
    #[serde(rename = "type")]
    pub field_type: FieldMetadataType,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_label_synced_with_name: bool,
    #[serde(default = "default_true")]
    pub is_nullable: bool,
    #[serde(default)]
    pub options: Option<Vec<FieldMetadataOption>>,
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
}

/// Payload of `updateOneField`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFieldInput {
    pub id_to_update: String,
    pub update_payload: FieldMetadataUpdate,
}

/// Payload of `deleteOneObject`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteObjectInput {
    pub id_to_delete: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_field_defaults() {
        let input: CreateFieldInput = serde_json::from_value(json!({
            "objectMetadataId": "obj-1",
            "type": "TEXT",
            "name": "testName",
            "label": "Test name",
        }))
        .unwrap();
        assert!(!input.is_label_synced_with_name);
        assert!(input.is_nullable);
        assert!(input.options.is_none());
        assert!(input.default_value.is_none());
    }

    #[test]
    fn update_input_wire_names() {
        let input: UpdateFieldInput = serde_json::from_value(json!({
            "idToUpdate": "fld-1",
            "updatePayload": { "name": "newName", "isLabelSyncedWithName": true },
        }))
        .unwrap();
        assert_eq!(input.id_to_update, "fld-1");
        assert_eq!(input.update_payload.name.as_deref(), Some("newName"));
        assert_eq!(input.update_payload.is_label_synced_with_name, Some(true));
        assert!(input.update_payload.label.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let misspelled = serde_json::from_value::<UpdateFieldInput>(json!({
            "idToUpdate": "fld-1",
            "updatePayload": { "lable": "Renamed" },
        }));
        assert!(misspelled.is_err());

        let extra = serde_json::from_value::<DeleteObjectInput>(json!({
            "idToDelete": "obj-1",
            "cascade": true,
        }));
        assert!(extra.is_err());
    }
}
