//! Field fixtures shared by the rule and validator tests.

use chrono::Utc;
use meta_core::entities::{FieldMetadata, FieldMetadataOption};
use meta_core::enums::FieldMetadataType;

/// `testName` / `Test name`, synced, as created by the metadata API.
pub fn text_field() -> FieldMetadata {
    let now = Utc::now();
    FieldMetadata {
        id: "fld-test".into(),
        object_metadata_id: "obj-listing".into(),
        field_type: FieldMetadataType::Text,
        name: "testName".into(),
        label: "Test name".into(),
        description: None,
        icon: None,
        is_label_synced_with_name: true,
        is_custom: true,
        is_active: true,
        is_nullable: true,
        options: None,
        default_value: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn option(value: &str, position: f64) -> FieldMetadataOption {
    FieldMetadataOption {
        id: None,
        label: value.to_string(),
        value: value.to_string(),
        color: "green".into(),
        position,
    }
}

/// A synced field of `field_type` with the given option values.
pub fn enum_field(field_type: FieldMetadataType, values: &[&str]) -> FieldMetadata {
    let options = values
        .iter()
        .zip(1u32..)
        .map(|(value, position)| option(value, f64::from(position)))
        .collect();
    FieldMetadata {
        field_type,
        options: Some(options),
        ..text_field()
    }
}
