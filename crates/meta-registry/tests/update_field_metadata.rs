//! `updateOneField` behaviour against a registry holding a `listing` object.

use meta_core::entities::{FieldMetadata, FieldMetadataOption};
use meta_core::enums::{ErrorCode, FieldMetadataType};
use meta_core::inputs::{CreateFieldInput, CreateObjectInput, UpdateFieldInput};
use meta_core::updates::{FieldMetadataUpdate, FieldMetadataUpdateBuilder};
use meta_registry::{MetadataRegistry, RegistryError};
use meta_validation::{FieldMetadataValidator, ValidationSettings};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;

const LISTING_NAME_SINGULAR: &str = "listing";
const LISTING_NAME_PLURAL: &str = "listings";

struct Listing {
    registry: MetadataRegistry,
    object_id: String,
}

fn listing_with(validator: FieldMetadataValidator) -> Listing {
    let mut registry = MetadataRegistry::new(validator);
    let object = registry
        .create_object(CreateObjectInput {
            name_singular: LISTING_NAME_SINGULAR.into(),
            name_plural: LISTING_NAME_PLURAL.into(),
            label_singular: LISTING_NAME_SINGULAR.into(),
            label_plural: LISTING_NAME_PLURAL.into(),
            description: None,
            icon: Some("IconBuildingSkyscraper".into()),
            is_label_synced_with_name: true,
        })
        .expect("object created");
    Listing {
        registry,
        object_id: object.id,
    }
}

#[fixture]
fn listing() -> Listing {
    listing_with(FieldMetadataValidator::default())
}

fn create_test_field(listing: &mut Listing, field_type: FieldMetadataType) -> FieldMetadata {
    let options = field_type.is_enum().then(|| {
        vec![FieldMetadataOption {
            id: None,
            label: "Option 1".into(),
            value: "OPTION_1".into(),
            color: "green".into(),
            position: 1.0,
        }]
    });
    listing
        .registry
        .create_field(CreateFieldInput {
            object_metadata_id: listing.object_id.clone(),
            field_type,
            name: "testName".into(),
            label: "Test name".into(),
            description: None,
            icon: None,
            is_label_synced_with_name: true,
            is_nullable: true,
            options,
            default_value: None,
        })
        .expect("field created")
}

fn update(
    listing: &mut Listing,
    id: &str,
    payload: FieldMetadataUpdate,
) -> Result<FieldMetadata, RegistryError> {
    listing.registry.update_field(&UpdateFieldInput {
        id_to_update: id.to_string(),
        update_payload: payload,
    })
}

// ---------------------------------------------------------------------------
// name/label sync
// ---------------------------------------------------------------------------

#[rstest]
fn updates_name_and_label_when_synced_correctly(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    let updated = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new()
            .name("newName")
            .label("New name")
            .label_synced_with_name(true)
            .build(),
    )
    .expect("update accepted");

    assert_eq!(updated.name, "newName");
    assert_eq!(updated.label, "New name");
    assert!(updated.is_label_synced_with_name);
}

#[rstest]
fn updates_unsynced_name_when_sync_is_turned_off(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    let updated = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new()
            .name("differentName")
            .label("New name")
            .label_synced_with_name(false)
            .build(),
    )
    .expect("update accepted");

    assert_eq!(updated.name, "differentName");
    assert!(!updated.is_label_synced_with_name);
}

#[rstest]
fn rejects_name_not_synced_with_label(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    let err = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new()
            .name("newName")
            .label_synced_with_name(true)
            .build(),
    )
    .unwrap_err();

    let body = err.to_graphql_errors();
    assert_eq!(body.errors.len(), 1);
    assert_eq!(
        body.errors[0].message,
        "Name is not synced with label. Expected name: \"testName\", got newName"
    );
    assert_eq!(
        listing.registry.get_field(&field.id).unwrap(),
        &field,
        "rejected update must leave the stored field untouched"
    );
}

#[rstest]
fn label_only_update_renames_synced_field(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    let updated = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new().label("Asking price").build(),
    )
    .expect("update accepted");

    assert_eq!(updated.name, "askingPrice");
}

#[test]
fn strict_mode_rejects_label_only_rename() {
    let mut listing = listing_with(FieldMetadataValidator::new(ValidationSettings::strict()));
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    let err = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new().label("Asking price").build(),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Name is not synced with label. Expected name: \"askingPrice\", got testName"
    );
}

#[rstest]
fn label_without_alphanumerics_is_rejected(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    let err = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new().label("!!!").build(),
    )
    .unwrap_err();

    let body = err.to_graphql_errors();
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].message, "Name \"\" is not a valid identifier");
    assert_eq!(body.errors[0].code(), ErrorCode::BadUserInput);
    assert_eq!(listing.registry.get_field(&field.id).unwrap().name, "testName");
}

#[rstest]
fn unsynced_rename_must_stay_an_identifier(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    let err = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new()
            .name("has space!")
            .label_synced_with_name(false)
            .build(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Name \"has space!\" is not a valid identifier");
}

// ---------------------------------------------------------------------------
// enum default value
// ---------------------------------------------------------------------------

#[rstest]
fn rejects_default_value_not_in_options(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Select);

    let err = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new()
            .default_value(Some(json!("'OPTION_2'")))
            .build(),
    )
    .unwrap_err();

    assert_eq!(
        serde_json::to_value(err.to_graphql_errors()).unwrap(),
        json!({
            "errors": [
                {
                    "extensions": {
                        "code": "BAD_USER_INPUT",
                        "userFriendlyMessage": "Default value \"'OPTION_2'\" must be one of the option values",
                    },
                    "message": "Default value \"'OPTION_2'\" must be one of the option values",
                    "name": "UserInputError",
                },
            ],
        })
    );
}

#[rstest]
#[case(FieldMetadataType::Select, json!("'OPTION_1'"))]
#[case(FieldMetadataType::Rating, json!("'OPTION_1'"))]
#[case(FieldMetadataType::MultiSelect, json!(["'OPTION_1'"]))]
fn accepts_default_value_in_options(
    mut listing: Listing,
    #[case] field_type: FieldMetadataType,
    #[case] default: serde_json::Value,
) {
    let field = create_test_field(&mut listing, field_type);

    let updated = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new()
            .default_value(Some(default.clone()))
            .build(),
    )
    .expect("update accepted");

    assert_eq!(updated.default_value, Some(default));
}

#[rstest]
fn reports_every_failed_rule(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Select);

    let err = update(
        &mut listing,
        &field.id,
        FieldMetadataUpdateBuilder::new()
            .name("wrongName")
            .default_value(Some(json!("'OPTION_9'")))
            .build(),
    )
    .unwrap_err();

    let body = err.to_graphql_errors();
    assert_eq!(body.errors.len(), 2);
    assert!(body.errors.iter().all(|e| e.code() == ErrorCode::BadUserInput));
}

// ---------------------------------------------------------------------------
// lifecycle
// ---------------------------------------------------------------------------

#[rstest]
fn reapplying_an_accepted_update_changes_nothing(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Select);
    let payload = FieldMetadataUpdateBuilder::new()
        .label("Deal stage")
        .default_value(Some(json!("'OPTION_1'")))
        .build();

    let first = update(&mut listing, &field.id, payload.clone()).expect("first update");
    let second = update(&mut listing, &field.id, payload).expect("second update");

    assert_eq!(second, first);
    assert_eq!(second.updated_at, first.updated_at);
}

#[rstest]
fn unknown_field_is_not_found(mut listing: Listing) {
    let err = update(
        &mut listing,
        "00000000-0000-0000-0000-000000000000",
        FieldMetadataUpdate::default(),
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
fn deleting_object_removes_its_fields(mut listing: Listing) {
    let field = create_test_field(&mut listing, FieldMetadataType::Text);

    listing
        .registry
        .delete_object(&listing.object_id)
        .expect("object deleted");

    assert!(matches!(
        listing.registry.get_field(&field.id),
        Err(RegistryError::FieldNotFound(_))
    ));
}
