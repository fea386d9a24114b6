//! Object and field metadata registry.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use meta_core::entities::{FieldMetadata, ObjectMetadata};
use meta_core::inputs::{CreateFieldInput, CreateObjectInput, UpdateFieldInput};
use meta_validation::{FieldMetadataValidator, ValidatedPatch, ValidationError, is_identifier};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::RegistryError;

/// An object together with its field definitions, in creation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectEntry {
    pub object: ObjectMetadata,
    pub fields: Vec<FieldMetadata>,
}

/// Mapping from object id to its ordered field definitions.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    objects: BTreeMap<String, ObjectEntry>,
    /// Field id -> owning object id.
    field_owners: HashMap<String, String>,
    validator: FieldMetadataValidator,
}

impl MetadataRegistry {
    #[must_use]
    pub fn new(validator: FieldMetadataValidator) -> Self {
        Self {
            objects: BTreeMap::new(),
            field_owners: HashMap::new(),
            validator,
        }
    }

    /// Rebuild a registry from stored entries.
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = ObjectEntry>,
        validator: FieldMetadataValidator,
    ) -> Self {
        let mut registry = Self::new(validator);
        for entry in entries {
            for field in &entry.fields {
                registry
                    .field_owners
                    .insert(field.id.clone(), entry.object.id.clone());
            }
            registry.objects.insert(entry.object.id.clone(), entry);
        }
        registry
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &ObjectEntry> {
        self.objects.values()
    }

    #[must_use]
    pub const fn validator(&self) -> &FieldMetadataValidator {
        &self.validator
    }

    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    pub fn create_object(&mut self, input: CreateObjectInput) -> Result<ObjectMetadata, RegistryError> {
        let invalid: Vec<_> = [&input.name_singular, &input.name_plural]
            .into_iter()
            .filter(|name| !is_identifier(name))
            .map(|name| ValidationError::InvalidName { name: name.clone() })
            .collect();
        if !invalid.is_empty() {
            warn!(name = %input.name_singular, "rejected object with invalid names");
            return Err(RegistryError::Invalid(invalid));
        }

        for name in [&input.name_singular, &input.name_plural] {
            let taken = self.objects.values().any(|entry| {
                entry.object.name_singular == *name || entry.object.name_plural == *name
            });
            if taken {
                return Err(RegistryError::DuplicateName {
                    entity: "Object",
                    name: name.clone(),
                });
            }
        }

        let now = Utc::now();
        let object = ObjectMetadata {
            id: Uuid::new_v4().to_string(),
            name_singular: input.name_singular,
            name_plural: input.name_plural,
            label_singular: input.label_singular,
            label_plural: input.label_plural,
            description: input.description,
            icon: input.icon,
            is_label_synced_with_name: input.is_label_synced_with_name,
            is_custom: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        info!(object = %object.id, name = %object.name_singular, "created object metadata");
        self.objects.insert(
            object.id.clone(),
            ObjectEntry {
                object: object.clone(),
                fields: Vec::new(),
            },
        );
        Ok(object)
    }

    pub fn get_object(&self, id: &str) -> Result<&ObjectMetadata, RegistryError> {
        self.objects
            .get(id)
            .map(|entry| &entry.object)
            .ok_or_else(|| RegistryError::ObjectNotFound(id.to_string()))
    }

    /// All objects, ordered by singular name.
    #[must_use]
    pub fn list_objects(&self) -> Vec<&ObjectMetadata> {
        let mut objects: Vec<_> = self.objects.values().map(|entry| &entry.object).collect();
        objects.sort_by(|a, b| a.name_singular.cmp(&b.name_singular));
        objects
    }

    /// Delete an object and every field it owns.
    pub fn delete_object(&mut self, id: &str) -> Result<ObjectMetadata, RegistryError> {
        let entry = self
            .objects
            .remove(id)
            .ok_or_else(|| RegistryError::ObjectNotFound(id.to_string()))?;
        for field in &entry.fields {
            self.field_owners.remove(&field.id);
        }
        info!(
            object = %entry.object.id,
            fields = entry.fields.len(),
            "deleted object metadata and its fields"
        );
        Ok(entry.object)
    }

    // -----------------------------------------------------------------------
    // Fields
    // -----------------------------------------------------------------------

    pub fn create_field(&mut self, input: CreateFieldInput) -> Result<FieldMetadata, RegistryError> {
        let entry = self
            .objects
            .get_mut(&input.object_metadata_id)
            .ok_or_else(|| RegistryError::ObjectNotFound(input.object_metadata_id.clone()))?;

        if entry.fields.iter().any(|field| field.name == input.name) {
            return Err(RegistryError::DuplicateName {
                entity: "Field",
                name: input.name,
            });
        }

        let now = Utc::now();
        let field = FieldMetadata {
            id: Uuid::new_v4().to_string(),
            object_metadata_id: input.object_metadata_id,
            field_type: input.field_type,
            name: input.name,
            label: input.label,
            description: input.description,
            icon: input.icon,
            is_label_synced_with_name: input.is_label_synced_with_name,
            is_custom: true,
            is_active: true,
            is_nullable: input.is_nullable,
            options: input.options,
            default_value: input.default_value,
            created_at: now,
            updated_at: now,
        };

        if let Err(error) = self.validator.validate_create(&field) {
            warn!(object = %field.object_metadata_id, name = %field.name, %error, "rejected field creation");
            return Err(error.into());
        }

        info!(
            object = %field.object_metadata_id,
            field = %field.id,
            field_type = %field.field_type,
            "created field metadata"
        );
        self.field_owners
            .insert(field.id.clone(), field.object_metadata_id.clone());
        entry.fields.push(field.clone());
        Ok(field)
    }

    pub fn get_field(&self, id: &str) -> Result<&FieldMetadata, RegistryError> {
        let (entry, index) = self.locate_field(id)?;
        Ok(&entry.fields[index])
    }

    /// Fields of an object in creation order.
    pub fn fields_of(&self, object_id: &str) -> Result<&[FieldMetadata], RegistryError> {
        self.objects
            .get(object_id)
            .map(|entry| entry.fields.as_slice())
            .ok_or_else(|| RegistryError::ObjectNotFound(object_id.to_string()))
    }

    /// Validate an update without storing it.
    pub fn check_field_update(&self, input: &UpdateFieldInput) -> Result<ValidatedPatch, RegistryError> {
        let (entry, index) = self.locate_field(&input.id_to_update)?;
        let current = &entry.fields[index];

        let validated = match self.validator.validate_update(current, &input.update_payload) {
            Ok(validated) => validated,
            Err(_) => {
                let errors = self.validator.violations(current, &input.update_payload);
                warn!(
                    field = %current.id,
                    failures = errors.len(),
                    "rejected field metadata update"
                );
                return Err(RegistryError::Invalid(errors));
            }
        };

        if validated.field.name != current.name
            && entry.fields.iter().any(|sibling| sibling.name == validated.field.name)
        {
            return Err(RegistryError::DuplicateName {
                entity: "Field",
                name: validated.field.name,
            });
        }
        Ok(validated)
    }

    /// Validate and store an update, returning the resulting field.
    ///
    /// `updated_at` only moves when the update changes something, so
    /// re-applying an accepted update is a no-op.
    pub fn update_field(&mut self, input: &UpdateFieldInput) -> Result<FieldMetadata, RegistryError> {
        let validated = self.check_field_update(input)?;

        let entry = self
            .field_owners
            .get(&input.id_to_update)
            .and_then(|object_id| self.objects.get_mut(object_id))
            .ok_or_else(|| RegistryError::FieldNotFound(input.id_to_update.clone()))?;
        let slot = entry
            .fields
            .iter_mut()
            .find(|field| field.id == input.id_to_update)
            .ok_or_else(|| RegistryError::FieldNotFound(input.id_to_update.clone()))?;

        if !validated.changes(slot) {
            debug!(field = %slot.id, "update changes nothing");
            return Ok(slot.clone());
        }

        let mut field = validated.field;
        field.updated_at = Utc::now();
        info!(field = %field.id, name = %field.name, "updated field metadata");
        *slot = field.clone();
        Ok(field)
    }

    /// Total number of fields across all objects.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.field_owners.len()
    }

    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn locate_field(&self, id: &str) -> Result<(&ObjectEntry, usize), RegistryError> {
        let not_found = || RegistryError::FieldNotFound(id.to_string());
        let entry = self
            .field_owners
            .get(id)
            .and_then(|object_id| self.objects.get(object_id))
            .ok_or_else(not_found)?;
        let index = entry
            .fields
            .iter()
            .position(|field| field.id == id)
            .ok_or_else(not_found)?;
        Ok((entry, index))
    }
}
