//! Central schema registry for the public metadata payloads.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Named JSON Schemas for the metadata API payloads.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. A conversion failure is recorded as `null` and
/// surfaces as a `Generation` error when the schema is used.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).unwrap_or(serde_json::Value::Null),
        );
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entities ---
        register!(schemas, "object_metadata", meta_core::entities::ObjectMetadata);
        register!(schemas, "field_metadata", meta_core::entities::FieldMetadata);
        register!(
            schemas,
            "field_metadata_option",
            meta_core::entities::FieldMetadataOption
        );

        // --- Inputs ---
        register!(
            schemas,
            "field_metadata_update",
            meta_core::updates::FieldMetadataUpdate
        );
        register!(
            schemas,
            "create_object_input",
            meta_core::inputs::CreateObjectInput
        );
        register!(
            schemas,
            "create_field_input",
            meta_core::inputs::CreateFieldInput
        );
        register!(
            schemas,
            "update_field_input",
            meta_core::inputs::UpdateFieldInput
        );
        register!(
            schemas,
            "delete_object_input",
            meta_core::inputs::DeleteObjectInput
        );

        // --- Responses ---
        register!(
            schemas,
            "graphql_error",
            meta_core::responses::GraphqlErrorResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        if schema.is_null() {
            return Err(SchemaError::Generation(format!(
                "schema '{name}' could not be generated"
            )));
        }

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
