use std::fs;

use anyhow::Context;
use meta_core::entities::{FieldMetadata, FieldMetadataOption};
use meta_core::errors::CoreError;
use meta_core::inputs::{CreateFieldInput, UpdateFieldInput};
use meta_core::responses::{GraphqlError, GraphqlErrorResponse, ToGraphqlError};
use meta_core::updates::FieldMetadataUpdate;
use meta_schema::SchemaRegistry;
use serde_json::Value;

use crate::cli::subcommands::FieldCreateArgs;
use crate::context::AppContext;
use crate::output::{output, reject};

/// Handle `mfv field create`.
pub fn create(ctx: &mut AppContext, args: FieldCreateArgs) -> anyhow::Result<()> {
    let input = match create_input(args) {
        Ok(input) => input,
        Err(error) => {
            let body: GraphqlErrorResponse =
                std::iter::once(GraphqlError::user_input(error.to_string())).collect();
            return reject(&body, ctx.format);
        }
    };
    match ctx.registry.create_field(input) {
        Ok(field) => {
            ctx.persist()?;
            output(&field, ctx.format)
        }
        Err(error) => reject(&error.to_graphql_errors(), ctx.format),
    }
}

/// Handle `mfv field update`.
pub fn update(
    ctx: &mut AppContext,
    id: &str,
    payload: Option<&str>,
    payload_file: Option<&str>,
) -> anyhow::Result<()> {
    let raw = match (payload, payload_file) {
        (Some(inline), _) => inline.to_string(),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        (None, None) => anyhow::bail!("one of --payload or --payload-file is required"),
    };

    let update_payload = match parse_update(&raw) {
        Ok(update) => update,
        Err(message) => {
            let body: GraphqlErrorResponse =
                std::iter::once(GraphqlError::user_input(message)).collect();
            return reject(&body, ctx.format);
        }
    };

    let input = UpdateFieldInput {
        id_to_update: id.to_string(),
        update_payload,
    };
    match ctx.registry.update_field(&input) {
        Ok(field) => {
            ctx.persist()?;
            output(&field, ctx.format)
        }
        Err(error) => reject(&error.to_graphql_errors(), ctx.format),
    }
}

/// Handle `mfv field get`.
pub fn get(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    match ctx.registry.get_field(id) {
        Ok(field) => output(field, ctx.format),
        Err(error) => reject(&error.to_graphql_errors(), ctx.format),
    }
}

/// Handle `mfv field list`.
pub fn list(ctx: &AppContext, object_id: &str) -> anyhow::Result<()> {
    match ctx.registry.fields_of(object_id) {
        Ok(fields) => output(&fields, ctx.format),
        Err(error) => reject(&error.to_graphql_errors(), ctx.format),
    }
}

/// Handle `mfv field validate`: run the validator on files, persist nothing.
///
/// Prints the merged field on success, or one error entry per failed rule.
pub fn validate(ctx: &AppContext, current_path: &str, patch_path: &str) -> anyhow::Result<()> {
    let content = fs::read_to_string(current_path)
        .with_context(|| format!("failed to read {current_path}"))?;
    let current: FieldMetadata = serde_json::from_str(&content)
        .with_context(|| format!("{current_path} is not a field metadata document"))?;

    let raw = fs::read_to_string(patch_path)
        .with_context(|| format!("failed to read {patch_path}"))?;
    let update = parse_update(&raw).map_err(|message| anyhow::anyhow!(message))?;

    let validator = ctx.validator();
    let violations = validator.violations(&current, &update);
    if !violations.is_empty() {
        let body: GraphqlErrorResponse = violations
            .iter()
            .map(ToGraphqlError::to_graphql_error)
            .collect();
        return reject(&body, ctx.format);
    }

    let patch = validator.validate_update(&current, &update)?;
    output(&patch.field, ctx.format)
}

/// Options keep their command-line order, positioned from 1.
fn create_input(args: FieldCreateArgs) -> Result<CreateFieldInput, CoreError> {
    let options = if args.options.is_empty() {
        None
    } else {
        let options: Vec<FieldMetadataOption> = (1_u32..)
            .zip(args.options)
            .map(|(position, mut option)| {
                option.position = f64::from(position);
                option
            })
            .collect();
        FieldMetadataOption::check_unique_values(&options)?;
        Some(options)
    };

    Ok(CreateFieldInput {
        object_metadata_id: args.object,
        field_type: args.field_type,
        name: args.name,
        label: args.label,
        description: args.description,
        icon: args.icon,
        is_label_synced_with_name: args.label_synced,
        is_nullable: !args.not_nullable,
        options,
        default_value: args.default_value.as_deref().map(parse_default_value),
    })
}

/// JSON if it parses, else the text as a string literal (`'OPTION_1'`).
fn parse_default_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse and schema-check an `updatePayload` document.
fn parse_update(raw: &str) -> Result<FieldMetadataUpdate, String> {
    let value: Value =
        serde_json::from_str(raw).map_err(|error| format!("payload is not valid JSON: {error}"))?;
    SchemaRegistry::new()
        .validate("field_metadata_update", &value)
        .map_err(|error| error.to_string())?;
    serde_json::from_value(value).map_err(|error| format!("invalid update payload: {error}"))
}
