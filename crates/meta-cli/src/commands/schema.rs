use std::fs;

use anyhow::Context;
use meta_schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `mfv schema [name] [--check file]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = flags.format.unwrap_or(OutputFormat::Json);
    let schemas = SchemaRegistry::new();

    let Some(name) = args.name.as_deref() else {
        return output(&schemas.list(), format);
    };

    let schema = schemas
        .get(name)
        .with_context(|| format!("unknown schema '{name}', run `mfv schema` to list names"))?;

    match args.check.as_deref() {
        None => output(schema, format),
        Some(path) => {
            let content =
                fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            let instance: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("{path} is not valid JSON"))?;
            schemas.validate(name, &instance)?;
            output(&serde_json::json!({ "schema": name, "valid": true }), format)
        }
    }
}
