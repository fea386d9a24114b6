use clap::{Args, Subcommand};

use crate::cli::subcommands::{FieldCommands, ObjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Object metadata.
    Object {
        #[command(subcommand)]
        action: ObjectCommands,
    },
    /// Field metadata.
    Field {
        #[command(subcommand)]
        action: FieldCommands,
    },
    /// List, print, or check against JSON Schemas of the API payloads.
    Schema(SchemaArgs),
}

impl Commands {
    /// Whether the command saves the registry snapshot.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Object {
                action: ObjectCommands::Create { .. } | ObjectCommands::Delete { .. }
            } | Self::Field {
                action: FieldCommands::Create(_) | FieldCommands::Update(_)
            }
        )
    }
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (omit to list available names)
    pub name: Option<String>,

    /// Validate this JSON file against the named schema instead of printing it
    #[arg(long, requires = "name")]
    pub check: Option<String>,
}
