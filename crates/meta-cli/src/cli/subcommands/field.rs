use clap::{ArgGroup, Args, Subcommand};
use meta_core::entities::FieldMetadataOption;
use meta_core::enums::FieldMetadataType;

/// Field metadata commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FieldCommands {
    /// Create a field on an object.
    Create(FieldCreateArgs),
    /// Update a field with a JSON `updatePayload`.
    Update(FieldUpdateArgs),
    /// Get a field by ID.
    Get { id: String },
    /// List the fields of an object.
    List {
        #[arg(long)]
        object: String,
    },
    /// Validate a patch against a stored field without touching the registry.
    Validate {
        /// JSON file holding the current field metadata
        #[arg(long)]
        current: String,
        /// JSON file holding the update payload
        #[arg(long)]
        patch: String,
    },
}

#[derive(Clone, Debug, Args)]
#[command(group(
    ArgGroup::new("payload_source")
        .required(true)
        .args(["payload", "payload_file"])
))]
pub struct FieldUpdateArgs {
    pub id: String,
    /// Inline JSON payload, e.g. '{"label":"New name"}'
    #[arg(long)]
    pub payload: Option<String>,
    /// Read the JSON payload from a file
    #[arg(long)]
    pub payload_file: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FieldCreateArgs {
    /// Owning object ID
    #[arg(long)]
    pub object: String,
    /// Field kind, e.g. text, select, multi-select
    #[arg(long = "type")]
    pub field_type: FieldMetadataType,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub label: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    /// Keep the name derived from the label.
    #[arg(long)]
    pub label_synced: bool,
    /// Reject null values.
    #[arg(long)]
    pub not_nullable: bool,
    /// Option as VALUE[=Label][@color]; repeat in display order
    #[arg(long = "option")]
    pub options: Vec<FieldMetadataOption>,
    /// Default value: JSON, or a bare literal such as 'OPTION_1'
    #[arg(long)]
    pub default_value: Option<String>,
}
