use clap::Subcommand;

/// Object metadata commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ObjectCommands {
    /// Create an object.
    Create {
        #[arg(long)]
        name_singular: String,
        #[arg(long)]
        name_plural: String,
        #[arg(long)]
        label_singular: String,
        #[arg(long)]
        label_plural: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        /// Keep names derived from labels.
        #[arg(long)]
        label_synced: bool,
    },
    /// Delete an object and all of its fields.
    Delete { id: String },
    /// Get an object by ID.
    Get { id: String },
    /// List objects.
    List,
}
