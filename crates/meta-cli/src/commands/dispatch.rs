use crate::cli::Commands;
use crate::cli::subcommands::{FieldCommands, ObjectCommands};
use crate::commands;
use crate::context::AppContext;

/// Route a registry-backed command to its handler.
///
/// `schema` never reaches here; it runs before config and snapshot loading.
pub fn dispatch(command: Commands, ctx: &mut AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Object { action } => match action {
            ObjectCommands::Create {
                name_singular,
                name_plural,
                label_singular,
                label_plural,
                description,
                icon,
                label_synced,
            } => commands::object::create(
                ctx,
                meta_core::inputs::CreateObjectInput {
                    name_singular,
                    name_plural,
                    label_singular,
                    label_plural,
                    description,
                    icon,
                    is_label_synced_with_name: label_synced,
                },
            ),
            ObjectCommands::Delete { id } => commands::object::delete(
                ctx,
                &meta_core::inputs::DeleteObjectInput { id_to_delete: id },
            ),
            ObjectCommands::Get { id } => commands::object::get(ctx, &id),
            ObjectCommands::List => commands::object::list(ctx),
        },
        Commands::Field { action } => match action {
            FieldCommands::Create(args) => commands::field::create(ctx, args),
            FieldCommands::Update(args) => commands::field::update(
                ctx,
                &args.id,
                args.payload.as_deref(),
                args.payload_file.as_deref(),
            ),
            FieldCommands::Get { id } => commands::field::get(ctx, &id),
            FieldCommands::List { object } => commands::field::list(ctx, &object),
            FieldCommands::Validate { current, patch } => {
                commands::field::validate(ctx, &current, &patch)
            }
        },
        Commands::Schema(_) => anyhow::bail!("schema command is handled before context loading"),
    }
}
