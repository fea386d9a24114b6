use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mfv` binary.
#[derive(Debug, Parser)]
#[command(name = "mfv", version, about = "Metafield - object and field metadata with validated updates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `general.pretty` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Registry snapshot path (overrides `general.snapshot_path`)
    #[arg(short, long, global = true)]
    pub snapshot: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            snapshot: self.snapshot.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use meta_core::enums::FieldMetadataType;

    use super::subcommands::{FieldCommands, ObjectCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "mfv",
            "--format",
            "raw",
            "--snapshot",
            "/tmp/reg.json",
            "--verbose",
            "object",
            "list",
        ])
        .expect("cli should parse");

        let flags = cli.global_flags();
        assert_eq!(flags.format, Some(OutputFormat::Raw));
        assert_eq!(flags.snapshot.as_deref(), Some("/tmp/reg.json"));
        assert!(flags.verbose);
        assert!(matches!(
            cli.command,
            Commands::Object {
                action: ObjectCommands::List
            }
        ));
    }

    #[test]
    fn field_create_parses_type_and_options() {
        let cli = Cli::try_parse_from([
            "mfv",
            "field",
            "create",
            "--object",
            "obj-1",
            "--type",
            "select",
            "--name",
            "stage",
            "--label",
            "Stage",
            "--label-synced",
            "--option",
            "OPEN=Open@green",
            "--option",
            "SOLD",
            "--default-value",
            "'OPEN'",
        ])
        .expect("cli should parse");

        let Commands::Field {
            action: FieldCommands::Create(args),
        } = cli.command
        else {
            panic!("expected field create");
        };
        assert_eq!(args.field_type, FieldMetadataType::Select);
        assert_eq!(args.options.len(), 2);
        assert_eq!(args.options[0].label, "Open");
        assert!(args.label_synced);
        assert_eq!(args.default_value.as_deref(), Some("'OPEN'"));
    }

    #[test]
    fn field_update_requires_a_payload() {
        let result = Cli::try_parse_from(["mfv", "field", "update", "fld-1"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "mfv",
            "field",
            "update",
            "fld-1",
            "--payload",
            r#"{"name":"newName"}"#,
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Field {
                action: FieldCommands::Update(_)
            }
        ));
    }

    #[test]
    fn only_writes_are_mutating() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).expect("cli should parse").command;

        assert!(parse(&["mfv", "object", "delete", "obj-1"]).is_mutating());
        assert!(parse(&["mfv", "field", "update", "f", "--payload", "{}"]).is_mutating());
        assert!(!parse(&["mfv", "object", "list"]).is_mutating());
        assert!(!parse(&["mfv", "field", "list", "--object", "o"]).is_mutating());
        assert!(!parse(&["mfv", "schema"]).is_mutating());
    }

    #[test]
    fn unknown_field_type_is_rejected() {
        let result = Cli::try_parse_from([
            "mfv", "field", "create", "--object", "o", "--type", "checkbox", "--name", "n",
            "--label", "N",
        ]);
        assert!(result.is_err());
    }
}
