use anyhow::Context;
use clap::Parser;
use meta_config::MetaConfig;

mod cli;
mod commands;
mod context;
mod output;
mod write_lock;

fn main() {
    if let Err(error) = run() {
        eprintln!("mfv error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = MetaConfig::load_with_dotenv().context("failed to load configuration")?;
    let exclusive = cli.command.is_mutating();
    let mut ctx = context::AppContext::init(&config, &flags, exclusive)?;

    commands::dispatch::dispatch(cli.command, &mut ctx)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("METAFIELD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
