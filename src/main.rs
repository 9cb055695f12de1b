use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use itemql::cli::handlers::{self, CommandContext, ServeParams};
use itemql::cli::{Cli, Commands};
use itemql::config::ItemqlConfig;
use itemql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_ref().map(PathBuf::from));

    match cli.command {
        Commands::Init => {
            let cwd = std::env::current_dir()?;
            handlers::handle_init(&cwd)
        }
        Commands::Schema => handlers::handle_schema(),
        Commands::Serve { host, port, path } => {
            let ctx = load_context(cli.config.as_deref(), cli.database_url)?;
            handlers::handle_serve(ctx, ServeParams { host, port, path })
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(cli.config.as_deref(), cli.database_url)?;
            handlers::handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(cli.config.as_deref(), cli.database_url)?;
            handlers::handle_mutate(ctx, mutation, variables)
        }
    }
}

fn load_context(config_path: Option<&str>, database_url: Option<String>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let mut config = ItemqlConfig::load(config_path.map(Path::new), &cwd)
        .context("Failed to load config")?;

    if let Some(url) = database_url {
        config.database.url = url;
    }

    Ok(CommandContext::new(config))
}
