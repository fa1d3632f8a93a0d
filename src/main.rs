use anyhow::{Context, Result};
use clap::Parser;

use pokeql::cli::handlers::{CommandContext, handle_lookup, handle_query, handle_serve};
use pokeql::cli::{Cli, Commands};
use pokeql::config::PokeqlConfig;
use pokeql::logging;
use pokeql::resolver::Operation;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let ctx = load_context(&cli)?;

    match cli.command {
        Commands::Serve { host, port } => {
            let mut ctx = ctx;
            if let Some(h) = host {
                ctx.config.server.host = h;
            }
            if let Some(p) = port {
                ctx.config.server.port = p;
            }
            handle_serve(ctx)
        }
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::List { json } => handle_lookup(&ctx, Operation::ListAll, json),
        Commands::Show { name, json } => {
            handle_lookup(&ctx, Operation::FindByName(Some(name)), json)
        }
        Commands::Type { r#type, json } => {
            handle_lookup(&ctx, Operation::FilterByType(Some(r#type)), json)
        }
        Commands::Resists { r#type, json } => {
            handle_lookup(&ctx, Operation::FilterByResistance(Some(r#type)), json)
        }
        Commands::Run {
            operation,
            argument,
            json,
        } => {
            let op = Operation::from_name(&operation, argument)?;
            handle_lookup(&ctx, op, json)
        }
    }
}

fn load_context(cli: &Cli) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let mut config = PokeqlConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;

    if let Some(ref data) = cli.data {
        config.data.path = Some(data.clone());
    }

    CommandContext::new(config).context("Failed to load dataset")
}
