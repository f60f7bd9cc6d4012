mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    claude_brains::init_logging();

    // Parse CLI args
    let cli = Cli::parse();

    // Handle init command early (doesn't need config)
    if let Commands::Init { path } = &cli.command {
        return commands::init::run_init(path);
    }

    // Load config
    let config = config::load_config(cli.config.as_deref())?;
    let specifier = cli
        .brain
        .clone()
        .unwrap_or_else(|| config.brain.specifier.clone());

    match cli.command {
        Commands::Init { .. } => {
            // Already handled above
            unreachable!()
        }
        Commands::Hooks { action } => {
            commands::hooks::execute(action, &specifier, &cli.repo, &config).await?;
        }
        Commands::Ask {
            prompt,
            system,
            schema,
            model,
        } => {
            commands::ask::execute(prompt, system, schema, model, &config).await?;
        }
    }

    Ok(())
}
