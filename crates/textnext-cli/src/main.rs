use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod progress;
mod render;
#[cfg(test)]
mod test_support;

#[derive(Parser)]
#[command(name = "textnext")]
#[command(about = "TextNext Patent Search - query the patent search service", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search service base URL, overriding the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search {
        /// Key word(s) to search for
        query: String,

        /// Number of results to request (defaults to the configured page size)
        #[arg(long)]
        limit: Option<u32>,

        /// How many times to load more results after the first page
        #[arg(long, default_value_t = 0)]
        more: u32,
    },
    /// Start an interactive search session
    Repl,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = commands::load_config(cli.config.as_deref(), cli.base_url.as_deref())?;

    match cli.command {
        Commands::Search { query, limit, more } => {
            let config = commands::with_initial_limit(config, limit)?;
            let controller = commands::build_controller(&config);
            commands::search::run(&controller, &query, more).await?
        }
        Commands::Repl => {
            let controller = commands::build_controller(&config);
            commands::repl::run(&controller).await?
        }
    }

    Ok(())
}
