mod interactive;
mod render;

use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Keywords queried when none are given.
const DEFAULT_KEYWORDS: &str = "Jokowi, Prabowo, Banjarmasin";

#[derive(Debug, Parser)]
#[command(name = "ytrends")]
#[command(about = "YouTube search interest for up to five keywords over the last 24 hours")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one query and print the chart, ranking, and data table
    Query {
        /// Comma-separated keywords (at most 5)
        #[arg(default_value = DEFAULT_KEYWORDS)]
        keywords: String,
        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read one comma-separated keyword list per line and query each in turn
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ytrends_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Query { keywords, json }) => run_once(&config, &keywords, json).await?,
        Some(Commands::Interactive) => interactive::run_interactive(&config).await?,
        None => run_once(&config, DEFAULT_KEYWORDS, false).await?,
    }

    Ok(())
}

/// Runs a single query and prints its outcome.
///
/// Query failures are rendered as notices; only I/O errors on stdout are
/// returned.
async fn run_once(
    config: &ytrends_core::AppConfig,
    keywords: &str,
    json: bool,
) -> anyhow::Result<()> {
    if !json {
        render::usage_notice(&mut std::io::stdout().lock())?;
    }

    let outcome = ytrends_provider::run_query(config, keywords).await;

    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &render::outcome_json(&outcome))?;
        writeln!(out)?;
    } else {
        render::outcome(&mut out, &outcome)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
