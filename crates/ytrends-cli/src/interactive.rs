use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use ytrends_core::AppConfig;

use crate::render;

const PROMPT: &str = "keywords (comma-separated, at most 5; `quit` to exit)> ";

/// Reads one keyword list per line from stdin and runs each as a query.
///
/// Queries run strictly one after another; a new line is not read until the
/// previous query reached a terminal outcome.
pub(crate) async fn run_interactive(config: &AppConfig) -> anyhow::Result<()> {
    {
        let mut out = std::io::stdout().lock();
        render::usage_notice(&mut out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if is_exit(&line) {
            break;
        }

        let outcome = ytrends_provider::run_query(config, &line).await;

        let mut out = std::io::stdout().lock();
        render::outcome(&mut out, &outcome)?;
        writeln!(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    tracing::debug!("interactive session ended");
    Ok(())
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "quit" | "exit")
}
