//! CLI binary for briefer.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use briefer::{AppConfig, DefaultResearcher, FetchContext, SourceMode};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Briefer: search the web and summarize what comes back.
#[derive(Parser)]
#[command(name = "briefer", version, about)]
struct Cli {
    /// Search query. Prompted for on stdin when omitted.
    #[arg(short, long)]
    query: Option<String>,

    /// Summarize search snippets or fetched page content.
    #[arg(long, env = "BRIEFER_MODE")]
    mode: Option<SourceMode>,

    /// Maximum page fetches in flight.
    #[arg(long, default_value_t = 8)]
    max_concurrency: usize,

    /// Drop page fetches still running this many seconds after the run starts.
    #[arg(long)]
    fetch_deadline_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("briefer=info,briefer_search=info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("research failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    config.fetch.max_concurrency = cli.max_concurrency;
    config.fetch_deadline = cli.fetch_deadline_secs.map(Duration::from_secs);
    config.validate()?;

    let query = match cli.query {
        Some(query) => query,
        None => prompt_query()?,
    };

    let researcher = DefaultResearcher::from_config(&config)?;

    let mut ctx = FetchContext::new();
    if let Some(deadline) = config.fetch_deadline {
        ctx = ctx.with_timeout(deadline);
    }

    // Handle Ctrl+C: every stage of the run watches this token.
    let cancel = ctx.cancel_token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, cancelling research...");
            cancel.cancel();
        }
    });

    let report = researcher.run(&query, &ctx).await?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{report}")?;
    stdout.flush()?;

    Ok(())
}

/// Print the prompt and read one line from stdin.
fn prompt_query() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter search query: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
