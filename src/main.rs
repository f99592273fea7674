//! WordleBot - Unified CLI
//!
//! Interactive Wordle assistant with terminal and prompt front ends.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, SessionArgs};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use wordlebot::{BotConfig, HttpSolver};

/// Environment variable overriding the solver endpoint.
const SOLVER_URL_ENV: &str = "WORDLEBOT_SOLVER_URL";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui(args) => run_tui(args).await,
        Command::Prompt(args) => run_prompt(args).await,
    }
}

/// Run the terminal UI
async fn run_tui(args: SessionArgs) -> Result<()> {
    let config = load_config(&args)?;
    let solver = HttpSolver::from_config(&config)?;
    wordlebot::run_tui(&solver, config.session_config()?).await
}

/// Run the line-oriented prompt
async fn run_prompt(args: SessionArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    let solver = HttpSolver::from_config(&config)?;
    info!(solver_url = %solver.url(), "Starting prompt session");

    let stdin = std::io::stdin();
    let phase = wordlebot::run_prompt(
        &solver,
        config.session_config()?,
        stdin.lock(),
        std::io::stdout(),
    )
    .await?;

    info!(phase = %phase, "Session ended");
    Ok(())
}

/// Resolves configuration: file, then environment, then command line.
#[instrument(skip(args), fields(config_path = %args.config.display()))]
fn load_config(args: &SessionArgs) -> Result<BotConfig> {
    let mut config = BotConfig::load(&args.config)?;

    if let Ok(url) = std::env::var(SOLVER_URL_ENV) {
        info!(url = %url, "Overriding solver URL from environment");
        config = config.with_solver_url(url);
    }
    if let Some(url) = &args.solver_url {
        config = config.with_solver_url(url.clone());
    }
    if let Some(word_length) = args.word_length {
        config = config.with_word_length(word_length);
    }
    if let Some(max_attempts) = args.max_attempts {
        config = config.with_max_attempts(max_attempts);
    }
    if let Some(final_attempt) = args.final_attempt {
        config = config.with_final_attempt(final_attempt);
    }

    Ok(config)
}
