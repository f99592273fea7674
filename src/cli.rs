//! Command-line interface for wordlebot.

use clap::{Args, Parser, Subcommand};
use wordlebot::FinalAttempt;

/// WordleBot - solve Wordle with help from a remote solver
#[derive(Parser, Debug)]
#[command(name = "wordlebot")]
#[command(about = "Interactive Wordle assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui(SessionArgs),

    /// Play by typing clue strings (e.g. gxyxx) at a prompt
    Prompt(SessionArgs),
}

/// Options shared by every front end
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "wordlebot.toml")]
    pub config: std::path::PathBuf,

    /// Solver endpoint (overrides config and WORDLEBOT_SOLVER_URL)
    #[arg(long)]
    pub solver_url: Option<String>,

    /// Letters per word
    #[arg(long)]
    pub word_length: Option<usize>,

    /// Rounds allowed before the session fails
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Whether the final non-winning attempt is sent to the solver (skip or contact)
    #[arg(long)]
    pub final_attempt: Option<FinalAttempt>,
}
