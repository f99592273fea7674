//! WordleBot library - a Wordle assistant driven by a remote solver
//!
//! The player types the solver's suggested word into Wordle, marks each
//! letter with the feedback Wordle showed, and submits. The solver uses the
//! full history to propose the next word.
//!
//! # Architecture
//!
//! - **Session**: the guess/clue state machine ([`SessionController`])
//! - **Clue**: marks and their `x`/`y`/`g` wire encoding
//! - **Solver**: the remote collaborator ([`Solver`], [`HttpSolver`])
//! - **Front ends**: terminal UI and a line-oriented prompt
//!
//! # Example
//!
//! ```no_run
//! use wordlebot::{HttpSolver, Phase, SessionConfig, SessionController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let solver = HttpSolver::default();
//! let mut session = SessionController::new(SessionConfig::default());
//!
//! session.start(&solver).await?;
//! if session.phase() == Phase::AwaitingInput {
//!     session.toggle_mark(0)?;
//!     session.submit(&solver).await?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod clue;
mod config;
mod guess;
mod prompt;
mod session;
mod solver;
mod tui;

// Crate-level exports - Clue encoding
pub use clue::{ClueCode, ClueError, ClueString, LetterMark, decode, encode, is_solved};

// Crate-level exports - Configuration
pub use config::{
    BotConfig, ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_SOLVER_URL, DEFAULT_WORD_LENGTH,
    FinalAttempt, SessionConfig,
};

// Crate-level exports - History
pub use guess::GuessRecord;

// Crate-level exports - Session state machine
pub use session::{
    NOT_SOLVED_MESSAGE, PendingRound, Phase, SOLVED_MESSAGE, SessionController, SessionError,
    SessionState, SubmitDecision,
};

// Crate-level exports - Solver client
pub use solver::{GuessResponse, HttpSolver, Solver, SolverError};

// Crate-level exports - Front ends
pub use prompt::run_prompt;
pub use tui::{App, AppAction, digit_position, draw, mark_color, move_cursor, run_tui};
