//! Solver collaborator: given the history so far, propose the next word.

mod http;

pub use http::HttpSolver;

use async_trait::async_trait;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::guess::GuessRecord;

/// Anything that can propose the next candidate word.
///
/// Implementations receive the full history (empty for the first request)
/// and either return the next word or a human-readable failure.
#[async_trait]
pub trait Solver: Send + Sync {
    /// Requests the next candidate word.
    async fn next_guess(&self, history: &[GuessRecord]) -> Result<String, SolverError>;
}

/// Successful solver response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    /// The next candidate word.
    pub guess: String,
}

/// Solver failure with location tracking.
///
/// Displays as the bare message so it can be shown to the player verbatim.
#[derive(Debug, Clone, Display, Error)]
#[display("{}", message)]
pub struct SolverError {
    /// Human-readable message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SolverError {
    /// Creates a new solver error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for SolverError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
