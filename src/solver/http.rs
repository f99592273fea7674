//! HTTP solver client using the JSON history protocol.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::{GuessResponse, Solver, SolverError};
use crate::config::{BotConfig, DEFAULT_SOLVER_URL};
use crate::guess::GuessRecord;

/// Solver reached over HTTP.
///
/// Each request POSTs the history as a JSON array of `{word, clue}` objects
/// and expects `{"guess": "..."}` back.
#[derive(Debug, Clone)]
pub struct HttpSolver {
    url: String,
    client: reqwest::Client,
}

impl HttpSolver {
    /// Creates a client for `url` with no request timeout.
    #[instrument(skip(url), fields(url = %url.as_ref()))]
    pub fn new(url: impl AsRef<str>) -> Self {
        info!("Creating HTTP solver client");
        Self {
            url: url.as_ref().to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client for `url` whose requests fail after `timeout`.
    #[instrument(skip(url), fields(url = %url.as_ref()))]
    pub fn with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self, SolverError> {
        info!("Creating HTTP solver client with timeout");
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.as_ref().to_string(),
            client,
        })
    }

    /// Creates a client from the bot configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &BotConfig) -> Result<Self, SolverError> {
        match config.timeout() {
            Some(timeout) => Self::with_timeout(config.solver_url(), timeout),
            None => Ok(Self::new(config.solver_url())),
        }
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSolver {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVER_URL)
    }
}

#[async_trait]
impl Solver for HttpSolver {
    #[instrument(skip(self, history), fields(url = %self.url, rounds = history.len()))]
    async fn next_guess(&self, history: &[GuessRecord]) -> Result<String, SolverError> {
        debug!("Sending solver request");

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(history)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Solver request failed");
                SolverError::new(e.to_string())
            })?;

        let status = response.status();
        debug!(status = %status, "Got solver response");

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "Failed to read solver error body");
                    String::new()
                }
            };
            warn!(status = %status, body = %body, "Solver returned error status");
            let message = if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body
            };
            return Err(SolverError::new(message));
        }

        let body: GuessResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to decode solver response");
            SolverError::new(format!("Failed to decode solver response: {}", e))
        })?;

        info!(guess = %body.guess, "Solver proposed next guess");
        Ok(body.guess)
    }
}
