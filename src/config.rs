//! Session parameters and the on-disk bot configuration.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default solver endpoint.
pub const DEFAULT_SOLVER_URL: &str = "https://interviewing.venteur.co/api/wordle";

/// Default number of letters per word.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of rounds before the session fails.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// What to do with a final, non-winning attempt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FinalAttempt {
    /// Fail locally without contacting the solver.
    #[default]
    Skip,
    /// Send the attempt, record it, then fail.
    Contact,
}

/// Parameters of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    word_length: usize,
    max_attempts: usize,
    final_attempt: FinalAttempt,
}

impl SessionConfig {
    /// Creates a session config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value is zero.
    #[instrument]
    pub fn new(word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::new("word_length must be at least 1".to_string()));
        }
        if max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1".to_string()));
        }
        Ok(Self {
            word_length,
            max_attempts,
            final_attempt: FinalAttempt::default(),
        })
    }

    /// Replaces the final-attempt policy.
    pub fn with_final_attempt(mut self, final_attempt: FinalAttempt) -> Self {
        self.final_attempt = final_attempt;
        self
    }

    /// Letters per word.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Rounds allowed before the session fails.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Policy for the last attempt.
    pub fn final_attempt(&self) -> FinalAttempt {
        self.final_attempt
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            final_attempt: FinalAttempt::default(),
        }
    }
}

/// Configuration file contents (`wordlebot.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BotConfig {
    /// Solver endpoint.
    #[serde(default = "default_solver_url")]
    solver_url: String,

    /// Letters per word.
    #[serde(default = "default_word_length")]
    word_length: usize,

    /// Rounds allowed before the session fails.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Policy for the last attempt.
    #[serde(default)]
    final_attempt: FinalAttempt,

    /// Optional request timeout in seconds.
    #[serde(default)]
    timeout_secs: Option<u64>,
}

#[instrument]
fn default_solver_url() -> String {
    DEFAULT_SOLVER_URL.to_string()
}

#[instrument]
fn default_word_length() -> usize {
    DEFAULT_WORD_LENGTH
}

#[instrument]
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            solver_url: default_solver_url(),
            word_length: default_word_length(),
            max_attempts: default_max_attempts(),
            final_attempt: FinalAttempt::default(),
            timeout_secs: None,
        }
    }
}

impl BotConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(solver_url = %config.solver_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the solver URL.
    pub fn with_solver_url(mut self, solver_url: impl Into<String>) -> Self {
        self.solver_url = solver_url.into();
        self
    }

    /// Overrides the word length.
    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    /// Overrides the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Overrides the final-attempt policy.
    pub fn with_final_attempt(mut self, final_attempt: FinalAttempt) -> Self {
        self.final_attempt = final_attempt;
        self
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the per-game parameters.
    #[instrument(skip(self))]
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        Ok(SessionConfig::new(self.word_length, self.max_attempts)?
            .with_final_attempt(self.final_attempt))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
