//! Shared test helpers.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use wordlebot::{GuessRecord, Solver, SolverError};

/// In-memory solver that replays scripted answers and records every request.
#[derive(Debug, Default)]
pub struct ScriptedSolver {
    answers: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<Vec<GuessRecord>>>,
}

impl ScriptedSolver {
    /// Creates a solver that answers with each entry in turn.
    pub fn new(answers: impl IntoIterator<Item = Result<&'static str, &'static str>>) -> Self {
        Self {
            answers: Mutex::new(
                answers
                    .into_iter()
                    .map(|a| a.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a solver that always proposes `word`.
    pub fn always(word: &'static str, times: usize) -> Self {
        Self::new(std::iter::repeat_n(Ok(word), times))
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<Vec<GuessRecord>> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Solver for ScriptedSolver {
    async fn next_guess(&self, history: &[GuessRecord]) -> Result<String, SolverError> {
        self.requests.lock().unwrap().push(history.to_vec());
        match self.answers.lock().unwrap().pop_front() {
            Some(Ok(word)) => Ok(word),
            Some(Err(message)) => Err(SolverError::new(message)),
            None => Err(SolverError::new("No scripted answer left")),
        }
    }
}
