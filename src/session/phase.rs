//! Lifecycle phases of a session.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// ```text
/// Loading -> AwaitingInput <-> Submitting -> Solved
///                  |                |
///                  +-----> Failed <-+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for the first candidate word.
    Loading,
    /// Candidate present; marks may be toggled and submitted.
    AwaitingInput,
    /// A solver request is in flight.
    Submitting,
    /// The puzzle was solved.
    Solved,
    /// The attempt budget ran out.
    Failed,
}

impl Phase {
    /// Returns true for `Solved` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Solved | Phase::Failed)
    }

    /// Returns true if the player may toggle marks and submit.
    pub fn is_interactive(self) -> bool {
        matches!(self, Phase::AwaitingInput)
    }
}
