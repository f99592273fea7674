//! Completed rounds as sent to the solver.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::clue::ClueString;

/// One completed round: the word that was played and the clue it earned.
///
/// Records are immutable once created. On the wire they appear as
/// `{"word": "serai", "clue": "gxyxx"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The word that was played.
    word: String,
    /// Feedback for that word.
    clue: ClueString,
}

impl GuessRecord {
    /// Creates a new record.
    #[instrument(level = "trace", skip(word))]
    pub fn new(word: impl Into<String>, clue: ClueString) -> Self {
        Self {
            word: word.into(),
            clue,
        }
    }

    /// Returns true if this round solved the puzzle.
    pub fn is_solved(&self) -> bool {
        self.clue.is_solved()
    }
}
