//! Errors returned when the controller is driven out of order.

use derive_more::{Display, Error};

use super::Phase;

/// Rejected controller operation. State is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The operation is not valid in the current phase.
    #[display("Expected phase {expected} but session is {actual}")]
    WrongPhase {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the session is in.
        actual: Phase,
    },

    /// Mark position past the end of the word.
    #[display("Position {position} is out of range for a {len}-letter word")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Word length.
        len: usize,
    },

    /// Mark sequence does not match the word length.
    #[display("Expected {expected} marks but got {found}")]
    LengthMismatch {
        /// Word length.
        expected: usize,
        /// Number of marks supplied.
        found: usize,
    },

    /// The first request was already issued.
    #[display("Session has already been started")]
    AlreadyStarted,
}
