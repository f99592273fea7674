//! Guess/clue session state machine.

mod controller;
mod error;
mod phase;
mod round;

pub use controller::{NOT_SOLVED_MESSAGE, SOLVED_MESSAGE, SessionController, SessionState};
pub use error::SessionError;
pub use phase::Phase;
pub use round::{PendingRound, SubmitDecision};
