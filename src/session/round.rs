//! Outcome of the pure half of a submission.

use derive_new::new;

use crate::guess::GuessRecord;

/// What [`SessionController::begin_submit`](super::SessionController::begin_submit) decided.
#[derive(Debug)]
pub enum SubmitDecision {
    /// Budget exhausted; the session is now `Failed` and no request is needed.
    Exhausted,
    /// The session is now `Submitting`; send the request and report back.
    Request(PendingRound),
}

/// A submission waiting on the solver.
///
/// Hand it back to
/// [`SessionController::finish_submit`](super::SessionController::finish_submit)
/// together with the solver's result.
#[derive(Debug, Clone, new)]
pub struct PendingRound {
    record: GuessRecord,
    request: Vec<GuessRecord>,
    final_attempt: bool,
}

impl PendingRound {
    /// The tentative record for this round.
    pub fn record(&self) -> &GuessRecord {
        &self.record
    }

    /// Full history to send, ending with the tentative record.
    pub fn request(&self) -> &[GuessRecord] {
        &self.request
    }

    /// True if this is the last attempt the budget allows.
    pub fn is_final_attempt(&self) -> bool {
        self.final_attempt
    }

    pub(super) fn into_record(self) -> GuessRecord {
        self.record
    }
}
