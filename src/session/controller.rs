//! Session controller: owns the state and enforces every transition.
//!
//! Each solver round trip is split into a pure decision step
//! ([`SessionController::begin_submit`]) and an apply step
//! ([`SessionController::finish_submit`]). The async wrappers
//! [`SessionController::start`] and [`SessionController::submit`] join the
//! two around a [`Solver`] call; front ends that need to render the
//! `Submitting` phase drive the halves themselves.

use tracing::{debug, info, instrument, warn};

use super::round::{PendingRound, SubmitDecision};
use super::{Phase, SessionError};
use crate::clue::{self, ClueString, LetterMark};
use crate::config::{FinalAttempt, SessionConfig};
use crate::guess::GuessRecord;
use crate::solver::{Solver, SolverError};

/// Shown when the attempt budget runs out.
pub const NOT_SOLVED_MESSAGE: &str = "Wordle not solved. Please refresh WordleBot to try again.";

/// Shown when the puzzle is solved.
pub const SOLVED_MESSAGE: &str = "Yay! All done";

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    candidate: String,
    marks: Vec<LetterMark>,
    history: Vec<GuessRecord>,
    phase: Phase,
    error: Option<String>,
    success: Option<String>,
}

impl SessionState {
    fn new(word_length: usize) -> Self {
        Self {
            candidate: String::new(),
            marks: vec![LetterMark::Unknown; word_length],
            history: Vec::new(),
            phase: Phase::Loading,
            error: None,
            success: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Word currently proposed by the solver; empty while loading.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// In-progress marks for the candidate.
    pub fn marks(&self) -> &[LetterMark] {
        &self.marks
    }

    /// Completed rounds, oldest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Last error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success message once solved.
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// One-based number of the round being played.
    pub fn guess_number(&self) -> usize {
        self.history.len() + 1
    }
}

/// Single writer for one game's [`SessionState`].
#[derive(Debug, Clone)]
pub struct SessionController {
    config: SessionConfig,
    state: SessionState,
    started: bool,
}

impl SessionController {
    /// Creates a controller in `Loading` with empty history.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        info!("Creating session controller");
        Self {
            config,
            state: SessionState::new(config.word_length()),
            started: false,
        }
    }

    /// Session parameters.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current marks encoded for the wire.
    pub fn clue(&self) -> ClueString {
        clue::encode(&self.state.marks)
    }

    /// Returns true if a submission would be accepted.
    pub fn can_submit(&self) -> bool {
        self.state.phase.is_interactive()
    }

    /// Returns true once the session is `Solved` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        self.state.phase.is_terminal()
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.state.phase == expected {
            Ok(())
        } else {
            warn!(expected = %expected, actual = %self.state.phase, "Operation rejected");
            Err(SessionError::WrongPhase {
                expected,
                actual: self.state.phase,
            })
        }
    }

    fn check_candidate(&self, word: &str) -> Result<(), SolverError> {
        let len = word.chars().count();
        if len == self.config.word_length() {
            Ok(())
        } else {
            Err(SolverError::new(format!(
                "Solver returned \"{}\" but expected a {}-letter word",
                word,
                self.config.word_length()
            )))
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  First request
    // ─────────────────────────────────────────────────────────────

    /// Marks the first request as issued.
    ///
    /// The caller sends an empty history to the solver and passes the result
    /// to [`finish_start`](Self::finish_start).
    #[instrument(skip(self))]
    pub fn begin_start(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::Loading)?;
        if self.started {
            warn!("Start requested twice");
            return Err(SessionError::AlreadyStarted);
        }
        self.started = true;
        debug!("Requesting first guess");
        Ok(())
    }

    /// Applies the solver's answer to the first request.
    ///
    /// On failure the session stays in `Loading` with the error set and
    /// cannot be started again.
    #[instrument(skip(self, result))]
    pub fn finish_start(&mut self, result: Result<String, SolverError>) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Loading)?;
        self.started = true;

        match result.and_then(|word| self.check_candidate(&word).map(|()| word)) {
            Ok(word) => {
                info!(candidate = %word, "First guess received");
                self.state.candidate = word;
                self.state.marks = vec![LetterMark::Unknown; self.config.word_length()];
                self.state.error = None;
                self.state.phase = Phase::AwaitingInput;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load first guess");
                self.state.error = Some(e.message);
            }
        }

        Ok(self.state.phase)
    }

    /// Requests the first guess from `solver`.
    #[instrument(skip(self, solver))]
    pub async fn start<S: Solver + ?Sized>(&mut self, solver: &S) -> Result<Phase, SessionError> {
        self.begin_start()?;
        let result = solver.next_guess(&[]).await;
        self.finish_start(result)
    }

    // ─────────────────────────────────────────────────────────────
    //  Marks
    // ─────────────────────────────────────────────────────────────

    /// Cycles the mark at `position` and returns the new mark.
    #[instrument(skip(self))]
    pub fn toggle_mark(&mut self, position: usize) -> Result<LetterMark, SessionError> {
        self.expect_phase(Phase::AwaitingInput)?;

        let len = self.state.marks.len();
        let mark = self
            .state
            .marks
            .get_mut(position)
            .ok_or(SessionError::PositionOutOfRange { position, len })?;
        *mark = mark.next();

        debug!(position, mark = %mark, "Toggled mark");
        Ok(*mark)
    }

    /// Replaces all marks at once.
    #[instrument(skip(self))]
    pub fn set_marks(&mut self, marks: &[LetterMark]) -> Result<(), SessionError> {
        self.expect_phase(Phase::AwaitingInput)?;

        if marks.len() != self.state.marks.len() {
            return Err(SessionError::LengthMismatch {
                expected: self.state.marks.len(),
                found: marks.len(),
            });
        }
        self.state.marks.copy_from_slice(marks);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Submission
    // ─────────────────────────────────────────────────────────────

    /// Decides what a submission of the current marks does.
    ///
    /// Either fails the session locally because the budget is spent, or moves
    /// to `Submitting` and hands back the request to send.
    #[instrument(skip(self), fields(round = self.state.guess_number()))]
    pub fn begin_submit(&mut self) -> Result<SubmitDecision, SessionError> {
        self.expect_phase(Phase::AwaitingInput)?;

        let clue = self.clue();
        let solved = clue.is_solved();
        let record = GuessRecord::new(self.state.candidate.clone(), clue);
        let prospective = self.state.history.len() + 1;
        let final_attempt = prospective >= self.config.max_attempts();

        if final_attempt && !solved && self.config.final_attempt() == FinalAttempt::Skip {
            info!(prospective, "Attempt budget exhausted");
            self.state.phase = Phase::Failed;
            self.state.error = Some(NOT_SOLVED_MESSAGE.to_string());
            self.state.success = None;
            return Ok(SubmitDecision::Exhausted);
        }

        let mut request = self.state.history.clone();
        request.push(record.clone());

        debug!(clue = %record.clue(), "Submitting round");
        self.state.phase = Phase::Submitting;
        Ok(SubmitDecision::Request(PendingRound::new(record, request, final_attempt)))
    }

    /// Applies the solver's answer to a pending submission.
    #[instrument(skip(self, pending, result))]
    pub fn finish_submit(
        &mut self,
        pending: PendingRound,
        result: Result<String, SolverError>,
    ) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Submitting)?;

        let solved = pending.record().is_solved();
        let final_attempt = pending.is_final_attempt();

        let next = match result {
            Ok(word) if solved || final_attempt => Ok(word),
            Ok(word) => self.check_candidate(&word).map(|()| word),
            Err(e) => Err(e),
        };

        let next = match next {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, "Round failed");
                self.state.error = Some(e.message);
                self.state.phase = Phase::AwaitingInput;
                return Ok(self.state.phase);
            }
        };

        self.state.history.push(pending.into_record());
        if self.check_candidate(&next).is_ok() {
            self.state.candidate = next;
        } else {
            debug!(response = %next, "Keeping last word as candidate");
        }
        self.state.marks = vec![LetterMark::Unknown; self.config.word_length()];
        self.state.error = None;

        if solved {
            info!(rounds = self.state.history.len(), "Puzzle solved");
            self.state.success = Some(SOLVED_MESSAGE.to_string());
            self.state.phase = Phase::Solved;
        } else if final_attempt {
            info!(rounds = self.state.history.len(), "Final attempt recorded, puzzle not solved");
            self.state.success = None;
            self.state.error = Some(NOT_SOLVED_MESSAGE.to_string());
            self.state.phase = Phase::Failed;
        } else {
            info!(candidate = %self.state.candidate, "Next guess received");
            self.state.success = None;
            self.state.phase = Phase::AwaitingInput;
        }

        Ok(self.state.phase)
    }

    /// Submits the current marks to `solver`.
    #[instrument(skip(self, solver))]
    pub async fn submit<S: Solver + ?Sized>(&mut self, solver: &S) -> Result<Phase, SessionError> {
        match self.begin_submit()? {
            SubmitDecision::Exhausted => Ok(self.state.phase),
            SubmitDecision::Request(pending) => {
                let result = solver.next_guess(pending.request()).await;
                self.finish_submit(pending, result)
            }
        }
    }
}
