// Rust guideline compliant 2026-08-29

//! Quiz Session State Machine -- tracks position, score, and answered state
//! across a linear walk through a question bank.
//!
//! Entry points: [`Session::start`], [`Session::select`],
//! [`Session::advance`], [`Session::restart`]. The bank is loaded through
//! the injected `QuestionSource` port; the session never touches a concrete
//! adapter and performs no rendering.

use domain::{Question, QuestionSource, QuizBank, SourceError};

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Errors that can occur during session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The requested action is not valid in the current phase.
    #[error("{action} is not valid in the {phase:?} phase")]
    InvalidTransition {
        /// The rejected action.
        action: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },
    /// The source produced a bank with no questions.
    #[error("question source produced an empty bank")]
    EmptyBank,
    /// The bank load failed; reported once, never retried automatically.
    #[error("bank load failed: {0}")]
    Source(#[from] SourceError),
}

// ---------------------------------------------------------------------------
// Session types
// ---------------------------------------------------------------------------

/// Lifecycle phase of the active play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first bank build (or after a restart).
    Idle,
    /// A question is on screen, unanswered.
    Presenting,
    /// Feedback for the current question is locked in, awaiting advance.
    Answered,
    /// The walk passed the end of the bank (single-pass mode only).
    Exhausted,
}

/// Exhaustion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rebuild the bank and loop back to the first question, preserving the
    /// running score.
    Infinite,
    /// Surface a terminal summary and halt.
    SinglePass,
}

/// Feedback for a locked-in selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Whether the selection matched the recorded answer label.
    pub correct: bool,
    /// The recorded correct-answer label.
    pub answer: String,
    /// The question's explanation.
    pub explanation: String,
}

/// Outcome of a `select` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// First selection for this question; feedback is now locked in.
    Scored(Feedback),
    /// The question was already answered; nothing changed (idempotent guard).
    Ignored,
}

/// Terminal score report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Correct answers so far.
    pub score: u32,
    /// Questions answered so far.
    pub attempted: u32,
}

/// Outcome of an `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question in the current bank.
    Next,
    /// The bank was exhausted and rebuilt; presenting from index 0 with the
    /// score preserved (infinite mode).
    Recycled,
    /// The bank was exhausted; the session halted with a summary
    /// (single-pass mode).
    Finished(Summary),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The single mutable record of one active play-through.
///
/// All transitions take `&mut self`, so a stale bank fetch can never
/// overwrite a newer session's state.
#[derive(Debug)]
pub struct Session {
    bank: QuizBank,
    index: usize,
    score: u32,
    attempted: u32,
    phase: Phase,
    mode: Mode,
}

impl Session {
    /// Create an idle session with the given exhaustion policy.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            bank: QuizBank::default(),
            index: 0,
            score: 0,
            attempted: 0,
            phase: Phase::Idle,
            mode,
        }
    }

    /// Start a fresh play-through: load a bank through `source`, reset
    /// index/score/attempted, and present the first question.
    ///
    /// Valid from `Idle` or `Exhausted`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] from any other phase,
    /// [`SessionError::Source`] when the load fails (the session stays out
    /// of `Presenting`), or [`SessionError::EmptyBank`] when the source
    /// returns no questions.
    pub async fn start<S: QuestionSource>(&mut self, source: &S) -> Result<(), SessionError> {
        match self.phase {
            Phase::Idle | Phase::Exhausted => {}
            phase => {
                return Err(SessionError::InvalidTransition {
                    action: "start",
                    phase,
                });
            }
        }
        let bank = source.load_bank().await?;
        if bank.is_empty() {
            return Err(SessionError::EmptyBank);
        }
        log::info!("session.start: bank_size={}", bank.len());
        self.bank = bank;
        self.index = 0;
        self.score = 0;
        self.attempted = 0;
        self.phase = Phase::Presenting;
        Ok(())
    }

    /// Lock in an answer for the current question.
    ///
    /// Matching is an exact, case-sensitive string comparison against the
    /// question's recorded answer label. The first selection scores and
    /// moves the session to `Answered`; a second call while `Answered` is a
    /// no-op returning [`Selection::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] in `Idle` or `Exhausted`.
    pub fn select(&mut self, option: &str) -> Result<Selection, SessionError> {
        match self.phase {
            Phase::Presenting => {}
            Phase::Answered => return Ok(Selection::Ignored),
            phase => {
                return Err(SessionError::InvalidTransition {
                    action: "select",
                    phase,
                });
            }
        }
        // Index is always in bounds while Presenting; enforced by advance().
        let question = &self.bank.questions[self.index];
        let correct = option == question.answer;
        if correct {
            self.score += 1;
        }
        self.attempted += 1;
        self.phase = Phase::Answered;
        log::debug!(
            "session.select: index={} correct={correct} score={}",
            self.index,
            self.score
        );
        Ok(Selection::Scored(Feedback {
            correct,
            answer: question.answer.clone(),
            explanation: question.explanation.clone(),
        }))
    }

    /// Move past the answered question.
    ///
    /// Within bounds the next question is presented. Past the end, infinite
    /// mode reloads the bank through `source` and loops back to index 0 with
    /// the score preserved; single-pass mode halts with a summary.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] outside `Answered`, or
    /// [`SessionError::Source`]/[`SessionError::EmptyBank`] when an
    /// infinite-mode rebuild fails (the session moves to `Exhausted` and
    /// does not retry).
    pub async fn advance<S: QuestionSource>(
        &mut self,
        source: &S,
    ) -> Result<Advance, SessionError> {
        if self.phase != Phase::Answered {
            return Err(SessionError::InvalidTransition {
                action: "advance",
                phase: self.phase,
            });
        }
        self.index += 1;
        if self.index < self.bank.len() {
            self.phase = Phase::Presenting;
            return Ok(Advance::Next);
        }

        match self.mode {
            Mode::Infinite => {
                // Score and attempted carry across the rebuild.
                self.phase = Phase::Exhausted;
                let bank = source.load_bank().await?;
                if bank.is_empty() {
                    return Err(SessionError::EmptyBank);
                }
                log::info!(
                    "session.recycle: bank_size={} score={}",
                    bank.len(),
                    self.score
                );
                self.bank = bank;
                self.index = 0;
                self.phase = Phase::Presenting;
                Ok(Advance::Recycled)
            }
            Mode::SinglePass => {
                self.phase = Phase::Exhausted;
                log::info!(
                    "session.finished: score={} attempted={}",
                    self.score,
                    self.attempted
                );
                Ok(Advance::Finished(self.summary()))
            }
        }
    }

    /// Reset to `Idle`, zeroing index, score, and attempted count.
    ///
    /// Valid from any phase; a subsequent [`start`](Self::start) triggers a
    /// fresh bank build.
    pub fn restart(&mut self) {
        log::info!("session.restart");
        self.bank = QuizBank::default();
        self.index = 0;
        self.score = 0;
        self.attempted = 0;
        self.phase = Phase::Idle;
    }

    /// The question currently on screen (`Presenting` or `Answered`).
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        match self.phase {
            Phase::Presenting | Phase::Answered => self.bank.get(self.index),
            Phase::Idle | Phase::Exhausted => None,
        }
    }

    /// One-based position and bank size, for "question N of M" rendering.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.bank.len())
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions answered so far.
    #[must_use]
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    /// Score report for the play-through so far.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            score: self.score,
            attempted: self.attempted,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
