use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;

use drill_core::model::{AnsweredQuestion, PracticeConfig, Question};
use drill_core::results::SessionResult;

use crate::error::SessionError;
use crate::generator;
use super::view::SessionProgress;

//
// ─── PHASES AND TRANSITION RESULTS ─────────────────────────────────────────────
//

/// Where the session currently is.
///
/// Submissions are only legal in `AwaitingAnswer`; `Feedback` gates input
/// until the dwell interval elapses and the session is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer { index: usize },
    Feedback { index: usize, is_correct: bool },
    Completed,
}

/// What a grading pass tells the host about the submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub index: usize,
    pub is_correct: bool,
    pub correct_answer: u32,
    pub elapsed_ms: u64,
}

/// Outcome of a `submit` call.
///
/// Empty or non-numeric input is ignored rather than treated as an error;
/// the learner just types again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Graded(AnswerFeedback),
}

/// Outcome of advancing past a feedback phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Advanced {
    NextQuestion { index: usize },
    Finished(SessionResult),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state machine for one timed drill session.
///
/// Owns the generated question batch and the answer history exclusively;
/// a retry builds a brand-new session. Timestamps come in as parameters so
/// the orchestration layer's clock stays in charge of time.
pub struct PracticeSession {
    config: PracticeConfig,
    questions: Vec<Question>,
    history: Vec<AnsweredQuestion>,
    phase: Phase,
    question_started_at: DateTime<Utc>,
    result: Option<SessionResult>,
}

impl PracticeSession {
    /// Start a session, generating the full batch with the thread RNG.
    #[must_use]
    pub fn new(config: PracticeConfig, started_at: DateTime<Utc>) -> Self {
        let questions = generator::generate_with_thread_rng(&config);
        Self::from_batch(config, questions, started_at)
    }

    /// Start a session with a caller-provided RNG, for reproducible batches.
    #[must_use]
    pub fn new_with_rng<R: Rng>(
        config: PracticeConfig,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        let questions = generator::generate(&config, rng);
        Self::from_batch(config, questions, started_at)
    }

    fn from_batch(
        config: PracticeConfig,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            config,
            questions,
            history: Vec::new(),
            phase: Phase::AwaitingAnswer { index: 0 },
            question_started_at: started_at,
            result: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn history(&self) -> &[AnsweredQuestion] {
        &self.history
    }

    /// Final result, available once the session is complete.
    #[must_use]
    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    /// Zero-based index of the question currently on screen, if any.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingAnswer { index } | Phase::Feedback { index, .. } => Some(index),
            Phase::Completed => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().map(|i| &self.questions[i])
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Summary of how far along the session is.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.history.len(),
            remaining: self.questions.len().saturating_sub(self.history.len()),
            is_complete: self.is_complete(),
        }
    }

    /// Whether a back navigation is honored right now.
    ///
    /// Feedback gates navigation the same way it gates input; navigating
    /// back never alters history, it only tells the host to drop the
    /// session.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !matches!(self.phase, Phase::Feedback { .. })
    }

    /// Grade raw input against the current question.
    ///
    /// Empty or non-numeric input is a no-op (`SubmitOutcome::Ignored`).
    /// On a valid parse the answer is graded, its latency recorded from the
    /// question start timestamp, and the session moves into `Feedback`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the last advance and
    /// `SessionError::FeedbackPending` while feedback is on screen.
    pub fn submit(
        &mut self,
        raw: &str,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, SessionError> {
        let index = match self.phase {
            Phase::AwaitingAnswer { index } => index,
            Phase::Feedback { .. } => return Err(SessionError::FeedbackPending),
            Phase::Completed => return Err(SessionError::Completed),
        };

        let Ok(user_answer) = raw.trim().parse::<i64>() else {
            return Ok(SubmitOutcome::Ignored);
        };

        let question = self.questions[index];
        let elapsed_ms = u64::try_from(
            now.signed_duration_since(self.question_started_at)
                .num_milliseconds(),
        )
        .unwrap_or(0);

        let answered = AnsweredQuestion::new(question, user_answer, elapsed_ms);
        let feedback = AnswerFeedback {
            index,
            is_correct: answered.is_correct,
            correct_answer: question.answer(),
            elapsed_ms,
        };

        self.history.push(answered);
        self.phase = Phase::Feedback {
            index,
            is_correct: feedback.is_correct,
        };

        Ok(SubmitOutcome::Graded(feedback))
    }

    /// Leave the feedback phase, either onto the next question or into
    /// completion. The caller decides when the dwell interval has elapsed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoFeedbackToAdvance` unless the session is in
    /// `Feedback`.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advanced, SessionError> {
        let Phase::Feedback { index, .. } = self.phase else {
            return Err(SessionError::NoFeedbackToAdvance);
        };

        let next = index + 1;
        if next < self.questions.len() {
            self.phase = Phase::AwaitingAnswer { index: next };
            self.question_started_at = now;
            Ok(Advanced::NextQuestion { index: next })
        } else {
            let result = SessionResult::from_history(&self.history);
            self.result = Some(result.clone());
            self.phase = Phase::Completed;
            Ok(Advanced::Finished(result))
        }
    }
}

impl fmt::Debug for PracticeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeSession")
            .field("config", &self.config)
            .field("questions_len", &self.questions.len())
            .field("history_len", &self.history.len())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
