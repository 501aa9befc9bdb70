use serde::Serialize;

use drill_core::model::Question;

use super::service::{Phase, PracticeSession};

/// Aggregated view of session progress, useful for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// How far along the session is, 0-100.
    #[must_use]
    pub fn percent_complete(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.answered as f64 / self.total as f64 * 100.0).round() as u32
    }
}

/// What the feedback overlay needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackView {
    pub is_correct: bool,
    pub correct_answer: u32,
}

/// Read-only projection of the current session state.
///
/// Presentation-agnostic: no pre-formatted strings beyond the question
/// display, no localization assumptions. The host formats as it likes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    /// Zero-based index of the question on screen; `total` once complete.
    pub index: usize,
    pub total: usize,
    pub question: Option<Question>,
    pub feedback: Option<FeedbackView>,
    pub progress: SessionProgress,
}

impl SessionView {
    #[must_use]
    pub fn from_session(session: &PracticeSession) -> Self {
        let feedback = match session.phase() {
            Phase::Feedback { is_correct, .. } => Some(FeedbackView {
                is_correct,
                correct_answer: session
                    .current_question()
                    .map(Question::answer)
                    .unwrap_or_default(),
            }),
            _ => None,
        };

        Self {
            index: session.current_index().unwrap_or(session.total_questions()),
            total: session.total_questions(),
            question: session.current_question().copied(),
            feedback,
            progress: session.progress(),
        }
    }
}
