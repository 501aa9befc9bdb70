mod runner;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use runner::{SessionRunner, DWELL_INTERVAL};
pub use service::{Advanced, AnswerFeedback, Phase, PracticeSession, SubmitOutcome};
pub use view::{FeedbackView, SessionProgress, SessionView};
