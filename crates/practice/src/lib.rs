#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod sessions;

pub use drill_core::Clock;

pub use error::SessionError;
pub use generator::{generate, generate_with_thread_rng};
pub use sessions::{
    Advanced, AnswerFeedback, FeedbackView, Phase, PracticeSession, SessionProgress,
    SessionRunner, SessionView, SubmitOutcome, DWELL_INTERVAL,
};
