//! Shared error types for the practice crate.

use thiserror::Error;

use drill_core::model::ConfigError;

/// Errors emitted by the session state machine and runner.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
    #[error("answer feedback is still being shown")]
    FeedbackPending,
    #[error("no feedback to advance past")]
    NoFeedbackToAdvance,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
