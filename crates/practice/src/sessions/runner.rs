use std::fmt;
use std::time::Duration;

use rand::Rng;

use drill_core::model::PracticeConfig;
use drill_core::results::SessionResult;
use drill_core::time::Clock;

use crate::error::SessionError;
use super::service::{Advanced, PracticeSession, SubmitOutcome};
use super::view::SessionView;

/// How long answer feedback stays on screen before auto-advancing.
pub const DWELL_INTERVAL: Duration = Duration::from_millis(1500);

type FinishCallback = Box<dyn FnOnce(SessionResult) + Send>;

/// Drives a [`PracticeSession`] against real time.
///
/// Owns the clock, the dwell timer, and the one-shot completion callback.
/// The dwell is a plain `tokio::time::sleep` inside [`submit`]: dropping the
/// in-flight future (host navigates away mid-feedback) cancels the pending
/// auto-advance, so no transition ever fires against a torn-down session.
///
/// [`submit`]: SessionRunner::submit
pub struct SessionRunner {
    session: PracticeSession,
    clock: Clock,
    dwell: Duration,
    on_finish: Option<FinishCallback>,
}

impl SessionRunner {
    /// Start a runner with the system clock and default dwell interval.
    #[must_use]
    pub fn start(config: PracticeConfig) -> Self {
        let clock = Clock::default();
        Self {
            session: PracticeSession::new(config, clock.now()),
            clock,
            dwell: DWELL_INTERVAL,
            on_finish: None,
        }
    }

    /// Start with a caller-provided clock and RNG, for deterministic tests.
    #[must_use]
    pub fn start_with<R: Rng>(config: PracticeConfig, clock: Clock, rng: &mut R) -> Self {
        Self {
            session: PracticeSession::new_with_rng(config, rng, clock.now()),
            clock,
            dwell: DWELL_INTERVAL,
            on_finish: None,
        }
    }

    #[must_use]
    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    /// Register the completion callback. Invoked exactly once, when the last
    /// feedback dwell elapses.
    #[must_use]
    pub fn on_finish(mut self, callback: impl FnOnce(SessionResult) + Send + 'static) -> Self {
        self.on_finish = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from_session(&self.session)
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn result(&self) -> Option<&SessionResult> {
        self.session.result()
    }

    /// Whether a back navigation is honored right now (gated during
    /// feedback, like submissions).
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.session.can_go_back()
    }

    /// Advance a fixed clock; lets tests simulate thinking time.
    pub fn advance_clock(&mut self, delta: chrono::Duration) {
        self.clock.advance(delta);
    }

    /// Submit raw input, and on a graded answer hold the feedback for the
    /// dwell interval before advancing. When the last question's dwell
    /// elapses the completion callback fires with the session result.
    ///
    /// Cancel-safe: dropping this future during the dwell leaves the session
    /// in `Feedback` and fires nothing.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the state machine; see
    /// [`PracticeSession::submit`].
    pub async fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        let outcome = self.session.submit(raw, self.clock.now())?;

        if matches!(outcome, SubmitOutcome::Graded(_)) {
            tokio::time::sleep(self.dwell).await;
            self.clock.advance(
                chrono::Duration::from_std(self.dwell).unwrap_or_else(|_| chrono::Duration::zero()),
            );

            if let Advanced::Finished(result) = self.session.advance(self.clock.now())? {
                if let Some(callback) = self.on_finish.take() {
                    callback(result);
                }
            }
        }

        Ok(outcome)
    }
}

impl fmt::Debug for SessionRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRunner")
            .field("session", &self.session)
            .field("dwell", &self.dwell)
            .field("has_on_finish", &self.on_finish.is_some())
            .finish()
    }
}
