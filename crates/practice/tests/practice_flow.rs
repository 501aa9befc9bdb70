use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use drill_core::model::{Operation, PracticeConfig};
use drill_core::results::SessionResult;
use drill_core::time::fixed_clock;
use practice::{SessionError, SessionRunner, SubmitOutcome};

fn addition_runner(count: u32) -> SessionRunner {
    let config = PracticeConfig::new(Operation::Addition, 5, count).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    SessionRunner::start_with(config, fixed_clock(), &mut rng)
}

fn current_answer(runner: &SessionRunner) -> String {
    runner.view().question.unwrap().answer().to_string()
}

#[tokio::test(start_paused = true)]
async fn full_session_finishes_once_with_aggregate_result() {
    let finish_count = Arc::new(AtomicUsize::new(0));
    let finished: Arc<Mutex<Option<SessionResult>>> = Arc::new(Mutex::new(None));

    let mut runner = {
        let finish_count = Arc::clone(&finish_count);
        let finished = Arc::clone(&finished);
        addition_runner(3).on_finish(move |result| {
            finish_count.fetch_add(1, Ordering::SeqCst);
            *finished.lock().unwrap() = Some(result);
        })
    };

    for _ in 0..3 {
        // One simulated second of thinking per question.
        runner.advance_clock(chrono::Duration::milliseconds(1000));
        let outcome = runner.submit(&current_answer(&runner)).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Graded(f) if f.is_correct));
    }

    assert!(runner.is_complete());
    assert_eq!(finish_count.load(Ordering::SeqCst), 1);

    let result = finished.lock().unwrap().clone().unwrap();
    assert_eq!(result.correct_count(), 3);
    assert_eq!(result.total_questions(), 3);
    assert_eq!(result.total_time_ms(), 3000);
    assert_eq!(result.average_time_ms(), 1000.0);
    assert_eq!(result.percentage(), 100);

    let err = runner.submit("1").await.unwrap_err();
    assert!(matches!(err, SessionError::Completed));
}

#[tokio::test(start_paused = true)]
async fn dwell_elapses_then_the_next_question_appears() {
    let mut runner = addition_runner(2);

    let outcome = runner.submit("999999").await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Graded(f) if !f.is_correct));

    // submit() resolves only after the dwell, so feedback is gone and the
    // session has moved on.
    let view = runner.view();
    assert!(view.feedback.is_none());
    assert_eq!(view.index, 1);
    assert!(view.question.is_some());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_dwell_future_cancels_the_auto_advance() {
    let mut runner = addition_runner(2);
    let answer = current_answer(&runner);

    // Tear the submit future down before the 1500ms dwell can elapse.
    let cancelled = tokio::time::timeout(Duration::from_millis(10), runner.submit(&answer)).await;
    assert!(cancelled.is_err());

    // The answer was recorded, but no advance fired: still dwelling.
    let view = runner.view();
    assert_eq!(view.index, 0);
    assert!(view.feedback.is_some());
    assert!(!runner.can_go_back());

    let err = runner.submit("3").await.unwrap_err();
    assert!(matches!(err, SessionError::FeedbackPending));
}

#[tokio::test(start_paused = true)]
async fn blank_input_is_ignored_without_any_dwell() {
    let mut runner = addition_runner(1);

    let outcome = runner.submit("   ").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Ignored);

    let view = runner.view();
    assert_eq!(view.index, 0);
    assert!(view.feedback.is_none());
    assert!(runner.can_go_back());
}
