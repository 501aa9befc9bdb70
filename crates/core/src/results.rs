//! Pure result statistics for a completed session.

use serde::{Deserialize, Serialize};

use crate::model::AnsweredQuestion;

/// Percentage at or above which the results screen celebrates.
pub const GOOD_SCORE_PERCENT: u32 = 80;

/// Sum of per-question times in milliseconds. Empty input sums to zero.
#[must_use]
pub fn total_time(times: &[u64]) -> u64 {
    times.iter().sum()
}

/// Average time per question in milliseconds.
///
/// Returns `0.0` for a zero count rather than dividing by zero.
#[must_use]
pub fn average_time(total_ms: u64, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total_ms as f64 / f64::from(count)
}

/// Share of correct answers as a whole percentage, rounded half away from
/// zero (`1/3 -> 33`, `2/3 -> 67`). Returns `0` for a zero total.
#[must_use]
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(correct) / f64::from(total) * 100.0).round() as u32
}

/// Format a millisecond duration as `"1m 30s"` or `"45s"`.
///
/// Sub-second remainders are floored away; the seconds component is not
/// zero-padded (`60_000` formats as `"1m 0s"`).
#[must_use]
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let remaining = seconds % 60;

    if minutes > 0 {
        format!("{minutes}m {remaining}s")
    } else {
        format!("{remaining}s")
    }
}

/// Aggregate outcome of one session, derived once from the full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    correct_count: u32,
    total_questions: u32,
    total_time_ms: u64,
    average_time_ms: f64,
}

impl SessionResult {
    /// Reduce an answer history to its summary statistics.
    #[must_use]
    pub fn from_history(history: &[AnsweredQuestion]) -> Self {
        let times: Vec<u64> = history.iter().map(|a| a.elapsed_ms).collect();
        let total_time_ms = total_time(&times);
        let total_questions = history.len() as u32;
        let correct_count = history.iter().filter(|a| a.is_correct).count() as u32;

        Self {
            correct_count,
            total_questions,
            total_time_ms,
            average_time_ms: average_time(total_time_ms, total_questions),
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn total_time_ms(&self) -> u64 {
        self.total_time_ms
    }

    #[must_use]
    pub fn average_time_ms(&self) -> f64 {
        self.average_time_ms
    }

    /// Correct-answer share as a whole percentage.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        percentage(self.correct_count, self.total_questions)
    }

    #[must_use]
    pub fn formatted_total_time(&self) -> String {
        format_duration(self.total_time_ms)
    }

    #[must_use]
    pub fn formatted_average_time(&self) -> String {
        format_duration(self.average_time_ms as u64)
    }

    /// Whether the score clears the celebration threshold on the results
    /// screen.
    #[must_use]
    pub fn is_good_score(&self) -> bool {
        self.percentage() >= GOOD_SCORE_PERCENT
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
