use serde::{Deserialize, Serialize};

use crate::model::Operation;

/// A single drill item.
///
/// Invariants, upheld by the generator:
/// - the arithmetic identity holds (`operand1 op operand2 == answer`);
/// - exactly one operand is the session's anchor number;
/// - subtraction never goes negative (unsigned fields make that structural).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    operand1: u8,
    operand2: u8,
    operation: Operation,
    answer: u32,
}

impl Question {
    #[must_use]
    pub fn new(operand1: u8, operand2: u8, operation: Operation, answer: u32) -> Self {
        Self {
            operand1,
            operand2,
            operation,
            answer,
        }
    }

    #[must_use]
    pub fn operand1(&self) -> u8 {
        self.operand1
    }

    #[must_use]
    pub fn operand2(&self) -> u8 {
        self.operand2
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        self.answer
    }

    /// Whether `candidate` matches the expected answer.
    ///
    /// Takes `i64` because the host parses free-form numeric input.
    #[must_use]
    pub fn is_correct(&self, candidate: i64) -> bool {
        candidate == i64::from(self.answer)
    }

    /// Render the question the way the practice screen shows it.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = ?",
            self.operand1,
            self.operation.symbol(),
            self.operand2
        )
    }

    /// True when `anchor` appears on either side of the operation.
    #[must_use]
    pub fn involves(&self, anchor: u8) -> bool {
        self.operand1 == anchor || self.operand2 == anchor
    }
}

/// Record of one submitted answer, appended to the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub user_answer: i64,
    pub is_correct: bool,
    pub elapsed_ms: u64,
}

impl AnsweredQuestion {
    /// Grade `user_answer` against the question and capture the latency.
    #[must_use]
    pub fn new(question: Question, user_answer: i64, elapsed_ms: u64) -> Self {
        Self {
            question,
            user_answer,
            is_correct: question.is_correct(user_answer),
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_operation_symbol() {
        let q = Question::new(5, 3, Operation::Multiplication, 15);
        assert_eq!(q.display(), "5 × 3 = ?");

        let q = Question::new(12, 5, Operation::Subtraction, 7);
        assert_eq!(q.display(), "12 - 5 = ?");
    }

    #[test]
    fn grading_compares_against_answer() {
        let q = Question::new(5, 4, Operation::Addition, 9);
        assert!(q.is_correct(9));
        assert!(!q.is_correct(10));
        assert!(!q.is_correct(-9));
    }

    #[test]
    fn answered_question_records_correctness() {
        let q = Question::new(5, 4, Operation::Addition, 9);

        let right = AnsweredQuestion::new(q, 9, 1200);
        assert!(right.is_correct);
        assert_eq!(right.elapsed_ms, 1200);

        let wrong = AnsweredQuestion::new(q, 8, 700);
        assert!(!wrong.is_correct);
        assert_eq!(wrong.user_answer, 8);
    }

    #[test]
    fn involves_checks_both_operands() {
        let q = Question::new(3, 5, Operation::Addition, 8);
        assert!(q.involves(5));
        assert!(q.involves(3));
        assert!(!q.involves(8));
    }
}
