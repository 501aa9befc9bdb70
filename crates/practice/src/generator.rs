//! Random question generation for one practice session.

use rand::Rng;

use drill_core::model::{Operation, PracticeConfig, Question};

/// Upper bound (inclusive) for the secondary operand.
///
/// Older revisions of the app drilled 1-12 on some screens; the 0-9 range is
/// the one the shipped generator uses and it is applied consistently here.
pub const SECONDARY_OPERAND_MAX: u8 = 9;

/// Chance that a subtraction question uses the anchor as the minuend
/// (`anchor - x`) rather than subtracting the anchor from a larger total.
pub const ANCHOR_MINUEND_PROBABILITY: f64 = 0.3;

/// Generate the full question batch for `config`.
///
/// The batch always has exactly `config.count()` questions, each involving
/// the anchor number as one operand. Every call draws fresh values; seeding
/// `rng` is the only way to make the output reproducible.
pub fn generate<R: Rng>(config: &PracticeConfig, rng: &mut R) -> Vec<Question> {
    (0..config.count())
        .map(|_| generate_one(config.operation(), config.anchor(), rng))
        .collect()
}

/// [`generate`] with the thread-local RNG, for production callers.
#[must_use]
pub fn generate_with_thread_rng(config: &PracticeConfig) -> Vec<Question> {
    generate(config, &mut rand::rng())
}

fn generate_one<R: Rng>(operation: Operation, anchor: u8, rng: &mut R) -> Question {
    match operation {
        Operation::Addition => {
            let other = rng.random_range(0..=SECONDARY_OPERAND_MAX);
            let (operand1, operand2) = place_anchor(anchor, other, rng);
            Question::new(
                operand1,
                operand2,
                operation,
                u32::from(anchor) + u32::from(other),
            )
        }
        Operation::Multiplication => {
            let other = rng.random_range(0..=SECONDARY_OPERAND_MAX);
            let (operand1, operand2) = place_anchor(anchor, other, rng);
            Question::new(
                operand1,
                operand2,
                operation,
                u32::from(anchor) * u32::from(other),
            )
        }
        Operation::Subtraction => generate_subtraction(anchor, rng),
    }
}

/// Coin-flip the anchor onto either side so the drill is not positional.
fn place_anchor<R: Rng>(anchor: u8, other: u8, rng: &mut R) -> (u8, u8) {
    if rng.random_bool(0.5) {
        (anchor, other)
    } else {
        (other, anchor)
    }
}

/// Subtraction has two shapes, both guaranteed non-negative:
/// `anchor - subtrahend` (30%) and `(anchor + extra) - anchor` (70%).
fn generate_subtraction<R: Rng>(anchor: u8, rng: &mut R) -> Question {
    if rng.random_bool(ANCHOR_MINUEND_PROBABILITY) {
        let subtrahend = rng.random_range(0..=anchor);
        Question::new(
            anchor,
            subtrahend,
            Operation::Subtraction,
            u32::from(anchor - subtrahend),
        )
    } else {
        let extra = rng.random_range(0..=SECONDARY_OPERAND_MAX);
        Question::new(
            anchor + extra,
            anchor,
            Operation::Subtraction,
            u32::from(extra),
        )
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(operation: Operation, anchor: u8, count: u32) -> PracticeConfig {
        PracticeConfig::new(operation, anchor, count).unwrap()
    }

    fn holds_identity(q: &Question) -> bool {
        let (a, b) = (u32::from(q.operand1()), u32::from(q.operand2()));
        match q.operation() {
            Operation::Addition => a + b == q.answer(),
            Operation::Multiplication => a * b == q.answer(),
            Operation::Subtraction => a >= b && a - b == q.answer(),
        }
    }

    #[test]
    fn batch_has_exactly_count_questions() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in [1, 10, 30] {
            let batch = generate(&config(Operation::Addition, 5, count), &mut rng);
            assert_eq!(batch.len(), count as usize);
        }
    }

    #[test]
    fn every_question_involves_the_anchor_and_holds_its_identity() {
        let mut rng = StdRng::seed_from_u64(2);
        for operation in [
            Operation::Addition,
            Operation::Subtraction,
            Operation::Multiplication,
        ] {
            for anchor in 0..=9 {
                let batch = generate(&config(operation, anchor, 50), &mut rng);
                for q in &batch {
                    assert!(q.involves(anchor), "{} lacks anchor {anchor}", q.display());
                    assert!(holds_identity(q), "{} identity broken", q.display());
                }
            }
        }
    }

    #[test]
    fn secondary_operand_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = generate(&config(Operation::Multiplication, 4, 200), &mut rng);
        for q in &batch {
            let other = if q.operand1() == 4 { q.operand2() } else { q.operand1() };
            assert!(other <= SECONDARY_OPERAND_MAX);
        }
    }

    #[test]
    fn addition_presents_the_anchor_on_both_sides() {
        let mut rng = StdRng::seed_from_u64(4);
        let batch = generate(&config(Operation::Addition, 7, 200), &mut rng);
        assert!(batch.iter().any(|q| q.operand1() == 7));
        assert!(batch.iter().any(|q| q.operand2() == 7));
    }

    #[test]
    fn subtraction_produces_both_drill_shapes() {
        let mut rng = StdRng::seed_from_u64(5);
        let batch = generate(&config(Operation::Subtraction, 6, 300), &mut rng);

        // anchor as minuend: 6 - x; anchor as subtrahend: total - 6.
        assert!(batch.iter().any(|q| q.operand1() == 6));
        assert!(batch.iter().any(|q| q.operand2() == 6 && q.operand1() > 6));
        for q in &batch {
            assert!(q.operand1() >= q.operand2(), "negative answer shape");
        }
    }

    #[test]
    fn zero_anchor_subtraction_is_degenerate_but_valid() {
        let mut rng = StdRng::seed_from_u64(6);
        let batch = generate(&config(Operation::Subtraction, 0, 100), &mut rng);
        for q in &batch {
            assert!(holds_identity(q));
            assert!(q.involves(0));
        }
    }

    #[test]
    fn thread_rng_entry_point_matches_the_contract() {
        let batch = generate_with_thread_rng(&config(Operation::Addition, 3, 10));
        assert_eq!(batch.len(), 10);
        assert!(batch.iter().all(|q| q.involves(3)));
    }
}
