/*
 *
 * Distractor strategies for arithmetic questions. Each kind owns a fixed,
 * ordered table; a draw walks the cumulative weights.
 *
 */

use rand::Rng;
use common_types::Quiz::QuizKind;

use crate::generate::{
    helper,
    question::ArithmeticQuestion,
};
use super::{
    GenerateFailure,
    GenerateResult,
    ALTERNATIVE_MAX,
    ALTERNATIVE_MIN,
    DEFAULT_ALTERNATIVE_ATTEMPTS,
    DISTRACTORS_PER_QUESTION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Add(i32),
    Subtract(i32),
    /// `(x + p)·y` or `x·(y + p)`
    Multiply(i32),
    /// `⌊(x + p)/y⌋` or `⌊x/(y + p)⌋`
    Divide(i32),
    /// `correct - 10 + U[0, 20)`
    Nearby,
}

#[derive(Debug, Clone, Copy)]
pub struct WeightedStrategy {
    pub weight: f64,
    pub strategy: Strategy,
}

const fn weighted(weight: f64, strategy: Strategy) -> WeightedStrategy {
    WeightedStrategy { weight, strategy }
}

pub const ADDITIVE_TABLE: [WeightedStrategy; 7] = [
    weighted(0.15, Strategy::Add(10)),
    weighted(0.15, Strategy::Subtract(10)),
    weighted(0.15, Strategy::Add(1)),
    weighted(0.15, Strategy::Subtract(1)),
    weighted(0.15, Strategy::Add(2)),
    weighted(0.15, Strategy::Subtract(2)),
    weighted(0.10, Strategy::Nearby),
];

pub const MULTIPLICATIVE_TABLE: [WeightedStrategy; 7] = [
    weighted(0.15, Strategy::Add(10)),
    weighted(0.15, Strategy::Subtract(10)),
    weighted(0.15, Strategy::Add(1)),
    weighted(0.15, Strategy::Subtract(1)),
    weighted(0.15, Strategy::Multiply(1)),
    weighted(0.15, Strategy::Multiply(-1)),
    weighted(0.10, Strategy::Nearby),
];

pub const DIVISION_TABLE: [WeightedStrategy; 7] = [
    weighted(0.15, Strategy::Add(10)),
    weighted(0.15, Strategy::Subtract(10)),
    weighted(0.15, Strategy::Add(1)),
    weighted(0.15, Strategy::Subtract(1)),
    weighted(0.15, Strategy::Divide(1)),
    weighted(0.15, Strategy::Divide(-1)),
    weighted(0.10, Strategy::Nearby),
];

pub fn table_for(kind: QuizKind) -> &'static [WeightedStrategy] {
    match kind {
        QuizKind::Addition | QuizKind::Subtraction => &ADDITIVE_TABLE,
        QuizKind::Multiplication => &MULTIPLICATIVE_TABLE,
        QuizKind::Division => &DIVISION_TABLE,
    }
}

/// First entry whose cumulative weight reaches `roll`; the first entry when
/// rounding leaves `roll` above the total.
pub fn pick_weighted(table: &[WeightedStrategy], roll: f64) -> Strategy {
    let mut sum = 0.0;
    for entry in table.iter() {
        sum += entry.weight;
        if roll <= sum {
            return entry.strategy;
        }
    }
    table[0].strategy
}

/// `None` when the strategy has nothing to offer, e.g. a zero divisor.
pub fn apply<R: Rng + ?Sized>(rng: &mut R, strategy: Strategy, question: &ArithmeticQuestion) -> Option<i32> {
    let (x, y, correct) = (question.x, question.y, question.correct);
    match strategy {
        Strategy::Add(param) => Some(correct + param),
        Strategy::Subtract(param) => Some(correct - param),
        Strategy::Multiply(param) => {
            if helper::coin_flip(rng) {
                Some((x + param) * y)
            } else {
                Some((y + param) * x)
            }
        },
        Strategy::Divide(param) => {
            let (dividend, divisor) = if helper::coin_flip(rng) {
                (x + param, y)
            } else {
                (x, y + param)
            };
            if divisor == 0 {
                return None;
            }
            Some(dividend.div_euclid(divisor))
        },
        Strategy::Nearby => Some(helper::gen_nearby_i32(rng, correct)),
    }
}

/// Bounds for one distractor search.
#[derive(Debug, Clone, Copy)]
pub struct AlternativeSettings {
    pub count: usize,
    pub min: i32,
    pub max: i32,
    pub attempts: usize,
}

impl Default for AlternativeSettings {
    fn default() -> Self {
        Self {
            count: DISTRACTORS_PER_QUESTION,
            min: ALTERNATIVE_MIN,
            max: ALTERNATIVE_MAX,
            attempts: DEFAULT_ALTERNATIVE_ATTEMPTS,
        }
    }
}

impl AlternativeSettings {
    fn accepts(&self, candidate: i32, correct: i32, taken: &[i32]) -> bool {
        candidate >= self.min && candidate <= self.max && candidate != correct && !taken.contains(&candidate)
    }
}

/// Draws distractors from the weighted table, then sweeps outwards from the
/// correct answer if the draws run dry.
pub fn generate_distractors<R: Rng + ?Sized>(
    rng: &mut R,
    table: &[WeightedStrategy],
    question: &ArithmeticQuestion,
    settings: AlternativeSettings,
) -> GenerateResult<Vec<i32>> {
    let mut distractors = Vec::with_capacity(settings.count + 1);

    let mut attempts = 0;
    while distractors.len() < settings.count && attempts < settings.attempts {
        attempts += 1;
        let strategy = pick_weighted(table, rng.gen::<f64>());
        let Some(candidate) = apply(rng, strategy, question) else {
            continue;
        };
        if settings.accepts(candidate, question.correct, &distractors) {
            distractors.push(candidate);
        }
    }

    if distractors.len() < settings.count {
        tracing::warn!(
            "Only {} of {} distractors for {} after {attempts} draws, sweeping",
            distractors.len(), settings.count, question.textual,
        );
        let reach = (settings.max - settings.min).max(0);
        for offset in 1..=reach {
            for candidate in [question.correct + offset, question.correct - offset] {
                if distractors.len() < settings.count && settings.accepts(candidate, question.correct, &distractors) {
                    distractors.push(candidate);
                }
            }
        }
    }

    if distractors.len() < settings.count {
        tracing::error!("No room for {} distractors in [{}, {}]", settings.count, settings.min, settings.max);
        return Err(GenerateFailure::Exhausted { what: "distractors", attempts });
    }
    Ok(distractors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn question(kind: QuizKind, x: i32, y: i32, correct: i32) -> ArithmeticQuestion {
        ArithmeticQuestion::new(kind, x, y, correct)
    }

    #[test]
    fn tables_sum_to_one() {
        for kind in [QuizKind::Addition, QuizKind::Subtraction, QuizKind::Multiplication, QuizKind::Division] {
            let total: f64 = table_for(kind).iter().map(|entry| entry.weight).sum();
            assert!((total - 1.0).abs() < 1e-9, "{kind} sums to {total}");
        }
    }

    #[test]
    fn cumulative_lookup() {
        assert_eq!(pick_weighted(&ADDITIVE_TABLE, 0.0), Strategy::Add(10));
        assert_eq!(pick_weighted(&ADDITIVE_TABLE, 0.15), Strategy::Add(10));
        assert_eq!(pick_weighted(&ADDITIVE_TABLE, 0.16), Strategy::Subtract(10));
        assert_eq!(pick_weighted(&MULTIPLICATIVE_TABLE, 0.70), Strategy::Multiply(1));
        assert_eq!(pick_weighted(&DIVISION_TABLE, 0.95), Strategy::Nearby);
        assert_eq!(pick_weighted(&DIVISION_TABLE, 1.5), Strategy::Add(10));
    }

    #[test]
    fn structural_strategies() {
        let mut rng = StdRng::seed_from_u64(3);
        let product = question(QuizKind::Multiplication, 7, 8, 56);
        for _ in 0..50 {
            let v = apply(&mut rng, Strategy::Multiply(1), &product).unwrap();
            assert!(v == 64 || v == 63);
            let v = apply(&mut rng, Strategy::Multiply(-1), &product).unwrap();
            assert!(v == 48 || v == 49);
        }
        // 9 ÷ 1: shrinking the divisor to zero yields nothing
        let quotient = question(QuizKind::Division, 9, 1, 9);
        for _ in 0..50 {
            let v = apply(&mut rng, Strategy::Divide(-1), &quotient);
            assert!(v == None || v == Some(8));
        }
    }

    #[test]
    fn distractors_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for correct in [0, 1, 50, 99, 100] {
            let q = question(QuizKind::Addition, correct, 0, correct);
            let distractors = generate_distractors(&mut rng, &ADDITIVE_TABLE, &q, AlternativeSettings::default()).unwrap();
            assert_eq!(distractors.len(), DISTRACTORS_PER_QUESTION);
            for (i, v) in distractors.iter().enumerate() {
                assert!((0..=100).contains(v));
                assert_ne!(*v, correct);
                assert!(!distractors[i + 1..].contains(v));
            }
        }
    }

    #[test]
    fn sweep_takes_over_without_draws() {
        let mut rng = StdRng::seed_from_u64(5);
        let q = question(QuizKind::Addition, 0, 0, 0);
        let settings = AlternativeSettings { attempts: 0, ..AlternativeSettings::default() };
        let distractors = generate_distractors(&mut rng, &ADDITIVE_TABLE, &q, settings).unwrap();
        assert_eq!(distractors, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn impossible_range_is_reported() {
        let mut rng = StdRng::seed_from_u64(5);
        let q = question(QuizKind::Addition, 1, 1, 2);
        let settings = AlternativeSettings { min: 0, max: 3, attempts: 20, ..AlternativeSettings::default() };
        match generate_distractors(&mut rng, &ADDITIVE_TABLE, &q, settings) {
            Err(GenerateFailure::Exhausted { what, .. }) => assert_eq!(what, "distractors"),
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }
}
