use rand::Rng;
use thiserror::Error;
use common_types::Quiz::QuizOptions;

use super::question::QuestionType;
use super::solver::SolverError;

pub mod alternatives;
pub mod arithmetic;
pub mod equation;

pub type GenerateResult<T> = Result<T, GenerateFailure>;

#[derive(Debug, Error)]
pub enum GenerateFailure {
    #[error("gave up generating {what} after {attempts} attempts")]
    Exhausted { what: &'static str, attempts: usize },
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Wrong answers shown next to the correct one.
pub const DISTRACTORS_PER_QUESTION: usize = 5;
pub const ALTERNATIVE_MIN: i32 = 0;
pub const ALTERNATIVE_MAX: i32 = 100;
/// Random draws before falling back to the deterministic sweep.
pub const DEFAULT_ALTERNATIVE_ATTEMPTS: usize = 500;
pub const MAX_EQUATION_ATTEMPTS: usize = 100;

/// Builds every question of a session: enumerate, shuffle, truncate, then
/// attach distractors.
pub fn generate_questions<R: Rng + ?Sized>(rng: &mut R, options: &QuizOptions) -> GenerateResult<Vec<QuestionType>> {
    match options.equation_tier {
        Some(tier) => {
            let questions = equation::generate(rng, tier, options.max_questions, options.use_fractions)?;
            Ok(questions.into_iter().map(QuestionType::Equation).collect())
        },
        None => {
            let questions = arithmetic::generate(rng, options.kind, options.max_questions)?;
            Ok(questions.into_iter().map(QuestionType::Arithmetic).collect())
        },
    }
}

pub(crate) fn truncate_to<T>(mut values: Vec<T>, max_questions: Option<usize>) -> Vec<T> {
    if let Some(max_questions) = max_questions {
        values.truncate(max_questions);
    }
    values
}
