use rand::Rng;
use common_types::Quiz::QuizKind;

use crate::generate::{
    formatter,
    helper,
    question::ArithmeticQuestion,
};
use super::{
    alternatives::{self, AlternativeSettings},
    truncate_to,
    GenerateResult,
};

/// Every operand pair for `kind`, in enumeration order.
///
/// × and ÷ walk `i, j ∈ [1, 9]`; ÷ asks `i·j ÷ j` so the quotient is exact.
/// + and − walk the triangle `i ∈ [0, 100], j ∈ [0, i]`; + asks `(i − j) + j`
/// and − asks `i − j`, so no result is negative and no pair repeats.
pub fn candidate_space(kind: QuizKind) -> Vec<ArithmeticQuestion> {
    let mut questions = Vec::new();
    match kind {
        QuizKind::Multiplication | QuizKind::Division => {
            for i in 1..10 {
                for j in 1..10 {
                    let question = match kind {
                        QuizKind::Division => ArithmeticQuestion::new(kind, i * j, j, i),
                        _ => ArithmeticQuestion::new(kind, i, j, i * j),
                    };
                    questions.push(question);
                }
            }
        },
        QuizKind::Addition | QuizKind::Subtraction => {
            for i in (0..=100).rev() {
                for j in (0..=i).rev() {
                    let question = match kind {
                        QuizKind::Addition => ArithmeticQuestion::new(kind, i - j, j, i),
                        _ => ArithmeticQuestion::new(kind, i, j, i - j),
                    };
                    questions.push(question);
                }
            }
        },
    }
    questions
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, kind: QuizKind, max_questions: Option<usize>) -> GenerateResult<Vec<ArithmeticQuestion>> {
    let candidates = helper::shuffled(rng, candidate_space(kind));
    let mut questions = truncate_to(candidates, max_questions);
    tracing::debug!("Generating alternatives for {} {kind} questions", questions.len());

    let table = alternatives::table_for(kind);
    for question in questions.iter_mut() {
        question.textual = formatter::format_arithmetic_raw(kind, question.x, question.y);
        let mut values = alternatives::generate_distractors(rng, table, question, AlternativeSettings::default())?;
        values.push(question.correct);
        question.alternatives = helper::shuffled(rng, values);
    }
    Ok(questions)
}
