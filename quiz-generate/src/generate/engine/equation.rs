/*
 *
 * Equation mode. Every question is a freshly drawn linear equation, and its
 * distractors are the roots of further equations drawn from the same tier.
 *
 * BASIC:        3x = 12
 * INTERMEDIATE: (x − 3)·4 = 13
 * ADVANCED:     (x + 2)·5 = (x − 1)·3, both sides simplified
 *
 */

use rand::Rng;
use common_types::Quiz::EquationTier;

use crate::generate::{
    checker,
    helper,
    question::EquationQuestion,
    solver::{Equation, Expression, Fraction},
};
use super::{
    truncate_to,
    GenerateFailure,
    GenerateResult,
    DEFAULT_ALTERNATIVE_ATTEMPTS,
    DISTRACTORS_PER_QUESTION,
    MAX_EQUATION_ATTEMPTS,
};

/// Size of the triangular index space `i ∈ [0, 50], j ∈ [0, i]`.
pub const EQUATION_CANDIDATES: usize = 51 * 52 / 2;

/// Largest integer root a basic equation gets when fractions are off.
const BASIC_INTEGER_ROOT_MAX: i64 = 12;

fn literal<R: Rng + ?Sized>(rng: &mut R, use_fractions: bool) -> GenerateResult<Fraction> {
    if use_fractions {
        Ok(Fraction::new(helper::gen_nonzero_i64(rng, 1, 7), helper::gen_nonzero_i64(rng, 3, 7))?)
    } else {
        Ok(Fraction::integer(helper::gen_nonzero_i64(rng, 1, 7)))
    }
}

/// Adds or subtracts a random literal.
fn random_shift<R: Rng + ?Sized>(rng: &mut R, expression: &Expression, use_fractions: bool) -> GenerateResult<Expression> {
    let term = literal(rng, use_fractions)?;
    if helper::coin_flip(rng) {
        Ok(expression.add(term))
    } else {
        Ok(expression.subtract(term))
    }
}

fn build_equation<R: Rng + ?Sized>(rng: &mut R, variable: &str, tier: EquationTier, use_fractions: bool) -> GenerateResult<Equation> {
    let expression = Expression::variable(variable);
    let equation = match tier {
        EquationTier::Basic => {
            let coefficient = helper::gen_nonzero_i64(rng, 1, 7);
            let constant = if use_fractions {
                literal(rng, true)?
            } else {
                // keep the root integral
                Fraction::integer(coefficient * rng.gen_range(1..=BASIC_INTEGER_ROOT_MAX))
            };
            Equation::new(expression.multiply(coefficient), constant)
        },
        EquationTier::Intermediate => {
            let lhs = random_shift(rng, &expression, use_fractions)?
                .multiply(helper::gen_nonzero_i64(rng, 1, 3));
            Equation::new(lhs, literal(rng, use_fractions)?)
        },
        EquationTier::Advanced => {
            let lhs = random_shift(rng, &expression, use_fractions)?;
            let rhs = random_shift(rng, &expression, use_fractions)?;
            let lhs = lhs.multiply(helper::gen_nonzero_i64(rng, 1, 7)).simplify();
            let rhs = rhs.multiply(helper::gen_nonzero_i64(rng, 1, 7)).simplify();
            Equation::new(lhs, rhs)
        },
    };
    Ok(equation)
}

/// Draws equations until one has a unique root other than `0` or `1`.
pub fn generate_equation<R: Rng + ?Sized>(
    rng: &mut R,
    variable: &str,
    tier: EquationTier,
    use_fractions: bool,
) -> GenerateResult<(Equation, Fraction)> {
    for _ in 0..MAX_EQUATION_ATTEMPTS {
        let equation = build_equation(rng, variable, tier, use_fractions)?;
        match equation.solve_for(variable) {
            Ok(solution) if !checker::is_degenerate_solution(&solution.to_string()) => return Ok((equation, solution)),
            Ok(solution) => tracing::trace!("Discarding {equation}, trivial root {solution}"),
            Err(err) => tracing::trace!("Discarding {equation}, {err}"),
        }
    }
    tracing::error!("No usable {tier} equation in {variable} after {MAX_EQUATION_ATTEMPTS} attempts");
    Err(GenerateFailure::Exhausted { what: "equation", attempts: MAX_EQUATION_ATTEMPTS })
}

/// Roots of other equations from the same tier. Falls back to `correct ± k`
/// once `attempts` draws have not produced enough distinct roots.
pub fn generate_distractors<R: Rng + ?Sized>(
    rng: &mut R,
    variable: &str,
    correct: Fraction,
    tier: EquationTier,
    use_fractions: bool,
    attempts: usize,
) -> GenerateResult<Vec<String>> {
    let correct_raw = correct.to_string();
    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTORS_PER_QUESTION + 1);

    let mut tries = 0;
    while distractors.len() < DISTRACTORS_PER_QUESTION && tries < attempts {
        tries += 1;
        let (_, solution) = generate_equation(rng, variable, tier, use_fractions)?;
        let solution = solution.to_string();
        if solution != correct_raw && !distractors.contains(&solution) {
            distractors.push(solution);
        }
    }

    if distractors.len() < DISTRACTORS_PER_QUESTION {
        tracing::warn!("Only {} distinct roots near {correct_raw} after {tries} equations, offsetting", distractors.len());
        let reach = (DISTRACTORS_PER_QUESTION * 2) as i64;
        for offset in 1..=reach {
            for candidate in [correct + Fraction::integer(offset), correct - Fraction::integer(offset)] {
                let candidate = candidate.to_string();
                if distractors.len() < DISTRACTORS_PER_QUESTION
                    && !checker::is_degenerate_solution(&candidate)
                    && candidate != correct_raw
                    && !distractors.contains(&candidate)
                {
                    distractors.push(candidate);
                }
            }
        }
    }

    if distractors.len() < DISTRACTORS_PER_QUESTION {
        return Err(GenerateFailure::Exhausted { what: "equation distractors", attempts: tries });
    }
    Ok(distractors)
}

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    tier: EquationTier,
    max_questions: Option<usize>,
    use_fractions: bool,
) -> GenerateResult<Vec<EquationQuestion>> {
    // Candidates are independent draws, so drawing only the ones that survive
    // truncation gives the same distribution.
    let count = max_questions.map_or(EQUATION_CANDIDATES, |max| max.min(EQUATION_CANDIDATES));
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let variable = helper::random_unknown(rng);
        let (equation, solution) = generate_equation(rng, variable, tier, use_fractions)?;
        drawn.push((EquationQuestion::new(variable, equation.to_string(), solution.to_string()), solution));
    }
    let drawn = truncate_to(helper::shuffled(rng, drawn), max_questions);
    tracing::debug!("Generating alternatives for {} {tier} equations", drawn.len());

    let mut questions = Vec::with_capacity(drawn.len());
    for (mut question, solution) in drawn {
        let mut values = generate_distractors(rng, &question.variable, solution, tier, use_fractions, DEFAULT_ALTERNATIVE_ATTEMPTS)?;
        values.push(question.correct.clone());
        question.alternatives = helper::shuffled(rng, values);
        questions.push(question);
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::std::collections::HashSet;
    use rand::{rngs::StdRng, SeedableRng};

    const TIERS: [EquationTier; 3] = [EquationTier::Basic, EquationTier::Intermediate, EquationTier::Advanced];

    #[test]
    fn candidate_count_matches_triangle() {
        let mut count = 0;
        for i in (0..=50).rev() {
            for _ in (0..=i).rev() {
                count += 1;
            }
        }
        assert_eq!(EQUATION_CANDIDATES, count);
    }

    #[test]
    fn roots_are_never_trivial() {
        let mut rng = StdRng::seed_from_u64(12);
        for tier in TIERS {
            for use_fractions in [false, true] {
                for _ in 0..200 {
                    let (equation, solution) = generate_equation(&mut rng, "x", tier, use_fractions).unwrap();
                    assert_eq!(equation.solve_for("x").unwrap(), solution);
                    assert!(!checker::is_degenerate_solution(&solution.to_string()));
                }
            }
        }
    }

    #[test]
    fn basic_shapes() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let (equation, _) = generate_equation(&mut rng, "a", EquationTier::Basic, false).unwrap();
            assert!(equation.lhs().has_variables());
            assert!(!equation.rhs().has_variables());
            assert_eq!(equation.lhs().constant_term(), Fraction::ZERO);
        }
    }

    #[test]
    fn every_question_has_six_distinct_alternatives() {
        let mut rng = StdRng::seed_from_u64(77);
        for tier in TIERS {
            for use_fractions in [false, true] {
                let questions = generate(&mut rng, tier, Some(15), use_fractions).unwrap();
                assert_eq!(questions.len(), 15);
                for question in questions.iter() {
                    assert_eq!(question.alternatives.len(), 6);
                    let unique: HashSet<_> = question.alternatives.iter().collect();
                    assert_eq!(unique.len(), 6, "{:?}", question);
                    assert!(question.alternatives.contains(&question.correct));
                    assert!(!checker::is_degenerate_solution(&question.correct));
                    assert!(["x", "y", "z", "a", "b"].contains(&question.variable.as_str()));
                    assert_eq!(question.textual, question.expression);
                }
            }
        }
    }

    #[test]
    fn basic_without_fractions_scenario() {
        let mut rng = StdRng::seed_from_u64(20);
        let questions = generate(&mut rng, EquationTier::Basic, Some(20), false).unwrap();
        assert_eq!(questions.len(), 20);
        for question in questions {
            let root: i64 = question.correct.parse().expect("integer root");
            assert!(root != 0 && root != 1);
        }
    }

    #[test]
    fn offset_fallback_without_draws() {
        let mut rng = StdRng::seed_from_u64(1);
        let distractors = generate_distractors(&mut rng, "x", Fraction::integer(2), EquationTier::Basic, false, 0).unwrap();
        assert_eq!(distractors, vec!["3", "4", "5", "-1", "6"]);
    }

    #[test]
    fn zero_questions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&mut rng, EquationTier::Advanced, Some(0), true).unwrap().is_empty());
    }
}
