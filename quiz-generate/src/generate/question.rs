use serde::{Deserialize, Serialize};
use common_types::Quiz::QuizKind;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum QuestionType {
    Arithmetic(ArithmeticQuestion),
    Equation(EquationQuestion),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ArithmeticQuestion {
    pub kind: QuizKind,
    pub x: i32,
    pub y: i32,
    pub correct: i32,
    pub textual: String,
    pub alternatives: Vec<i32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EquationQuestion {
    pub variable: String,
    pub expression: String,
    pub correct: String,
    pub textual: String,
    pub alternatives: Vec<String>,
}

impl ArithmeticQuestion {
    /// Operands and answer only; alternatives are filled in later.
    pub fn new(kind: QuizKind, x: i32, y: i32, correct: i32) -> Self {
        Self { kind, x, y, correct, textual: String::new(), alternatives: Vec::new() }
    }
}

impl EquationQuestion {
    pub fn new<T: ToString>(variable: T, expression: String, correct: String) -> Self {
        Self {
            variable: variable.to_string(),
            textual: expression.clone(),
            expression,
            correct,
            alternatives: Vec::new(),
        }
    }
}

impl QuestionType {
    pub fn textual(&self) -> &str {
        match self {
            QuestionType::Arithmetic(question) => &question.textual,
            QuestionType::Equation(question) => &question.textual,
        }
    }

    /// Alternatives as shown on the buttons, in their shuffled order.
    pub fn alternative_labels(&self) -> Vec<String> {
        match self {
            QuestionType::Arithmetic(question) => question.alternatives.iter().map(|v| v.to_string()).collect(),
            QuestionType::Equation(question) => question.alternatives.clone(),
        }
    }

    pub fn correct_label(&self) -> String {
        match self {
            QuestionType::Arithmetic(question) => question.correct.to_string(),
            QuestionType::Equation(question) => question.correct.clone(),
        }
    }

    pub fn alternative_count(&self) -> usize {
        match self {
            QuestionType::Arithmetic(question) => question.alternatives.len(),
            QuestionType::Equation(question) => question.alternatives.len(),
        }
    }

    /// Integers compare by value, equation roots by their exact string.
    pub fn is_correct(&self, index: usize) -> bool {
        match self {
            QuestionType::Arithmetic(question) => question.alternatives.get(index) == Some(&question.correct),
            QuestionType::Equation(question) => question.alternatives.get(index) == Some(&question.correct),
        }
    }

    pub fn correct_index(&self) -> Option<usize> {
        (0..self.alternative_count()).find(|index| self.is_correct(*index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correctness_by_index() {
        let mut question = ArithmeticQuestion::new(QuizKind::Addition, 3, 4, 7);
        question.alternatives = vec![8, 7, 5, 6, 17, 9];
        let question = QuestionType::Arithmetic(question);
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(42));
        assert_eq!(question.correct_index(), Some(1));
        assert_eq!(question.alternative_labels()[4], "17");
    }

    #[test]
    fn equation_compares_strings() {
        let mut question = EquationQuestion::new("x", "3x = 2".to_string(), "2/3".to_string());
        question.alternatives = vec!["4/6".to_string(), "2/3".to_string()];
        let question = QuestionType::Equation(question);
        assert!(!question.is_correct(0));
        assert!(question.is_correct(1));
        assert_eq!(question.textual(), "3x = 2");
    }
}
