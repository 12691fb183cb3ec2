use thiserror::Error;

mod equation;
mod expression;
mod fraction;

pub use equation::Equation;
pub use expression::Expression;
pub use fraction::Fraction;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("no unique solution for {0}")]
    NoUniqueSolution(String),
}
