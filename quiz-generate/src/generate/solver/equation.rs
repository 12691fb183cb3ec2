use ::std::fmt;
use serde::{Deserialize, Serialize};

use super::{Expression, Fraction, SolverError, SolverResult};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    lhs: Expression,
    rhs: Expression,
}

impl Equation {
    pub fn new<L, R>(lhs: L, rhs: R) -> Self
    where
        L: Into<Expression>,
        R: Into<Expression>,
    {
        Self { lhs: lhs.into(), rhs: rhs.into() }
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }
    pub fn rhs(&self) -> &Expression {
        &self.rhs
    }

    /// Moves `variable` to the left, constants to the right, and divides.
    pub fn solve_for(&self, variable: &str) -> SolverResult<Fraction> {
        let coefficient = self.lhs.coefficient(variable) - self.rhs.coefficient(variable);
        if coefficient.is_zero() {
            return Err(SolverError::NoUniqueSolution(variable.to_string()));
        }
        let constant = self.rhs.constant_term() - self.lhs.constant_term();
        constant.checked_div(coefficient)
    }
}

impl From<Fraction> for Expression {
    fn from(value: Fraction) -> Self {
        Expression::constant(value)
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Expression::constant(value)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.lhs.has_variables() && self.rhs.has_variables() {
            write!(f, "{} = {}", self.rhs, self.lhs)
        } else {
            write!(f, "{} = {}", self.lhs, self.rhs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_basic_form() {
        let equation = Equation::new(Expression::variable("x").multiply(3), 12i64);
        assert_eq!(equation.solve_for("x").unwrap(), Fraction::integer(4));
        assert_eq!(equation.to_string(), "3x = 12");
    }

    #[test]
    fn solves_both_sided_form() {
        // 5x + 3 = 3x + 15
        let lhs = Expression::variable("x").multiply(5).add(3);
        let rhs = Expression::variable("x").multiply(3).add(15);
        let equation = Equation::new(lhs, rhs);
        assert_eq!(equation.solve_for("x").unwrap().to_string(), "6");
        assert_eq!(equation.to_string(), "5x + 3 = 3x + 15");
    }

    #[test]
    fn fractional_root() {
        let equation = Equation::new(Expression::variable("b").multiply(3), 5i64);
        assert_eq!(equation.solve_for("b").unwrap().to_string(), "5/3");
    }

    #[test]
    fn cancelled_variable_has_no_unique_solution() {
        let lhs = Expression::variable("y").multiply(2).add(1);
        let rhs = Expression::variable("y").multiply(2).add(4);
        let equation = Equation::new(lhs, rhs);
        assert_eq!(equation.solve_for("y"), Err(SolverError::NoUniqueSolution("y".to_string())));
        // unknown variable cancels as well
        assert!(Equation::new(Expression::variable("x"), 2i64).solve_for("z").is_err());
    }

    #[test]
    fn variable_side_renders_first() {
        let equation = Equation::new(7i64, Expression::variable("z").subtract(2));
        assert_eq!(equation.to_string(), "z − 2 = 7");
    }
}
