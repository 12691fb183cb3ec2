use ::std::collections::BTreeMap;
use ::std::fmt;
use serde::{Deserialize, Serialize};

use super::{Fraction, SolverResult};
use crate::generate::formatter::MINUS;

/// Linear expression `Σ cᵢ·vᵢ + k`.
///
/// Terms are keyed by variable name so two expressions built independently
/// render the same way once simplified.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    terms: BTreeMap<String, Fraction>,
    constant: Fraction,
}

impl Expression {
    /// `1·name + 0`
    pub fn variable<T: ToString>(name: T) -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(name.to_string(), Fraction::ONE);
        Self { terms, constant: Fraction::ZERO }
    }

    pub fn constant<T: Into<Fraction>>(value: T) -> Self {
        Self { terms: BTreeMap::new(), constant: value.into() }
    }

    pub fn coefficient(&self, name: &str) -> Fraction {
        self.terms.get(name).copied().unwrap_or(Fraction::ZERO)
    }

    pub fn constant_term(&self) -> Fraction {
        self.constant
    }

    pub fn has_variables(&self) -> bool {
        self.terms.values().any(|coefficient| !coefficient.is_zero())
    }

    pub fn add<T: Into<Fraction>>(&self, value: T) -> Self {
        Self { terms: self.terms.clone(), constant: self.constant + value.into() }
    }

    pub fn subtract<T: Into<Fraction>>(&self, value: T) -> Self {
        Self { terms: self.terms.clone(), constant: self.constant - value.into() }
    }

    pub fn multiply<T: Into<Fraction>>(&self, value: T) -> Self {
        let value = value.into();
        Self {
            terms: self.terms.iter().map(|(name, coefficient)| (name.clone(), *coefficient * value)).collect(),
            constant: self.constant * value,
        }
    }

    pub fn divide<T: Into<Fraction>>(&self, value: T) -> SolverResult<Self> {
        let value = value.into();
        let mut terms = BTreeMap::new();
        for (name, coefficient) in self.terms.iter() {
            terms.insert(name.clone(), coefficient.checked_div(value)?);
        }
        Ok(Self { terms, constant: self.constant.checked_div(value)? })
    }

    pub fn add_expression(&self, other: &Expression) -> Self {
        let mut terms = self.terms.clone();
        for (name, coefficient) in other.terms.iter() {
            let entry = terms.entry(name.clone()).or_insert(Fraction::ZERO);
            *entry = *entry + *coefficient;
        }
        Self { terms, constant: self.constant + other.constant }
    }

    pub fn subtract_expression(&self, other: &Expression) -> Self {
        self.add_expression(&other.multiply(-1))
    }

    /// Drops cancelled terms. Coefficients are already in lowest terms.
    pub fn simplify(&self) -> Self {
        Self {
            terms: self.terms.iter()
                .filter(|(_, coefficient)| !coefficient.is_zero())
                .map(|(name, coefficient)| (name.clone(), *coefficient))
                .collect(),
            constant: self.constant,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut wrote_term = false;
        for (name, coefficient) in self.terms.iter().filter(|(_, c)| !c.is_zero()) {
            write_sign(f, coefficient.is_negative(), wrote_term)?;
            let magnitude = coefficient.abs();
            if magnitude == Fraction::ONE {
                write!(f, "{name}")?;
            } else if !magnitude.is_integer() {
                write!(f, "({magnitude}){name}")?;
            } else {
                write!(f, "{magnitude}{name}")?;
            }
            wrote_term = true;
        }
        if !self.constant.is_zero() {
            write_sign(f, self.constant.is_negative(), wrote_term)?;
            write!(f, "{}", self.constant.abs())?;
            wrote_term = true;
        }
        if !wrote_term {
            write!(f, "0")?;
        }
        Ok(())
    }
}

fn write_sign(f: &mut fmt::Formatter, negative: bool, infix: bool) -> fmt::Result {
    match (negative, infix) {
        (false, false) => Ok(()),
        (true, false) => write!(f, "{MINUS}"),
        (false, true) => write!(f, " + "),
        (true, true) => write!(f, " {MINUS} "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_variable_is_unit_term() {
        let expr = Expression::variable("x");
        assert_eq!(expr.coefficient("x"), Fraction::ONE);
        assert_eq!(expr.constant_term(), Fraction::ZERO);
        assert_eq!(expr.to_string(), "x");
    }

    #[test]
    fn multiply_distributes_and_renders_canonically() {
        let expr = Expression::variable("x").add(-3).multiply(4).simplify();
        assert_eq!(expr.to_string(), "4x − 12");
    }

    #[test]
    fn renders_negative_and_fractional_terms() {
        let expr = Expression::variable("y").multiply(-1).add(Fraction::new(2, 3).unwrap());
        assert_eq!(expr.to_string(), "−y + 2/3");
        let expr = Expression::variable("a").divide(2).unwrap();
        assert_eq!(expr.to_string(), "(1/2)a");
        let expr = Expression::variable("b").multiply(Fraction::new(-3, 4).unwrap()).add(1);
        assert_eq!(expr.to_string(), "−(3/4)b + 1");
    }

    #[test]
    fn simplify_drops_cancelled_terms() {
        let left = Expression::variable("z").multiply(3).add(1);
        let right = Expression::variable("z").multiply(3);
        let difference = left.subtract_expression(&right).simplify();
        assert!(!difference.has_variables());
        assert_eq!(difference.to_string(), "1");
        assert_eq!(Expression::constant(0).to_string(), "0");
    }

    #[test]
    fn divide_by_zero_fails() {
        assert!(Expression::variable("x").divide(0).is_err());
    }
}
