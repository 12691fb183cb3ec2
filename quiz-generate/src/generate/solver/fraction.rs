use ::std::fmt;
use ::std::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::{SolverError, SolverResult};
use crate::generate::{checker, formatter};

/// Rational number kept in lowest terms with a positive denominator.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };
    pub const ONE: Fraction = Fraction { numerator: 1, denominator: 1 };

    pub fn new(numerator: i64, denominator: i64) -> SolverResult<Self> {
        if !checker::is_valid_frac_i64(numerator, denominator) {
            return Err(SolverError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn integer(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }

    fn reduced(numerator: i64, denominator: i64) -> Self {
        let divisor = formatter::gcd(numerator, denominator).abs().max(1);
        let sign = if denominator < 0 { -1 } else { 1 };
        Self {
            numerator: sign * numerator / divisor,
            denominator: sign * denominator / divisor,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }
    pub fn denominator(&self) -> i64 {
        self.denominator
    }
    pub fn is_zero(&self) -> bool {
        checker::is_i64_zero(self.numerator)
    }
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }
    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator }
    }

    pub fn checked_div(self, rhs: Fraction) -> SolverResult<Fraction> {
        if rhs.is_zero() {
            return Err(SolverError::DivisionByZero);
        }
        Fraction::new(self.numerator * rhs.denominator, self.denominator * rhs.numerator)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Fraction::integer(value as i64)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(self.numerator * rhs.numerator, self.denominator * rhs.denominator)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction { numerator: -self.numerator, denominator: self.denominator }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
