use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: char, lhs: f64, rhs: f64) -> Result<f64> {
        match op {
            '+' => Ok(Operation::sum(lhs, rhs)),
            '-' => Ok(Operation::subtract(lhs, rhs)),
            '*' => Ok(Operation::multiply(lhs, rhs)),
            '/' => Operation::divide(lhs, rhs),
            _ => Err(error!(InvalidOperator)),
        }
    }

    pub fn sum(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            Err(error!(DivisionByZero))
        } else {
            Ok(lhs / rhs)
        }
    }

    /// No domain checks; a negative base with a fractional exponent is NaN.
    pub fn power(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
