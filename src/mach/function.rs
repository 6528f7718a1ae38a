use crate::error;
use crate::lang::{token::Unary, Error};
use std::f64::consts::PI;

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    pub fn unary(func: Unary, val: f64) -> Result<f64> {
        match func {
            Unary::Sqrt => Function::sqrt(val),
            Unary::Sin => Ok(Function::sin(val)),
            Unary::Cos => Ok(Function::cos(val)),
            Unary::Tan => Ok(Function::tan(val)),
        }
    }

    pub fn sqrt(val: f64) -> Result<f64> {
        if val < 0.0 {
            Err(error!(DomainError; "NEGATIVE SQUARE ROOT"))
        } else {
            Ok(val.sqrt())
        }
    }

    // Trigonometry takes degrees.

    pub fn sin(val: f64) -> f64 {
        radians(val).sin()
    }

    pub fn cos(val: f64) -> f64 {
        radians(val).cos()
    }

    pub fn tan(val: f64) -> f64 {
        radians(val).tan()
    }
}

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
