//! One-shot entry points.
//!
//! These functions create a throwaway [`Evaluator`] with the default configuration for a
//! single expression. Callers evaluating many expressions, or needing other limits, should
//! keep an [`Evaluator`] around instead.

extern crate alloc;
use crate::Real;
use crate::error::Result;
use crate::evaluator::Evaluator;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Outcome of [`compute`]: a validity flag plus the formatted result.
///
/// `result` is empty whenever `valid` is false; no partial result is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Computation {
    pub valid: bool,
    pub result: String,
}

impl Computation {
    pub fn success(result: String) -> Self {
        Self {
            valid: true,
            result,
        }
    }

    pub fn invalid() -> Self {
        Self::default()
    }
}

/// Validates and evaluates `expression`, rounding the result to four decimal places.
///
/// ```
/// use arith_rs::compute;
///
/// assert_eq!(compute("(2+3)*4").result, "20");
/// assert!(!compute("*5").valid);
/// ```
pub fn compute(expression: &str) -> Computation {
    Evaluator::new().compute(expression)
}

/// Evaluates `expression` without rounding, returning the typed error on failure.
pub fn interp(expression: &str) -> Result<Real> {
    Evaluator::new().eval(expression)
}

/// Returns true when `expression` is a well-formed arithmetic expression.
pub fn validate(expression: &str) -> bool {
    Evaluator::new().validate(expression)
}
