//! Recursive evaluation of expression trees.

use crate::Real;
use crate::error::{ExprError, Result};
use crate::types::{AstExpr, Operator};

extern crate alloc;
use alloc::string::ToString;

fn parse_literal(text: &str) -> Result<Real> {
    match text.parse::<Real>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExprError::NumberFormat {
            literal: text.to_string(),
        }),
    }
}

/// Applies `op` to two operands, refusing to divide by zero.
pub fn apply_operator(op: Operator, left: Real, right: Real) -> Result<Real> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            // -0.0 compares equal to 0.0
            if right == 0.0 {
                return Err(ExprError::DivideByZero);
            }
            left / right
        }
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::Overflow)
    }
}

/// Evaluates an expression tree.
///
/// The left operand of a binary node is evaluated before the right one. Literals are parsed
/// here rather than during tree construction, so a malformed literal surfaces as
/// [`ExprError::NumberFormat`].
pub fn eval_ast(ast: &AstExpr<'_>) -> Result<Real> {
    match ast {
        AstExpr::Leaf(text) => parse_literal(text),
        AstExpr::Negate(child) => Ok(-eval_ast(child)?),
        AstExpr::Binary { op, left, right } => {
            let left = eval_ast(left)?;
            let right = eval_ast(right)?;
            apply_operator(*op, left, right)
        }
    }
}
