//! Error types and handling for the arith-rs crate.
//!
//! Every stage of the pipeline (validation, tokenization, tree building and evaluation)
//! reports failures through [`ExprError`]. The public `compute` entry point collapses any
//! of them into an invalid verdict; `interp` and [`crate::Evaluator::check`] hand them
//! back to the caller untouched.

extern crate alloc;
use alloc::string::String;
use core::fmt;
use core::result;

/// Result type used throughout the crate.
pub type Result<T> = result::Result<T, ExprError>;

/// Error type for expression validation, parsing and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// The input is not a well-formed arithmetic expression.
    ///
    /// `position` is the character offset in the original input where the problem was
    /// detected (the input length when the expression ends too early).
    Syntax {
        position: usize,
        reason: &'static str,
    },

    /// A closing parenthesis without an opener, or an opener that is never closed.
    UnmatchedParenthesis { position: usize, found: char },

    /// A character outside `0-9 . + - * / ( )` and whitespace.
    UnsupportedCharacter { position: usize, found: char },

    /// The input exceeds the configured maximum number of characters.
    InputTooLong { len: usize, max: usize },

    /// A number literal that does not parse as a finite `f64`.
    ///
    /// Unreachable for validated input; surfaces when the tokenizer or the tree
    /// builder are driven directly with malformed text.
    NumberFormat { literal: String },

    /// Division where the right operand is exactly zero.
    DivideByZero,

    /// An intermediate result left the finite range of `f64`.
    Overflow,

    /// Parenthesis nesting went deeper than the builder allows.
    RecursionLimit(usize),

    /// A number literal does not fit in the fixed-capacity literal buffer.
    StringTooLong,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Syntax { position, reason } => {
                write!(f, "Syntax error at position {}: {}", position, reason)
            }
            ExprError::UnmatchedParenthesis { position, found } => {
                write!(
                    f,
                    "Unmatched parenthesis at position {}: found '{}'",
                    position, found
                )
            }
            ExprError::UnsupportedCharacter { position, found } => {
                write!(
                    f,
                    "Unsupported character '{}' at position {}",
                    found, position
                )
            }
            ExprError::InputTooLong { len, max } => {
                write!(
                    f,
                    "Expression too long: {} characters (maximum is {})",
                    len, max
                )
            }
            ExprError::NumberFormat { literal } => {
                write!(f, "Invalid number literal: '{}'", literal)
            }
            ExprError::DivideByZero => write!(f, "Division by zero"),
            ExprError::Overflow => write!(f, "Result is not a finite number"),
            ExprError::RecursionLimit(depth) => {
                write!(f, "Recursion limit exceeded: nesting depth {}", depth)
            }
            ExprError::StringTooLong => write!(f, "Number literal too long for heapless buffer"),
        }
    }
}

impl core::error::Error for ExprError {}

impl ExprError {
    /// Shorthand for a [`ExprError::Syntax`] error.
    pub(crate) fn syntax(position: usize, reason: &'static str) -> Self {
        ExprError::Syntax { position, reason }
    }
}
