#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![doc = r#"
# arith-rs

A small, no_std-friendly validator and evaluator for plain arithmetic expressions.

## Overview

arith-rs takes free-form text such as `1 + ( 2.5 * 3 - ( 4 / 5.7 ) - 6.01 ) + 7` and either
rejects it or returns its value rounded to four decimal places. The grammar is fixed:

- numbers, optionally signed and optionally decimal (`42`, `-1.5`, `.5`)
- the binary operators `+ - * /` with the usual precedence, grouping to the left
- parentheses, and negated groups such as `-(1 + 2)`
- implicit multiplication when a number or `)` is directly followed by `(`:
  `2(3)` and `(2)(3)` both evaluate to `6`

Whitespace is never significant. Exponents, functions and variables are not supported.

Evaluation runs through four stages, each consuming the previous one's output:

1. [`validator`] checks the text structurally and reports where it goes wrong,
2. [`lexer`] turns it into [`Token`]s, folding signs into literals,
3. [`parser`] builds an [`AstExpr`] tree in a `bumpalo` arena,
4. [`eval`] reduces the tree, and [`format`] rounds and renders the result.

## Quick Start

```rust
use arith_rs::compute;

let out = compute("2 + 3 * 4");
assert!(out.valid);
assert_eq!(out.result, "14");

let out = compute("-1+-2.1");
assert_eq!(out.result, "-3.1");

// Malformed input and division by zero are reported as invalid.
assert!(!compute("1++1").valid);
assert!(!compute("5/0").valid);
```

## Error Handling

`compute` collapses every failure into `valid == false`. To find out what went wrong, use
[`interp`] or an [`Evaluator`]:

```rust
use arith_rs::{ExprError, interp};

assert_eq!(interp("8/4/2"), Ok(1.0));
assert_eq!(interp("5/0"), Err(ExprError::DivideByZero));
assert!(matches!(
    interp("2^3"),
    Err(ExprError::UnsupportedCharacter { position: 1, found: '^' })
));
```

## Configuration

```rust
use arith_rs::{EngineConfig, Evaluator};

let mut evaluator = Evaluator::with_config(EngineConfig::new().with_precision(2));
assert_eq!(evaluator.compute("10/3").result, "3.33");
```
"#]

// Re-export alloc for no_std compatibility
extern crate alloc;

pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::EngineConfig;
pub use engine::{Computation, compute, interp, validate};
pub use error::ExprError;
pub use evaluator::Evaluator;
pub use types::{AstExpr, Operator, Token};

/// Floating-point type used for every computation.
pub type Real = f64;

pub mod constants {
    use super::Real;

    pub const TEST_PRECISION: Real = 1e-10;
}

/// Utility macro to check if two floating point values are approximately equal
/// within a specified epsilon. Supports optional format arguments like assert_eq!.
#[macro_export]
macro_rules! assert_approx_eq {
    // Case 1: assert_approx_eq!(left, right) -> use default epsilon
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    // Case 2: assert_approx_eq!(left, right, epsilon) -> use specified epsilon
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;
        assert!(
            (left_val - right_val).abs() < eps,
            "assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`, epsilon: `{}`)",
            left_val,
            right_val,
            eps
        );
    }};
    // Case 3: assert_approx_eq!(left, right, epsilon, "format message with args", args...)
    ($left:expr, $right:expr, $epsilon:expr, $($arg:tt)+) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;
        assert!((left_val - right_val).abs() < eps, $($arg)+);
    }};
}
