//! Arena-managed expression evaluator
//!
//! This module provides the reusable entry point of the crate: an [`Evaluator`] owns the
//! memory arena the expression trees are built in and the [`EngineConfig`] limits, and runs
//! the whole validate → tokenize → build → evaluate pipeline per call.

extern crate alloc;
use crate::Real;
use crate::config::EngineConfig;
use crate::engine::Computation;
use crate::error::Result;
use crate::eval::eval_ast;
use crate::format::format_with_precision;
use crate::lexer::tokenize;
use crate::parser::parse_tokens;
use crate::types::AstExpr;
use crate::validator::check_structure;
use bumpalo::Bump;
use tracing::{debug, trace};

/// An expression evaluator that manages its own memory arena.
///
/// The arena is reset at the start of every call, so nothing computed for one expression
/// is visible to the next and memory use stays bounded by the largest single expression.
///
/// # Examples
///
/// ```
/// use arith_rs::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.eval("2 + 3 * 4").unwrap(), 14.0);
/// assert!(evaluator.validate("(2+3)*4"));
/// assert!(!evaluator.validate("(()"));
///
/// let out = evaluator.compute("10/3");
/// assert!(out.valid);
/// assert_eq!(out.result, "3.3333");
/// ```
pub struct Evaluator {
    arena: Bump,
    config: EngineConfig,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates a new evaluator with a fresh arena and the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            arena: Bump::new(),
            config,
        }
    }

    /// Creates a new evaluator with a pre-allocated arena capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Bump::with_capacity(capacity),
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates, tokenizes and builds `expression` into a tree in the arena.
    fn build(&mut self, expression: &str) -> Result<&AstExpr<'_>> {
        self.arena.reset();
        if let Err(err) = check_structure(expression, self.config.effective_max_input_len()) {
            debug!(error = %err, "rejected expression");
            return Err(err);
        }
        let tokens = tokenize(expression)?;
        let ast = parse_tokens(&tokens, &self.arena)?;
        trace!(nodes = ast.node_count(), "built expression tree");
        Ok(ast)
    }

    /// Checks that `expression` is valid, reporting the first problem found.
    ///
    /// Success means the text passed the structural check, tokenized, and built into a
    /// single tree; it says nothing about division by zero, which only evaluation finds.
    pub fn check(&mut self, expression: &str) -> Result<()> {
        self.build(expression).map(|_| ())
    }

    pub fn validate(&mut self, expression: &str) -> bool {
        self.check(expression).is_ok()
    }

    /// Evaluates `expression` without rounding.
    pub fn eval(&mut self, expression: &str) -> Result<Real> {
        let ast = self.build(expression)?;
        eval_ast(ast).inspect_err(|err| debug!(error = %err, "evaluation failed"))
    }

    /// Evaluates `expression` and renders the result rounded to the configured precision.
    ///
    /// Any failure yields an invalid computation with an empty result.
    pub fn compute(&mut self, expression: &str) -> Computation {
        let precision = self.config.effective_precision();
        match self.eval(expression) {
            Ok(value) => Computation::success(format_with_precision(value, precision)),
            Err(_) => Computation::invalid(),
        }
    }

    /// Resets the arena, freeing all allocated memory.
    pub fn reset(&mut self) {
        self.arena.reset();
    }

    /// Returns the current memory usage of the arena in bytes.
    pub fn allocated_bytes(&self) -> usize {
        self.arena.allocated_bytes()
    }
}
