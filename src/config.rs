//! Engine configuration.
//!
//! [`EngineConfig`] carries the runtime limits of an [`crate::Evaluator`]. Hosts can build it
//! in code with the `with_*` methods or deserialize it from their own configuration files;
//! missing fields fall back to the defaults.

use crate::types::{EXP_MAX_INPUT_LEN, EXP_MAX_PRECISION};
use serde::{Deserialize, Serialize};

/// Default maximum number of characters accepted in one expression.
pub const DEFAULT_MAX_INPUT_LEN: usize = 100;

/// Default number of decimal places results are rounded to.
pub const DEFAULT_PRECISION: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Inputs longer than this many characters (whitespace included) are rejected.
    /// Clamped to [`EXP_MAX_INPUT_LEN`].
    pub max_input_len: usize,
    /// Decimal places kept by the rounder. Clamped to [`EXP_MAX_PRECISION`].
    pub precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len.min(EXP_MAX_INPUT_LEN);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(EXP_MAX_PRECISION);
        self
    }

    /// Input length limit actually applied, after clamping values that came in through serde.
    pub fn effective_max_input_len(&self) -> usize {
        self.max_input_len.min(EXP_MAX_INPUT_LEN)
    }

    /// Precision actually applied, after clamping values that came in through serde.
    pub fn effective_precision(&self) -> u32 {
        self.precision.min(EXP_MAX_PRECISION)
    }
}
