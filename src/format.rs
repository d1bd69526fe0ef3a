//! Rounding and rendering of results.
//!
//! Results are rounded half away from zero to a fixed number of decimal places and printed
//! with the shortest decimal representation that reads back as the rounded value: no
//! trailing zeros, no exponent.

extern crate alloc;
use crate::Real;
use crate::config::DEFAULT_PRECISION;
use crate::types::EXP_MAX_PRECISION;
use alloc::format;
use alloc::string::String;

/// Rounds `value` half away from zero to `places` decimal places.
pub fn round_to(value: Real, places: u32) -> Real {
    // Powers of ten up to 10^22 are exact in f64.
    let scale: Real = (0..places.min(EXP_MAX_PRECISION)).fold(1.0, |acc, _| acc * 10.0);
    let rounded = libm::round(value * scale) / scale;
    // Values too large to scale are already integral at this precision.
    if rounded.is_finite() { rounded } else { value }
}

/// Renders a value rounded to `places` decimal places.
pub fn format_with_precision(value: Real, places: u32) -> String {
    let rounded = round_to(value, places);
    // Collapse negative zero, e.g. from -0.00001.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

/// Renders a value rounded to four decimal places.
pub fn format_value(value: Real) -> String {
    format_with_precision(value, DEFAULT_PRECISION)
}
