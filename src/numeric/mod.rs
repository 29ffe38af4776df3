// ============================================================================
// Numeric Module
// Arbitrary-precision binary floating point for series evaluation
// ============================================================================
//
// This module provides:
// - BigFloat: binary float with a per-value precision in bits
// - RoundingMode: round-to-nearest-even and truncation toward zero
// - DecimalDigits: digit string + decimal exponent extracted from a BigFloat
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - Every operation rounds exactly once from the exact result
// - Fallible operations return Result (no panics)
// - Precision is carried by each value; binary ops use the left operand's

mod big_float;
mod decimal;
mod errors;

pub use big_float::{BigFloat, RoundingMode, MIN_PRECISION};
pub use decimal::{decimal_digits_for_precision, DecimalDigits};
pub use errors::{NumericError, NumericResult};
