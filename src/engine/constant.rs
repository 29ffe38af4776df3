// ============================================================================
// Constant Generator
// Closed-form numerator C = 426880·√10005
// ============================================================================

use super::coefficients::{CONSTANT_MULTIPLIER, CONSTANT_RADICAND};
use crate::numeric::{BigFloat, NumericResult};

/// Computes the constant `C = 426880 × √10005` at a working precision.
pub struct ConstantGenerator;

impl ConstantGenerator {
    /// Both the square root and the product round to nearest-even.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision_bits` is zero.
    pub fn generate(precision_bits: u64) -> NumericResult<BigFloat> {
        let root = BigFloat::from_i64(CONSTANT_RADICAND, precision_bits)?.sqrt()?;
        let multiplier = BigFloat::from_i64(CONSTANT_MULTIPLIER, precision_bits)?;
        Ok(root.mul(&multiplier))
    }
}
