// ============================================================================
// Precision Planner
// Derives working precision and series length from a requested digit count
// ============================================================================

use super::errors::{PiError, PiResult};
use crate::domain::{PiConfig, PrecisionSpec};
use crate::numeric::decimal_digits_for_precision;

/// Plans the working precision and iteration count for a run.
///
/// Precision grows in power-of-two steps from `2^min_precision_exponent`
/// until the decimal capacity covers the request plus the guard band. The
/// iteration count is `ceil(achievable / digits_per_term) + extra_iterations`.
#[derive(Debug, Clone)]
pub struct PrecisionPlanner {
    guard_digits: u64,
    extra_iterations: u64,
    digits_per_term: u64,
    min_precision_exponent: u32,
}

impl PrecisionPlanner {
    pub fn new(config: &PiConfig) -> Self {
        Self {
            guard_digits: config.guard_digits,
            extra_iterations: config.extra_iterations,
            digits_per_term: config.digits_per_term.max(1),
            min_precision_exponent: config.min_precision_exponent,
        }
    }

    /// Plan a run producing `requested_digits` digits.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` if no `u64` bit count is large enough.
    pub fn plan(&self, requested_digits: u64) -> PiResult<PrecisionSpec> {
        let overflow = PiError::PrecisionOverflow { requested_digits };
        let target = requested_digits
            .checked_add(self.guard_digits)
            .ok_or_else(|| overflow.clone())?;

        let mut exponent = self.min_precision_exponent;
        let (bits, achievable) = loop {
            let bits = 1u64.checked_shl(exponent).ok_or_else(|| overflow.clone())?;
            let achievable = decimal_digits_for_precision(bits);
            if achievable >= target {
                break (bits, achievable);
            }
            exponent += 1;
        };

        let iteration_count = achievable
            .div_ceil(self.digits_per_term)
            .saturating_add(self.extra_iterations);

        tracing::debug!(
            requested_digits,
            precision_bits = bits,
            achievable_digits = achievable,
            iterations = iteration_count,
            "Planned precision"
        );

        Ok(PrecisionSpec {
            requested_digits,
            guard_digits: self.guard_digits,
            working_precision_bits: bits,
            achievable_decimal_digits: achievable,
            iteration_count,
        })
    }
}

impl Default for PrecisionPlanner {
    fn default() -> Self {
        Self::new(&PiConfig::default())
    }
}
