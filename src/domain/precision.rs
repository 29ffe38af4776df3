// ============================================================================
// Precision Specification
// Working precision and series length planned for one run
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision plan for a single computation.
///
/// Invariant: `achievable_decimal_digits >= requested_digits + guard_digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecisionSpec {
    /// Number of decimal digits the caller asked for
    pub requested_digits: u64,

    /// Extra digits carried beyond the request
    pub guard_digits: u64,

    /// Significand bits used by every arithmetic operation
    pub working_precision_bits: u64,

    /// Decimal digits exactly representable at the working precision
    pub achievable_decimal_digits: u64,

    /// Number of series terms evaluated (including the seed term)
    pub iteration_count: u64,
}

impl PrecisionSpec {
    /// Digits the planner had to cover: request plus guard band.
    #[inline]
    pub fn target_digits(&self) -> u64 {
        self.requested_digits.saturating_add(self.guard_digits)
    }

    /// Check the planning invariant.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.achievable_decimal_digits >= self.target_digits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant() {
        let spec = PrecisionSpec {
            requested_digits: 50,
            guard_digits: 10,
            working_precision_bits: 256,
            achievable_decimal_digits: 79,
            iteration_count: 16,
        };
        assert_eq!(spec.target_digits(), 60);
        assert!(spec.is_satisfied());

        let short = PrecisionSpec {
            achievable_decimal_digits: 40,
            ..spec
        };
        assert!(!short.is_satisfied());
    }
}
