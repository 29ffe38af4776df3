// ============================================================================
// Term Recurrence Summation
// Chudnovsky series evaluated by in-place register updates
// ============================================================================
//
// Each term is derived from the previous one instead of recomputing
// factorials:
//
//   L ← L + 545140134
//   X ← X · (−640320³)
//   K ← K + 12
//   M ← ((K³ − 16K) / i³) · M
//   S ← S + M·L / X
//
// Every operation rounds to nearest-even at the working precision.

use super::coefficients::{
    GEOMETRIC_RATIO, INDEX_SEED, INDEX_STEP, LINEAR_SEED, LINEAR_STEP,
};
use crate::domain::{PrecisionSpec, SummationType};
use crate::interfaces::SeriesSummation;
use crate::numeric::{BigFloat, NumericResult};
use num_bigint::BigInt;

/// Registers of the term recurrence.
#[derive(Debug, Clone)]
pub struct SeriesState {
    /// L: linear term
    linear: BigFloat,
    /// X: geometric term
    geometric: BigFloat,
    /// M: binomial-type term
    binomial: BigFloat,
    /// K: linear index term
    index: BigFloat,
    /// Running sum
    sum: BigFloat,
}

impl SeriesState {
    /// Registers holding the i = 0 term.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision_bits` is zero.
    pub fn seed(precision_bits: u64) -> NumericResult<Self> {
        Ok(Self {
            linear: BigFloat::from_i64(LINEAR_SEED, precision_bits)?,
            geometric: BigFloat::from_i64(1, precision_bits)?,
            binomial: BigFloat::from_i64(1, precision_bits)?,
            index: BigFloat::from_i64(INDEX_SEED, precision_bits)?,
            sum: BigFloat::from_i64(LINEAR_SEED, precision_bits)?,
        })
    }

    /// Advance the registers to term `step` (starting at 1) and add it to
    /// the sum.
    pub fn advance(&mut self, step: u64) -> NumericResult<()> {
        self.linear = self.linear.add_int(LINEAR_STEP);
        self.geometric = self.geometric.mul_int(GEOMETRIC_RATIO);
        self.index = self.index.add_int(INDEX_STEP);

        let cubic = self.index.pow_u32(3).sub(&self.index.mul_int(16));
        let ratio = cubic.div_int(BigInt::from(step).pow(3))?;
        self.binomial = ratio.mul(&self.binomial);

        let term = self.binomial.mul(&self.linear).div(&self.geometric)?;
        self.sum = self.sum.add(&term);
        Ok(())
    }

    pub fn into_sum(self) -> BigFloat {
        self.sum
    }
}

/// Series evaluation by term recurrence (the default strategy)
#[derive(Debug, Clone, Copy, Default)]
pub struct TermRecurrence;

impl TermRecurrence {
    pub fn new() -> Self {
        Self
    }
}

impl SeriesSummation for TermRecurrence {
    fn accumulate(&self, spec: &PrecisionSpec) -> NumericResult<BigFloat> {
        let mut state = SeriesState::seed(spec.working_precision_bits)?;
        for step in 1..spec.iteration_count {
            state.advance(step)?;
        }

        tracing::debug!(
            terms = spec.iteration_count,
            precision_bits = spec.working_precision_bits,
            "Accumulated series by term recurrence"
        );
        Ok(state.into_sum())
    }

    fn name(&self) -> &str {
        "TermRecurrence"
    }

    fn summation_type(&self) -> SummationType {
        SummationType::TermRecurrence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::RoundingMode;

    fn spec(precision_bits: u64, iteration_count: u64) -> PrecisionSpec {
        PrecisionSpec {
            requested_digits: 0,
            guard_digits: 10,
            working_precision_bits: precision_bits,
            achievable_decimal_digits: 0,
            iteration_count,
        }
    }

    #[test]
    fn test_seed_only() {
        for count in [0, 1] {
            let sum = TermRecurrence.accumulate(&spec(64, count)).unwrap();
            assert_eq!(sum.to_f64(), 13_591_409.0);
        }
    }

    #[test]
    fn test_first_step_registers() {
        let mut state = SeriesState::seed(64).unwrap();
        state.advance(1).unwrap();

        assert_eq!(state.linear.to_f64(), 558_731_543.0);
        assert_eq!(state.geometric.to_f64(), -262_537_412_640_768_000.0);
        assert_eq!(state.index.to_f64(), 6.0);
        // (6³ − 16·6) / 1³ = 120 = 6! / (3! · 1!³)
        assert_eq!(state.binomial.to_f64(), 120.0);

        let digits = state
            .into_sum()
            .to_decimal_digits(20, RoundingMode::NearestEven)
            .unwrap();
        assert_eq!(digits.digits, "13591408999999744617");
        assert_eq!(digits.exponent, 8);
    }

    #[test]
    fn test_binomial_matches_factorial_form() {
        // M_k = (6k)! / ((3k)! (k!)³): 1, 120, 83160, 81681600
        let mut state = SeriesState::seed(128).unwrap();
        let expected = [120.0, 83_160.0, 81_681_600.0];
        for (step, value) in (1..=3).zip(expected) {
            state.advance(step).unwrap();
            assert_eq!(state.binomial.to_f64(), value);
        }
    }

    #[test]
    fn test_converged_sum() {
        let sum = TermRecurrence.accumulate(&spec(64, 12)).unwrap();
        let digits = sum.to_decimal_digits(15, RoundingMode::TowardZero).unwrap();
        assert_eq!(digits.digits, "135914089999997");
        assert_eq!(digits.exponent, 8);
    }

    #[test]
    fn test_strategy_metadata() {
        assert_eq!(TermRecurrence::new().name(), "TermRecurrence");
        assert_eq!(
            TermRecurrence.summation_type(),
            SummationType::TermRecurrence
        );
    }
}
