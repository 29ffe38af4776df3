// ============================================================================
// Result Formatter
// Final division and truncated digit extraction
// ============================================================================

use crate::domain::ResultDigits;
use crate::numeric::{BigFloat, NumericError, NumericResult, RoundingMode};

/// Turns the constant and the series sum into decimal digits of π.
pub struct ResultFormatter;

impl ResultFormatter {
    /// Compute `π = constant / sum` (nearest-even) and extract
    /// `requested_digits` significant digits truncated toward zero.
    ///
    /// Truncation keeps the last retained digit independent of noise in the
    /// guard band. A request of zero digits yields the natural precision
    /// digit count of the working precision.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero sum and `DigitCountOverflow` if
    /// the digit count does not fit in memory addressing.
    pub fn format(
        constant: &BigFloat,
        sum: &BigFloat,
        requested_digits: u64,
    ) -> NumericResult<ResultDigits> {
        let pi = constant.div(sum)?;
        let count =
            usize::try_from(requested_digits).map_err(|_| NumericError::DigitCountOverflow)?;
        let digits = pi.to_decimal_digits(count, RoundingMode::TowardZero)?;
        Ok(ResultDigits::from(digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> BigFloat {
        BigFloat::from_i64(value, 64).unwrap()
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 2/3 = 0.6666…: truncation keeps the trailing 6
        let r = ResultFormatter::format(&int(2), &int(3), 4).unwrap();
        assert_eq!(r.digits, "6666");
        assert_eq!(r.exponent, 0);
        assert_eq!(r.render(), "0.6666");
    }

    #[test]
    fn test_point_position() {
        let r = ResultFormatter::format(&int(314), &int(100), 3).unwrap();
        assert_eq!(r.render(), "3.14");
        assert_eq!(r.exponent, 1);
    }

    #[test]
    fn test_zero_digits_uses_natural_precision() {
        let r = ResultFormatter::format(&int(1), &int(8), 0).unwrap();
        assert_eq!(r.len(), 21);
        assert!(r.digits.starts_with("125000"));
    }

    #[test]
    fn test_zero_sum() {
        let zero = BigFloat::zero(64).unwrap();
        assert_eq!(
            ResultFormatter::format(&int(1), &zero, 5),
            Err(NumericError::DivisionByZero)
        );
    }
}
