// ============================================================================
// Decimal Extraction
// Conversion of binary floats into decimal digit strings
// ============================================================================

use super::big_float::{BigFloat, RoundingMode};
use super::errors::{NumericError, NumericResult};
use num_bigint::BigUint;
use num_integer::Integer;
use std::cmp::Ordering;
use std::f64::consts::LOG10_2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of decimal digits needed so that any `precision`-bit value can be
/// recovered exactly after a round-to-nearest decimal conversion:
/// `1 + ceil(precision * log10(2))`.
///
/// This is also the digit count produced by
/// [`BigFloat::to_decimal_digits`] when it is asked for zero digits.
pub fn decimal_digits_for_precision(precision: u64) -> u64 {
    (precision as f64 * LOG10_2).ceil() as u64 + 1
}

/// Significant decimal digits of a value together with its decimal exponent.
///
/// The value equals `0.d1 d2 d3 ... × 10^exponent` (with the sign applied),
/// so `exponent` is the number of digits that precede the decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalDigits {
    pub negative: bool,
    pub digits: String,
    pub exponent: i64,
}

impl BigFloat {
    /// Extract `count` significant decimal digits.
    ///
    /// A `count` of zero selects [`decimal_digits_for_precision`] digits for
    /// this value's precision. Zero converts to all-zero digits with
    /// exponent 0.
    ///
    /// # Errors
    /// Returns `DigitCountOverflow` if the digit count cannot be represented.
    pub fn to_decimal_digits(
        &self,
        count: usize,
        mode: RoundingMode,
    ) -> NumericResult<DecimalDigits> {
        let count = if count == 0 {
            usize::try_from(decimal_digits_for_precision(self.precision()))
                .map_err(|_| NumericError::DigitCountOverflow)?
        } else {
            count
        };

        if self.is_zero() {
            return Ok(DecimalDigits {
                negative: false,
                digits: "0".repeat(count),
                exponent: 0,
            });
        }

        let wanted = i64::try_from(count).map_err(|_| NumericError::DigitCountOverflow)?;
        let magnitude = self.mantissa().magnitude();

        // |self| >= 2^(top - 1), so this never overshoots the true exponent
        let mut exponent = ((self.top() - 1) as f64 * LOG10_2).floor() as i64 + 1;
        loop {
            let scaled = scale_to_integer(magnitude, self.exponent(), wanted - exponent, mode);
            let digits = scaled.to_str_radix(10);
            match digits.len().cmp(&count) {
                Ordering::Equal => {
                    return Ok(DecimalDigits {
                        negative: self.is_negative(),
                        digits,
                        exponent,
                    })
                },
                Ordering::Greater => exponent += 1,
                Ordering::Less => exponent -= 1,
            }
        }
    }
}

/// Compute `magnitude × 2^binary_exp × 10^decimal_exp` as an integer,
/// rounded with `mode`.
fn scale_to_integer(
    magnitude: &BigUint,
    binary_exp: i64,
    decimal_exp: i64,
    mode: RoundingMode,
) -> BigUint {
    let mut numerator = magnitude.clone();
    let mut denominator = BigUint::from(1u32);

    if binary_exp >= 0 {
        numerator <<= binary_exp as u64;
    } else {
        denominator <<= binary_exp.unsigned_abs();
    }

    let power = num_traits::pow(BigUint::from(10u32), decimal_exp.unsigned_abs() as usize);
    if decimal_exp >= 0 {
        numerator *= power;
    } else {
        denominator *= power;
    }

    let (quotient, remainder) = numerator.div_rem(&denominator);
    match mode {
        RoundingMode::TowardZero => quotient,
        RoundingMode::NearestEven => {
            let twice: BigUint = remainder << 1u32;
            let round_up = match twice.cmp(&denominator) {
                Ordering::Greater => true,
                Ordering::Equal => quotient.bit(0),
                Ordering::Less => false,
            };
            if round_up {
                quotient + 1u32
            } else {
                quotient
            }
        },
    }
}

impl fmt::Display for DecimalDigits {
    /// Scientific rendering, e.g. `3.14159e0` for digits `314159`, exponent 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        let (head, tail) = self.digits.split_at(self.digits.len().min(1));
        if tail.is_empty() {
            write!(f, "{}{}e{}", sign, head, self.exponent - 1)
        } else {
            write!(f, "{}{}.{}e{}", sign, head, tail, self.exponent - 1)
        }
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self
            .to_decimal_digits(0, RoundingMode::NearestEven)
            .map_err(|_| fmt::Error)?;
        write!(f, "{}", digits)
    }
}

// ============================================================================
// Tests
// ============================================================================
