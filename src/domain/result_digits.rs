// ============================================================================
// Result Digits
// Final truncated decimal representation of a computed constant
// ============================================================================

use crate::numeric::DecimalDigits;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal digits produced by a run, with the position of the decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultDigits {
    /// Significant digits, most significant first, no sign and no point
    pub digits: String,

    /// Number of digits preceding the decimal point
    pub exponent: i64,

    /// Whether the value is negative
    pub negative: bool,
}

impl ResultDigits {
    pub fn new(digits: String, exponent: i64) -> Self {
        Self {
            digits,
            exponent,
            negative: false,
        }
    }

    /// Number of significant digits held.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Render with the decimal point inserted after the first `exponent`
    /// digits.
    ///
    /// - `0 < exponent < len`: point inside the digit run (`3.14159`)
    /// - `exponent >= len`: digits only, no point (`3` for one digit of π)
    /// - `exponent <= 0`: leading `0.` plus `-exponent` zeros (`0.0025`)
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.digits.len() + 2);
        if self.negative {
            out.push('-');
        }

        if self.exponent <= 0 {
            out.push_str("0.");
            for _ in 0..self.exponent.unsigned_abs() {
                out.push('0');
            }
            out.push_str(&self.digits);
            return out;
        }

        for (i, digit) in self.digits.chars().enumerate() {
            if i as i64 == self.exponent {
                out.push('.');
            }
            out.push(digit);
        }
        out
    }
}

impl From<DecimalDigits> for ResultDigits {
    fn from(d: DecimalDigits) -> Self {
        Self {
            digits: d.digits,
            exponent: d.exponent,
            negative: d.negative,
        }
    }
}

impl fmt::Display for ResultDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
