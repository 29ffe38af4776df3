// ============================================================================
// Binary Floating Point
// Arbitrary-precision float with correct rounding of every operation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest working precision accepted by the constructors.
pub const MIN_PRECISION: u64 = 1;

/// Rounding applied when an exact result does not fit the working precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round to nearest, ties to even (IEEE 754 default)
    #[default]
    NearestEven,
    /// Truncate toward zero
    TowardZero,
}

/// Arbitrary-precision binary floating-point number.
///
/// Represents `mantissa × 2^exponent` where `|mantissa|` never exceeds
/// `precision` bits. The mantissa is kept odd (or zero) so that equal values
/// have equal representations.
///
/// Arithmetic rounds the exact result once, to nearest-even, at the
/// precision of the left operand. Integer operands passed through the
/// `*_int` helpers are used exactly, without being rounded first.
///
/// # Example
/// ```
/// use chudnovsky_pi::numeric::{BigFloat, RoundingMode};
///
/// let two = BigFloat::from_i64(2, 64)?;
/// let root = two.sqrt()?;
/// let digits = root.to_decimal_digits(10, RoundingMode::TowardZero)?;
/// assert_eq!(digits.digits, "1414213562");
/// assert_eq!(digits.exponent, 1);
/// # Ok::<(), chudnovsky_pi::numeric::NumericError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BigFloat {
    mantissa: BigInt,
    exponent: i64,
    precision: u64,
}

impl BigFloat {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero at the given precision.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is below [`MIN_PRECISION`].
    pub fn zero(precision: u64) -> NumericResult<Self> {
        check_precision(precision)?;
        Ok(Self::zero_unchecked(precision))
    }

    /// Create from a signed integer, rounded to nearest-even.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is below [`MIN_PRECISION`].
    pub fn from_i64(value: i64, precision: u64) -> NumericResult<Self> {
        Self::from_bigint(BigInt::from(value), precision)
    }

    /// Create from an arbitrary integer, rounded to nearest-even.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is below [`MIN_PRECISION`].
    pub fn from_bigint(value: BigInt, precision: u64) -> NumericResult<Self> {
        check_precision(precision)?;
        Ok(Self::round(value, 0, false, precision, RoundingMode::NearestEven))
    }

    /// An integer held exactly, with just enough precision for its bits.
    fn exact(value: BigInt) -> Self {
        let precision = value.bits().max(MIN_PRECISION);
        Self::round(value, 0, false, precision, RoundingMode::NearestEven)
    }

    #[inline]
    fn zero_unchecked(precision: u64) -> Self {
        Self {
            mantissa: BigInt::zero(),
            exponent: 0,
            precision,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Working precision in bits.
    #[inline]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Signed mantissa (odd, or zero).
    #[inline]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Binary exponent applied to the mantissa.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    /// Number of significant bits currently used by the mantissa.
    #[inline]
    fn bits(&self) -> u64 {
        self.mantissa.bits()
    }

    /// Exponent of the lowest power of two strictly above `|self|`.
    #[inline]
    pub(super) fn top(&self) -> i64 {
        self.exponent + self.bits() as i64
    }

    /// Approximate value as `f64` (for diagnostics only).
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let excess = self.bits().saturating_sub(64);
        let head = (&self.mantissa >> excess).to_f64().unwrap_or(f64::NAN);
        head * 2f64.powf((self.exponent + excess as i64) as f64)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Re-round this value to a new precision.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is below [`MIN_PRECISION`].
    pub fn round_to(&self, precision: u64, mode: RoundingMode) -> NumericResult<Self> {
        check_precision(precision)?;
        Ok(Self::round(
            self.mantissa.clone(),
            self.exponent,
            false,
            precision,
            mode,
        ))
    }

    /// Round the value `mantissa × 2^exponent` to `precision` bits.
    ///
    /// `inexact` marks that the true value lies strictly between `mantissa`
    /// and the next integer away from zero. Callers that set it must supply
    /// at least `precision + 1` bits of mantissa so the half bit is real.
    fn round(
        mantissa: BigInt,
        exponent: i64,
        inexact: bool,
        precision: u64,
        mode: RoundingMode,
    ) -> Self {
        let sign = mantissa.sign();
        let mut magnitude = mantissa.magnitude().clone();
        if magnitude.is_zero() {
            return Self::zero_unchecked(precision);
        }

        let mut exponent = exponent;
        if inexact {
            // Sticky bit two places below the supplied mantissa
            magnitude = (magnitude << 2u32) + 1u32;
            exponent -= 2;
        }

        let bits = magnitude.bits();
        if bits > precision {
            let shift = bits - precision;
            let mut kept: BigUint = &magnitude >> shift;
            let round_up = match mode {
                RoundingMode::TowardZero => false,
                RoundingMode::NearestEven => {
                    let half = magnitude.bit(shift - 1);
                    let below_half = magnitude
                        .trailing_zeros()
                        .is_some_and(|zeros| zeros < shift - 1);
                    half && (below_half || kept.bit(0))
                },
            };
            if round_up {
                // May carry into bit `precision`; normalization below absorbs it
                kept += 1u32;
            }
            magnitude = kept;
            exponent += shift as i64;
        }

        if let Some(zeros) = magnitude.trailing_zeros() {
            magnitude >>= zeros;
            exponent += zeros as i64;
        }

        Self {
            mantissa: BigInt::from_biguint(sign, magnitude),
            exponent,
            precision,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Sum, rounded to nearest-even at `self.precision()`.
    pub fn add(&self, rhs: &Self) -> Self {
        let precision = self.precision;
        if rhs.is_zero() {
            return Self::round(
                self.mantissa.clone(),
                self.exponent,
                false,
                precision,
                RoundingMode::NearestEven,
            );
        }
        if self.is_zero() {
            return Self::round(
                rhs.mantissa.clone(),
                rhs.exponent,
                false,
                precision,
                RoundingMode::NearestEven,
            );
        }

        let (large, small) = if self.top() >= rhs.top() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        // An operand entirely below this floor cannot move the result past a
        // rounding boundary; only its sign matters, so it collapses to one
        // unit at the floor.
        let floor = large.top() - precision.max(large.bits()) as i64 - 3;
        if small.top() < floor {
            let widened = &large.mantissa << (large.exponent - floor) as u64;
            let unit = if small.is_negative() {
                BigInt::from(-1)
            } else {
                BigInt::from(1)
            };
            return Self::round(
                widened + unit,
                floor,
                false,
                precision,
                RoundingMode::NearestEven,
            );
        }

        let exponent = self.exponent.min(rhs.exponent);
        let lhs = &self.mantissa << (self.exponent - exponent) as u64;
        let rhs = &rhs.mantissa << (rhs.exponent - exponent) as u64;
        Self::round(lhs + rhs, exponent, false, precision, RoundingMode::NearestEven)
    }

    /// Difference, rounded to nearest-even at `self.precision()`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&-rhs)
    }

    /// Product, rounded to nearest-even at `self.precision()`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::round(
            &self.mantissa * &rhs.mantissa,
            self.exponent + rhs.exponent,
            false,
            self.precision,
            RoundingMode::NearestEven,
        )
    }

    /// Quotient, rounded to nearest-even at `self.precision()`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero_unchecked(self.precision));
        }

        let numerator = self.mantissa.magnitude();
        let denominator = rhs.mantissa.magnitude();

        // Widen the numerator so the integer quotient carries a round bit
        // beyond the precision
        let shift =
            (self.precision + 1 + denominator.bits()).saturating_sub(numerator.bits());
        let (quotient, remainder) = (numerator << shift).div_rem(denominator);
        let sign = self.mantissa.sign() * rhs.mantissa.sign();

        Ok(Self::round(
            BigInt::from_biguint(sign, quotient),
            self.exponent - rhs.exponent - shift as i64,
            !remainder.is_zero(),
            self.precision,
            RoundingMode::NearestEven,
        ))
    }

    /// Square root, rounded to nearest-even at `self.precision()`.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` if `self` is negative.
    pub fn sqrt(&self) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::NegativeSquareRoot);
        }
        if self.is_zero() {
            return Ok(Self::zero_unchecked(self.precision));
        }

        let magnitude = self.mantissa.magnitude();
        // Root needs precision + 1 bits, so the radicand needs twice that
        let mut shift = (2 * (self.precision + 1)).saturating_sub(magnitude.bits());
        if (self.exponent - shift as i64).rem_euclid(2) != 0 {
            shift += 1;
        }

        let radicand = magnitude << shift;
        let root = radicand.sqrt();
        let inexact = &root * &root != radicand;

        Ok(Self::round(
            BigInt::from(root),
            (self.exponent - shift as i64) / 2,
            inexact,
            self.precision,
            RoundingMode::NearestEven,
        ))
    }

    /// Integer power, computed exactly and rounded once.
    pub fn pow_u32(&self, power: u32) -> Self {
        Self::round(
            self.mantissa.pow(power),
            self.exponent * i64::from(power),
            false,
            self.precision,
            RoundingMode::NearestEven,
        )
    }

    /// Add an exact integer.
    pub fn add_int(&self, rhs: impl Into<BigInt>) -> Self {
        self.add(&Self::exact(rhs.into()))
    }

    /// Multiply by an exact integer.
    pub fn mul_int(&self, rhs: impl Into<BigInt>) -> Self {
        self.mul(&Self::exact(rhs.into()))
    }

    /// Divide by an exact integer.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div_int(&self, rhs: impl Into<BigInt>) -> NumericResult<Self> {
        self.div(&Self::exact(rhs.into()))
    }
}

#[inline]
fn check_precision(precision: u64) -> NumericResult<()> {
    if precision < MIN_PRECISION {
        Err(NumericError::InvalidPrecision)
    } else {
        Ok(())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for BigFloat {
    type Output = BigFloat;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            mantissa: -self.mantissa,
            exponent: self.exponent,
            precision: self.precision,
        }
    }
}

impl Neg for &BigFloat {
    type Output = BigFloat;

    #[inline]
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// Operator forms of the infallible operations; division stays a method
impl Add for &BigFloat {
    type Output = BigFloat;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        BigFloat::add(self, rhs)
    }
}

impl Sub for &BigFloat {
    type Output = BigFloat;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        BigFloat::sub(self, rhs)
    }
}

impl Mul for &BigFloat {
    type Output = BigFloat;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        BigFloat::mul(self, rhs)
    }
}

impl fmt::Debug for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigFloat<{}>({} * 2^{})",
            self.precision, self.mantissa, self.exponent
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
