// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during arbitrary-precision arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Working precision must be at least one bit
    InvalidPrecision,
    /// Attempted division by zero
    DivisionByZero,
    /// Square root of a negative value
    NegativeSquareRoot,
    /// Requested digit count does not fit the platform's address space
    DigitCountOverflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidPrecision => {
                write!(f, "invalid precision: working precision must be at least 1 bit")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeSquareRoot => {
                write!(f, "square root of a negative value")
            },
            NumericError::DigitCountOverflow => {
                write!(f, "digit count overflow: too many digits requested")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
