// ============================================================================
// Engine Errors
// Error types for the precision-planning and summation pipeline
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors that can stop a π computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PiError {
    /// Arbitrary-precision primitive failed
    Numeric(NumericError),
    /// Configuration rejected by validation
    InvalidConfig(String),
    /// No representable precision reaches the requested digit count
    PrecisionOverflow { requested_digits: u64 },
}

impl fmt::Display for PiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PiError::Numeric(err) => write!(f, "arithmetic error: {}", err),
            PiError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            PiError::PrecisionOverflow { requested_digits } => write!(
                f,
                "precision overflow: cannot plan a working precision for {} digits",
                requested_digits
            ),
        }
    }
}

impl std::error::Error for PiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PiError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for PiError {
    fn from(err: NumericError) -> Self {
        PiError::Numeric(err)
    }
}

/// Result type alias for pipeline operations
pub type PiResult<T> = Result<T, PiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PiError::from(NumericError::DivisionByZero).to_string(),
            "arithmetic error: division by zero"
        );
        assert_eq!(
            PiError::PrecisionOverflow {
                requested_digits: 7
            }
            .to_string(),
            "precision overflow: cannot plan a working precision for 7 digits"
        );
    }

    #[test]
    fn test_error_source() {
        let err = PiError::from(NumericError::InvalidPrecision);
        assert!(err.source().is_some());
        assert!(PiError::InvalidConfig("x".to_string()).source().is_none());
    }
}
