// ============================================================================
// Computation Configuration
// Tunables for precision planning and series summation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults
// ============================================================================

/// Extra decimal digits carried beyond the requested count to absorb carry
/// propagation before truncation.
pub const DEFAULT_GUARD_DIGITS: u64 = 10;

/// Extra series terms evaluated beyond the minimum estimate.
pub const DEFAULT_EXTRA_ITERATIONS: u64 = 10;

/// Correct decimal digits contributed by each Chudnovsky term (≈14.18).
pub const DEFAULT_DIGITS_PER_TERM: u64 = 14;

/// Trial precision starts at 2^6 = 64 bits.
pub const DEFAULT_MIN_PRECISION_EXPONENT: u32 = 6;

// ============================================================================
// Summation Strategy Type
// ============================================================================

/// Defines how the Chudnovsky series sum is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SummationType {
    /// In-place term recurrence at working precision (one rounded update of
    /// each register per term)
    #[default]
    TermRecurrence,

    /// Exact integer binary splitting, rounded once at the end
    BinarySplitting,
}

// ============================================================================
// Complete Computation Configuration
// ============================================================================

/// Configuration for a π computation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PiConfig {
    /// Guard digits added to the requested count when planning precision
    pub guard_digits: u64,

    /// Safety margin of series terms beyond `achievable / digits_per_term`
    pub extra_iterations: u64,

    /// Decimal digits gained per series term
    pub digits_per_term: u64,

    /// Exponent of the first trial precision (bits = 2^exponent)
    pub min_precision_exponent: u32,

    /// Series evaluation strategy
    pub summation: SummationType,
}

impl Default for PiConfig {
    fn default() -> Self {
        Self {
            guard_digits: DEFAULT_GUARD_DIGITS,
            extra_iterations: DEFAULT_EXTRA_ITERATIONS,
            digits_per_term: DEFAULT_DIGITS_PER_TERM,
            min_precision_exponent: DEFAULT_MIN_PRECISION_EXPONENT,
            summation: SummationType::TermRecurrence,
        }
    }
}

impl PiConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set guard digits
    pub fn with_guard_digits(mut self, guard_digits: u64) -> Self {
        self.guard_digits = guard_digits;
        self
    }

    /// Builder method: Set extra iterations
    pub fn with_extra_iterations(mut self, extra_iterations: u64) -> Self {
        self.extra_iterations = extra_iterations;
        self
    }

    /// Builder method: Set digits gained per term
    pub fn with_digits_per_term(mut self, digits_per_term: u64) -> Self {
        self.digits_per_term = digits_per_term;
        self
    }

    /// Builder method: Set the first trial precision exponent
    pub fn with_min_precision_exponent(mut self, exponent: u32) -> Self {
        self.min_precision_exponent = exponent;
        self
    }

    /// Builder method: Set the summation strategy
    pub fn with_summation(mut self, summation: SummationType) -> Self {
        self.summation = summation;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.digits_per_term == 0 {
            return Err("Digits per term must be positive".to_string());
        }

        // Precision is a u64 bit count
        if self.min_precision_exponent >= u64::BITS {
            return Err(format!(
                "Minimum precision exponent must be below {}",
                u64::BITS
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PiConfig::default();

        assert_eq!(config.guard_digits, 10);
        assert_eq!(config.extra_iterations, 10);
        assert_eq!(config.digits_per_term, 14);
        assert_eq!(config.min_precision_exponent, 6);
        assert_eq!(config.summation, SummationType::TermRecurrence);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PiConfig::new()
            .with_guard_digits(20)
            .with_extra_iterations(3)
            .with_summation(SummationType::BinarySplitting);

        assert_eq!(config.guard_digits, 20);
        assert_eq!(config.extra_iterations, 3);
        assert_eq!(config.summation, SummationType::BinarySplitting);
    }

    #[test]
    fn test_validation() {
        let config = PiConfig::new().with_digits_per_term(0);
        assert!(config.validate().is_err());

        let config = PiConfig::new().with_min_precision_exponent(64);
        assert!(config.validate().is_err());

        let config = PiConfig::new().with_min_precision_exponent(1);
        assert!(config.validate().is_ok());
    }
}
