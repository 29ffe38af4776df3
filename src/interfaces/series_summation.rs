// ============================================================================
// Series Summation Interface
// Defines the contract for pluggable Chudnovsky series evaluators
// ============================================================================

use crate::domain::{PrecisionSpec, SummationType};
use crate::numeric::{BigFloat, NumericResult};

/// Strategy pattern interface for evaluating the Chudnovsky series
/// Implementations: TermRecurrence (register updates), BinarySplitting
pub trait SeriesSummation: Send + Sync {
    /// Sum the first `spec.iteration_count` terms at
    /// `spec.working_precision_bits`
    ///
    /// # Returns
    /// The series value S, such that π = 426880·√10005 / S
    fn accumulate(&self, spec: &PrecisionSpec) -> NumericResult<BigFloat>;

    /// Get the strategy name for logging
    fn name(&self) -> &str;

    /// Configuration tag of this strategy
    fn summation_type(&self) -> SummationType;
}
