// ============================================================================
// Pi Engine Factory
// Creates π engines with proper configuration
// ============================================================================

use super::errors::{PiError, PiResult};
use crate::domain::{PiConfig, SummationType};
use crate::engine::{BinarySplitting, PiEngine, PrecisionPlanner, TermRecurrence};
use crate::interfaces::{EventHandler, SeriesSummation};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a π engine from configuration
///
/// # Arguments
/// * `config` - Computation configuration
/// * `event_handler` - Event handler for pipeline events
///
/// # Example
/// ```
/// use chudnovsky_pi::prelude::*;
/// use std::sync::Arc;
///
/// let engine = create_from_config(PiConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.compute(5).unwrap().digits.render(), "3.1415");
/// ```
pub fn create_from_config(
    config: PiConfig,
    event_handler: Arc<dyn EventHandler>,
) -> PiResult<PiEngine> {
    // Validate configuration first
    config.validate().map_err(PiError::InvalidConfig)?;

    let planner = PrecisionPlanner::new(&config);
    let summation = create_summation(config.summation);

    Ok(PiEngine::new(planner, summation, event_handler))
}

/// Creates the series summation strategy for a configuration tag
pub fn create_summation(summation: SummationType) -> Box<dyn SeriesSummation> {
    match summation {
        SummationType::TermRecurrence => Box::new(TermRecurrence::new()),
        SummationType::BinarySplitting => Box::new(BinarySplitting::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating π engines with fluent API
///
/// # Example
/// ```
/// use chudnovsky_pi::prelude::*;
/// use std::sync::Arc;
///
/// let engine = PiEngineBuilder::new()
///     .binary_splitting()
///     .with_guard_digits(12)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(engine.strategy_name(), "BinarySplitting");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PiEngineBuilder {
    config: PiConfig,
}

impl PiEngineBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Summation Configuration
    // ========================================================================

    /// Evaluate the series by term recurrence (default)
    pub fn term_recurrence(mut self) -> Self {
        self.config.summation = SummationType::TermRecurrence;
        self
    }

    /// Evaluate the series by binary splitting
    pub fn binary_splitting(mut self) -> Self {
        self.config.summation = SummationType::BinarySplitting;
        self
    }

    /// Set the summation strategy from a configuration tag
    pub fn summation(mut self, summation: SummationType) -> Self {
        self.config.summation = summation;
        self
    }

    // ========================================================================
    // Precision Configuration
    // ========================================================================

    /// Set guard digits carried beyond the request
    pub fn with_guard_digits(mut self, guard_digits: u64) -> Self {
        self.config.guard_digits = guard_digits;
        self
    }

    /// Set extra series terms beyond the estimate
    pub fn with_extra_iterations(mut self, extra_iterations: u64) -> Self {
        self.config.extra_iterations = extra_iterations;
        self
    }

    /// Set the exponent of the first trial precision
    pub fn with_min_precision_exponent(mut self, exponent: u32) -> Self {
        self.config.min_precision_exponent = exponent;
        self
    }

    /// Get the configuration being built
    pub fn config(&self) -> &PiConfig {
        &self.config
    }

    /// Build the π engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> PiResult<PiEngine> {
        create_from_config(self.config, event_handler)
    }
}
