// ============================================================================
// Chudnovsky Pi Library
// Precision-adaptive computation of the decimal digits of pi
// ============================================================================

//! # Chudnovsky Pi
//!
//! Computes the decimal digits of π to a caller-chosen length with the
//! Chudnovsky series, returning a truncated (never rounded) digit string.
//!
//! ## Pipeline
//!
//! - **Precision planning**: smallest power-of-two bit precision whose decimal
//!   capacity covers the request plus 10 guard digits, and the number of
//!   series terms (≈14 digits per term, plus 10 spare terms)
//! - **Constant generation**: `C = 426880·√10005`
//! - **Series summation**: pluggable; term recurrence by default, exact
//!   binary splitting as an alternative
//! - **Digit extraction**: `π = C / S`, truncated toward zero
//!
//! ## Example
//!
//! ```rust
//! use chudnovsky_pi::prelude::*;
//! use std::sync::Arc;
//!
//! let engine = PiEngineBuilder::new()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let result = engine.compute(15).unwrap();
//! assert_eq!(result.digits.render(), "3.14159265358979");
//! assert_eq!(result.spec.working_precision_bits, 128);
//! ```

pub mod cli;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{PiConfig, PrecisionSpec, ResultDigits, SummationType};
    pub use crate::engine::{
        create_from_config, BinarySplitting, ConstantGenerator, PiComputation, PiEngine,
        PiEngineBuilder, PiError, PiResult, PrecisionPlanner, ResultFormatter, TermRecurrence,
    };
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, PipelineEvent, SeriesSummation,
    };
    pub use crate::numeric::{BigFloat, NumericError, RoundingMode};
}
