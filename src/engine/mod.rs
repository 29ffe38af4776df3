// ============================================================================
// Engine Module
// Contains the precision-planning, summation and extraction pipeline
// ============================================================================

mod binary_splitting;
mod constant;
mod errors;
mod formatter;
mod pi_engine;
mod planner;
mod term_recurrence;

pub mod coefficients;
pub mod factory;

pub use binary_splitting::BinarySplitting;
pub use constant::ConstantGenerator;
pub use errors::{PiError, PiResult};
pub use factory::{create_from_config, create_summation, PiEngineBuilder};
pub use formatter::ResultFormatter;
pub use pi_engine::{PiComputation, PiEngine};
pub use planner::PrecisionPlanner;
pub use term_recurrence::{SeriesState, TermRecurrence};
