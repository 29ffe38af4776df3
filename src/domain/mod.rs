// ============================================================================
// Domain Models Module
// Value objects produced and consumed by the computation pipeline
// ============================================================================

pub mod config;
pub mod precision;
pub mod result_digits;

pub use config::{PiConfig, SummationType};
pub use precision::PrecisionSpec;
pub use result_digits::ResultDigits;
