// ============================================================================
// Interfaces Module
// Defines trait contracts for extensibility
// ============================================================================

pub mod event_handler;
pub mod series_summation;

pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, PipelineEvent};
pub use series_summation::SeriesSummation;
