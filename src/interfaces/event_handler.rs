// ============================================================================
// Event Handler Interface
// Defines the contract for observing pipeline progress
// ============================================================================

use crate::domain::{PrecisionSpec, ResultDigits, SummationType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the π engine, once per stage per run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PipelineEvent {
    /// Working precision and series length chosen
    PrecisionPlanned { spec: PrecisionSpec },

    /// Constant 426880·√10005 computed
    ConstantGenerated { precision_bits: u64 },

    /// Series sum accumulated
    SeriesAccumulated {
        strategy: SummationType,
        terms: u64,
    },

    /// Final digits extracted
    DigitsExtracted { digits: ResultDigits },
}

/// Event handler trait for processing pipeline events
/// Implementations can handle logging, progress display, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<PipelineEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: PipelineEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: PipelineEvent) {
        match &event {
            PipelineEvent::DigitsExtracted { digits } => {
                tracing::debug!(
                    digits = digits.len(),
                    exponent = digits.exponent,
                    "Pi engine event: digits extracted"
                );
            },
            _ => tracing::debug!("Pi engine event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingHandler(Mutex<Vec<PipelineEvent>>);

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: PipelineEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(PipelineEvent::ConstantGenerated { precision_bits: 64 });
        // Should not panic
    }

    #[test]
    fn test_batch_delivers_in_order() {
        let handler = RecordingHandler(Mutex::new(Vec::new()));
        handler.on_events(vec![
            PipelineEvent::ConstantGenerated { precision_bits: 64 },
            PipelineEvent::SeriesAccumulated {
                strategy: SummationType::TermRecurrence,
                terms: 12,
            },
        ]);

        let events = handler.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            PipelineEvent::ConstantGenerated { precision_bits: 64 }
        ));
    }
}
