// ============================================================================
// Pi Engine
// Runs the planning, summation and extraction pipeline for one request
// ============================================================================

use super::constant::ConstantGenerator;
use super::errors::PiResult;
use super::formatter::ResultFormatter;
use super::planner::PrecisionPlanner;
use crate::domain::{PrecisionSpec, ResultDigits};
use crate::interfaces::{EventHandler, PipelineEvent, SeriesSummation};
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one run: the plan that was used and the digits it produced
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PiComputation {
    pub spec: PrecisionSpec,
    pub digits: ResultDigits,
}

/// π digit engine with a pluggable summation strategy.
///
/// Holds no numeric state between runs; every call to
/// [`compute`](Self::compute) plans and evaluates from scratch.
pub struct PiEngine {
    /// Precision planner
    planner: PrecisionPlanner,

    /// Pluggable series summation strategy
    summation: Box<dyn SeriesSummation>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl PiEngine {
    /// Create a new π engine
    pub fn new(
        planner: PrecisionPlanner,
        summation: Box<dyn SeriesSummation>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            planner,
            summation,
            event_handler,
        }
    }

    /// Name of the configured summation strategy
    pub fn strategy_name(&self) -> &str {
        self.summation.name()
    }

    /// Compute `requested_digits` truncated digits of π.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` for unplannable requests and `Numeric` if
    /// the arithmetic primitive fails. Nothing is emitted after a failure.
    pub fn compute(&self, requested_digits: u64) -> PiResult<PiComputation> {
        let started = Instant::now();

        let spec = self.planner.plan(requested_digits)?;
        self.event_handler
            .on_event(PipelineEvent::PrecisionPlanned { spec });

        let constant = ConstantGenerator::generate(spec.working_precision_bits)?;
        self.event_handler.on_event(PipelineEvent::ConstantGenerated {
            precision_bits: spec.working_precision_bits,
        });

        let sum = self.summation.accumulate(&spec)?;
        self.event_handler.on_event(PipelineEvent::SeriesAccumulated {
            strategy: self.summation.summation_type(),
            terms: spec.iteration_count,
        });

        let digits = ResultFormatter::format(&constant, &sum, spec.requested_digits)?;
        self.event_handler.on_event(PipelineEvent::DigitsExtracted {
            digits: digits.clone(),
        });

        tracing::info!(
            requested_digits,
            precision_bits = spec.working_precision_bits,
            iterations = spec.iteration_count,
            strategy = self.summation.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Computed digits of pi"
        );

        Ok(PiComputation { spec, digits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BinarySplitting, TermRecurrence};
    use crate::interfaces::NoOpEventHandler;
    use std::sync::Mutex;

    struct RecordingHandler(Mutex<Vec<PipelineEvent>>);

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: PipelineEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn engine() -> PiEngine {
        PiEngine::new(
            PrecisionPlanner::default(),
            Box::new(TermRecurrence),
            Arc::new(NoOpEventHandler),
        )
    }

    #[test]
    fn test_known_outputs() {
        let engine = engine();
        let cases = [
            (1, "3"),
            (2, "3.1"),
            (10, "3.141592653"),
            (15, "3.14159265358979"),
            (50, "3.1415926535897932384626433832795028841971693993751"),
        ];
        for (digits, expected) in cases {
            let result = engine.compute(digits).unwrap();
            assert_eq!(result.digits.render(), expected, "{} digits", digits);
            assert_eq!(result.digits.len() as u64, digits);
        }
    }

    #[test]
    fn test_exponent_is_one() {
        let engine = engine();
        for digits in [1, 7, 33, 120] {
            assert_eq!(engine.compute(digits).unwrap().digits.exponent, 1);
        }
    }

    #[test]
    fn test_zero_digits_falls_back_to_natural_precision() {
        let result = engine().compute(0).unwrap();

        // 64-bit working precision renders 21 digits
        assert_eq!(result.spec.working_precision_bits, 64);
        assert_eq!(result.digits.len(), 21);
        assert_eq!(result.digits.exponent, 1);
        assert!(result.digits.render().starts_with("3.14159265358979323"));
    }

    #[test]
    fn test_strategies_agree() {
        let splitting = PiEngine::new(
            PrecisionPlanner::default(),
            Box::new(BinarySplitting),
            Arc::new(NoOpEventHandler),
        );
        let recurrence = engine();
        for digits in [1, 25, 140, 500] {
            assert_eq!(
                splitting.compute(digits).unwrap().digits,
                recurrence.compute(digits).unwrap().digits
            );
        }
    }

    #[test]
    fn test_events_in_pipeline_order() {
        let handler = Arc::new(RecordingHandler(Mutex::new(Vec::new())));
        let engine = PiEngine::new(
            PrecisionPlanner::default(),
            Box::new(TermRecurrence),
            handler.clone(),
        );
        engine.compute(5).unwrap();

        let events = handler.0.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], PipelineEvent::PrecisionPlanned { .. }));
        assert!(matches!(
            events[1],
            PipelineEvent::ConstantGenerated { precision_bits: 64 }
        ));
        assert!(matches!(
            events[2],
            PipelineEvent::SeriesAccumulated { terms: 12, .. }
        ));
        match &events[3] {
            PipelineEvent::DigitsExtracted { digits } => assert_eq!(digits.render(), "3.1415"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_failed_run_emits_nothing_after_plan_error() {
        let handler = Arc::new(RecordingHandler(Mutex::new(Vec::new())));
        let engine = PiEngine::new(
            PrecisionPlanner::default(),
            Box::new(TermRecurrence),
            handler.clone(),
        );
        assert!(engine.compute(u64::MAX).is_err());
        assert!(handler.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_runs_are_independent() {
        let engine = engine();
        let first = engine.compute(40).unwrap();
        engine.compute(200).unwrap();
        assert_eq!(engine.compute(40).unwrap(), first);
    }
}
