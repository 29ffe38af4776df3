// ============================================================================
// Compute Pi Example
// ============================================================================

use chudnovsky_pi::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Chudnovsky Pi Example ===\n");

    // Default engine: term recurrence, 10 guard digits
    let engine = PiEngineBuilder::new()
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    println!("Created engine with {} summation\n", engine.strategy_name());

    for digits in [10u64, 50, 100] {
        let result = engine.compute(digits).unwrap();
        println!(
            "{:>4} digits ({} bits, {} terms): {}",
            digits,
            result.spec.working_precision_bits,
            result.spec.iteration_count,
            result.digits
        );
    }

    // Binary splitting must agree digit for digit
    println!("\nComparing strategies...");
    let splitting = PiEngineBuilder::new()
        .binary_splitting()
        .build(Arc::new(NoOpEventHandler))
        .unwrap();

    let digits = 500;
    let recurrence_digits = engine.compute(digits).unwrap().digits;
    let splitting_digits = splitting.compute(digits).unwrap().digits;
    println!(
        "{} digits agree: {}",
        digits,
        recurrence_digits == splitting_digits
    );

    // Precision plans for a few targets
    println!("\nPrecision plans:");
    let planner = PrecisionPlanner::default();
    for digits in [0u64, 12, 1_000, 10_000] {
        let spec = planner.plan(digits).unwrap();
        println!(
            "  {:>6} digits -> {:>6} bits, {:>5} achievable, {:>4} terms",
            digits,
            spec.working_precision_bits,
            spec.achievable_decimal_digits,
            spec.iteration_count
        );
    }

    println!("\n=== Example Complete ===");
}
