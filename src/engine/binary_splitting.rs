// ============================================================================
// Binary Splitting Summation
// Chudnovsky series evaluated with exact integers, rounded once
// ============================================================================
//
// For the term range [a, b):
//
//   leaf (b = a + 1):
//     P = −(6a − 5)(2a − 1)(6a − 1)
//     Q = a³ · 640320³ / 24
//     T = P · (13591409 + 545140134a)
//
//   merge at m:
//     P = P(a,m) P(m,b)
//     Q = Q(a,m) Q(m,b)
//     T = Q(m,b) T(a,m) + P(a,m) T(m,b)
//
// Over [1, n): S = 13591409 + T/Q, the same terms as the recurrence.

use super::coefficients::{LINEAR_SEED, LINEAR_STEP, SPLIT_DENOMINATOR};
use crate::domain::{PrecisionSpec, SummationType};
use crate::interfaces::SeriesSummation;
use crate::numeric::{BigFloat, NumericResult};
use num_bigint::BigInt;

/// Partial products of one term range.
struct Split {
    p: BigInt,
    q: BigInt,
    t: BigInt,
}

fn split(a: u64, b: u64) -> Split {
    debug_assert!(a < b);
    if b - a == 1 {
        let k = BigInt::from(a);
        let p = -((&k * 6u32 - 5u32) * (&k * 2u32 - 1u32) * (&k * 6u32 - 1u32));
        let q = k.pow(3) * SPLIT_DENOMINATOR;
        let t = &p * (&k * LINEAR_STEP + LINEAR_SEED);
        return Split { p, q, t };
    }

    let m = a + (b - a) / 2;
    let left = split(a, m);
    let right = split(m, b);
    Split {
        t: &right.q * left.t + &left.p * right.t,
        p: left.p * right.p,
        q: left.q * right.q,
    }
}

/// Series evaluation by exact binary splitting
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySplitting;

impl BinarySplitting {
    pub fn new() -> Self {
        Self
    }
}

impl SeriesSummation for BinarySplitting {
    fn accumulate(&self, spec: &PrecisionSpec) -> NumericResult<BigFloat> {
        let precision = spec.working_precision_bits;
        if spec.iteration_count <= 1 {
            return BigFloat::from_i64(LINEAR_SEED, precision);
        }

        let Split { q, t, .. } = split(1, spec.iteration_count);
        let numerator = BigFloat::from_bigint(&q * LINEAR_SEED + t, precision)?;
        let denominator = BigFloat::from_bigint(q, precision)?;

        tracing::debug!(
            terms = spec.iteration_count,
            precision_bits = precision,
            "Accumulated series by binary splitting"
        );
        numerator.div(&denominator)
    }

    fn name(&self) -> &str {
        "BinarySplitting"
    }

    fn summation_type(&self) -> SummationType {
        SummationType::BinarySplitting
    }
}
