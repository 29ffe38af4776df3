// ============================================================================
// Chudnovsky Coefficients
// ============================================================================
//
// 1/π = 12 Σ (-1)^k (6k)! (13591409 + 545140134k)
//            / ((3k)! (k!)^3 640320^(3k + 3/2))
//
// Rearranged as π = C / S with C = 426880·√10005 and S the series below.

/// Multiplier of the closed-form constant C.
pub const CONSTANT_MULTIPLIER: i64 = 426_880;

/// Radicand of the closed-form constant C.
pub const CONSTANT_RADICAND: i64 = 10_005;

/// L₀, and the i = 0 term of the series.
pub const LINEAR_SEED: i64 = 13_591_409;

/// Increment of the linear term per step.
pub const LINEAR_STEP: i64 = 545_140_134;

/// Ratio of the geometric term per step, -640320³.
pub const GEOMETRIC_RATIO: i64 = -262_537_412_640_768_000;

/// K₀.
pub const INDEX_SEED: i64 = -6;

/// Increment of the index term per step.
pub const INDEX_STEP: i64 = 12;

/// 640320³ / 24, the per-term denominator factor used by binary splitting.
pub const SPLIT_DENOMINATOR: i64 = 10_939_058_860_032_000;
