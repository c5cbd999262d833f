/// Number of features the transition factor multiplies over.
pub const FEATURE_COUNT: usize = 5;

/// Factor assigned to a candidate equal to the query's start location.
/// Strictly below any scorer output, which lives in [0.0, 1.0].
pub const SELF_LOOP_FACTOR: f64 = -1.0;

/// Minimum weight after rescaling. Every retained record counts at least this much.
pub const MIN_RECORD_WEIGHT: u64 = 1;
