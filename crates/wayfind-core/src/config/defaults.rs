// Single source of truth for all default values.

// --- Evaporation ---
pub const DEFAULT_RHO: f64 = 0.0032; // influence fades out after ~200 recordings
pub const DEFAULT_APPLY_RETENTION_CUTOFF: bool = true;

// --- Bucketing ---
pub const DEFAULT_BUCKET_WIDTH_MINUTES: u32 = 240; // 4-hour buckets

// --- Evaluation ---
pub const DEFAULT_PARALLEL: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
