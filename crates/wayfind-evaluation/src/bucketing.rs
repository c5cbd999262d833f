use wayfind_core::config::BucketingConfig;
use wayfind_core::errors::{WayfindError, WayfindResult};
use wayfind_core::models::TimeBucket;

/// Minutes since midnight for an `H.MM` clock reading (13.45 is 13:45).
///
/// The minute digits are rounded, so binary float noise such as
/// `13.45 - 13.0 = 0.4499…` still reads as 45 minutes.
pub fn minutes_since_midnight(clock: f64) -> WayfindResult<u32> {
    if !clock.is_finite() || clock < 0.0 {
        return Err(WayfindError::invalid(
            "clock",
            format!("expected a non-negative H.MM reading, got {clock}"),
        ));
    }
    if clock >= 24.0 {
        return Err(WayfindError::invalid(
            "clock",
            format!("{clock} is past the end of the day"),
        ));
    }
    let hours = clock.trunc();
    let minutes = ((clock - hours) * 100.0).round();
    if minutes >= 60.0 {
        return Err(WayfindError::invalid(
            "clock",
            format!("minute digits of {clock} exceed 59"),
        ));
    }
    Ok(hours as u32 * 60 + minutes as u32)
}

/// Quantizes clock readings into `round(minutes / width)` classes.
#[derive(Debug, Clone, Copy)]
pub struct TimeBucketer {
    width_minutes: u32,
}

impl TimeBucketer {
    pub fn new(config: &BucketingConfig) -> WayfindResult<Self> {
        config.validate()?;
        Ok(Self {
            width_minutes: config.bucket_width_minutes,
        })
    }

    /// Bucket for a number of minutes since midnight. Halves round to even.
    pub fn bucket_minutes(&self, minutes: u32) -> TimeBucket {
        TimeBucket((minutes as f64 / self.width_minutes as f64).round_ties_even() as u32)
    }

    /// Bucket for an `H.MM` clock reading.
    pub fn bucket(&self, clock: f64) -> WayfindResult<TimeBucket> {
        Ok(self.bucket_minutes(minutes_since_midnight(clock)?))
    }
}
