use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{WayfindError, WayfindResult};

/// Time-of-day quantization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketingConfig {
    /// Width of one time bucket in minutes.
    pub bucket_width_minutes: u32,
}

impl BucketingConfig {
    pub fn validate(&self) -> WayfindResult<()> {
        if self.bucket_width_minutes == 0 {
            return Err(WayfindError::invalid(
                "bucket_width_minutes",
                "must be > 0",
            ));
        }
        Ok(())
    }
}

impl Default for BucketingConfig {
    fn default() -> Self {
        Self {
            bucket_width_minutes: defaults::DEFAULT_BUCKET_WIDTH_MINUTES,
        }
    }
}
