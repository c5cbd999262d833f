use tracing::debug;
use wayfind_core::config::EvaporationConfig;
use wayfind_core::errors::WayfindResult;
use wayfind_core::models::{TripRecord, WeightedDataset};
use wayfind_core::traits::IWeightCalculator;

use crate::{retention, weights};

/// Training records left after the retention cutoff, paired with their weights.
#[derive(Debug, Clone)]
pub struct RetainedDataset {
    /// How many of the oldest input records were dropped.
    pub cutoff_index: usize,
    pub dataset: WeightedDataset,
}

/// Evaporation engine: retention cutoff and integer weights for one `rho`.
#[derive(Debug, Clone)]
pub struct EvaporationEngine {
    rho: f64,
    apply_retention_cutoff: bool,
}

impl EvaporationEngine {
    /// Create from config. Fails on a non-positive or non-finite `rho`.
    pub fn new(config: &EvaporationConfig) -> WayfindResult<Self> {
        config.validate()?;
        Ok(Self {
            rho: config.rho,
            apply_retention_cutoff: config.apply_retention_cutoff,
        })
    }

    /// Create with a custom `rho` and the retention cutoff enabled.
    pub fn with_rho(rho: f64) -> WayfindResult<Self> {
        Self::new(&EvaporationConfig::with_rho(rho))
    }

    /// Drop evaporated records from the front, then weight what remains.
    ///
    /// Weights are computed over the retained length, so the newest retained
    /// record carries the largest weight and the oldest carries 1.
    pub fn retain(&self, mut records: Vec<TripRecord>) -> WayfindResult<RetainedDataset> {
        let cutoff_index = if self.apply_retention_cutoff {
            self.retention_cutoff_index(records.len())?
        } else {
            0
        };
        let records = records.split_off(cutoff_index);

        let weights = self.weights(records.len())?;
        debug!(
            rho = self.rho,
            cutoff_index,
            retained = records.len(),
            max_weight = weights.last().copied().unwrap_or(0),
            "evaporation weights computed"
        );

        Ok(RetainedDataset {
            cutoff_index,
            dataset: WeightedDataset::new(records, weights)?,
        })
    }
}

impl IWeightCalculator for EvaporationEngine {
    fn retention_cutoff_index(&self, dataset_len: usize) -> WayfindResult<usize> {
        Ok(retention::cutoff_index(dataset_len, self.rho))
    }

    fn weights(&self, dataset_len: usize) -> WayfindResult<Vec<u64>> {
        Ok(weights::weights(dataset_len, self.rho))
    }
}
