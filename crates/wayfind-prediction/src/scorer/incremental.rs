use std::collections::HashMap;

use wayfind_core::models::{
    Feature, FeatureValue, Location, TripFeatures, TripRecord, WeightedWindow,
};
use wayfind_core::traits::ITransitionScorer;

use crate::tally::FeatureTally;

/// Weighted counts for one feature value.
#[derive(Debug, Clone, Default)]
struct ValueCounts {
    total: u64,
    by_destination: HashMap<Location, u64>,
}

/// Scorer backed by running counts keyed by feature value and destination.
///
/// Growing the window by one record costs five map updates, and a factor is
/// five lookups, independent of how many records have been pushed.
#[derive(Debug, Clone, Default)]
pub struct IncrementalScorer {
    counts: HashMap<FeatureValue, ValueCounts>,
    len: usize,
}

impl IncrementalScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from every record of a window.
    pub fn from_window(window: WeightedWindow<'_>) -> Self {
        let mut scorer = Self::new();
        for (record, weight) in window.iter() {
            scorer.push(record, weight);
        }
        scorer
    }

    /// Add one record to the window with its weight.
    pub fn push(&mut self, record: &TripRecord, weight: u64) {
        for feature in Feature::ALL {
            let counts = self
                .counts
                .entry(record.features.value(feature))
                .or_default();
            counts.total += weight;
            *counts
                .by_destination
                .entry(record.end_location.clone())
                .or_insert(0) += weight;
        }
        self.len += 1;
    }

    /// Per-feature weighted counts for `destination`.
    pub fn tally(&self, query: &TripFeatures, destination: &Location) -> FeatureTally {
        let mut tally = FeatureTally::default();
        for feature in Feature::ALL {
            if let Some(counts) = self.counts.get(&query.value(feature)) {
                let i = feature.index();
                tally.total[i] = counts.total;
                tally.matched[i] = counts.by_destination.get(destination).copied().unwrap_or(0);
            }
        }
        tally
    }
}

impl ITransitionScorer for IncrementalScorer {
    fn factor(&self, query: &TripFeatures, destination: &Location) -> f64 {
        self.tally(query, destination).factor()
    }

    fn window_len(&self) -> usize {
        self.len
    }
}
