use wayfind_core::models::{Feature, Location, TripFeatures, WeightedWindow};
use wayfind_core::traits::ITransitionScorer;

use crate::tally::FeatureTally;

/// Scorer that rescans the whole window for every (query, destination) pair.
#[derive(Debug, Clone, Copy)]
pub struct ScanScorer<'a> {
    window: WeightedWindow<'a>,
}

impl<'a> ScanScorer<'a> {
    pub fn new(window: WeightedWindow<'a>) -> Self {
        Self { window }
    }

    /// Per-feature weighted counts for `destination`.
    pub fn tally(&self, query: &TripFeatures, destination: &Location) -> FeatureTally {
        let mut tally = FeatureTally::default();
        for (record, weight) in self.window.iter() {
            let hit = record.end_location == *destination;
            for feature in Feature::ALL {
                if record.features.matches(query, feature) {
                    tally.add(feature, weight, hit);
                }
            }
        }
        tally
    }
}

impl ITransitionScorer for ScanScorer<'_> {
    fn factor(&self, query: &TripFeatures, destination: &Location) -> f64 {
        self.tally(query, destination).factor()
    }

    fn window_len(&self) -> usize {
        self.window.len()
    }
}
