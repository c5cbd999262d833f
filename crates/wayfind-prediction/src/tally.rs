use wayfind_core::constants::FEATURE_COUNT;
use wayfind_core::models::Feature;

/// Weighted per-feature counts for one (query, destination) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureTally {
    /// Weight of records sharing the feature value and ending at the destination.
    pub matched: [u64; FEATURE_COUNT],
    /// Weight of records sharing the feature value, whatever their destination.
    pub total: [u64; FEATURE_COUNT],
}

impl FeatureTally {
    pub fn add(&mut self, feature: Feature, weight: u64, destination_hit: bool) {
        let i = feature.index();
        self.total[i] += weight;
        if destination_hit {
            self.matched[i] += weight;
        }
    }

    /// True when every feature value of the query appeared at least once.
    pub fn has_full_evidence(&self) -> bool {
        self.total.iter().all(|&t| t > 0)
    }

    /// Product of the per-feature ratios, or 0.0 without full evidence.
    pub fn factor(&self) -> f64 {
        if !self.has_full_evidence() {
            return 0.0;
        }
        self.matched
            .iter()
            .zip(self.total.iter())
            .fold(1.0, |acc, (&m, &t)| acc * (m as f64 / t as f64))
    }
}
