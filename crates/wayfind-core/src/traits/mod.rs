pub mod scorer;
pub mod weighting;

pub use scorer::ITransitionScorer;
pub use weighting::IWeightCalculator;
