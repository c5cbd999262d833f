pub mod candidates;
pub mod dataset;
pub mod evaluation_report;
pub mod prediction;
pub mod trip;

pub use candidates::CandidateSet;
pub use dataset::{WeightedDataset, WeightedWindow};
pub use evaluation_report::{AccuracyPoint, EvaluationReport};
pub use prediction::{Evidence, Prediction};
pub use trip::{Day, Feature, FeatureValue, Location, TimeBucket, TripFeatures, TripRecord};
