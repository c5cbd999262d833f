//! # wayfind-core
//!
//! Foundation crate for the Wayfind destination estimator.
//! Defines the trip data model, errors, config, constants, and the scorer traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WayfindConfig;
pub use errors::{WayfindError, WayfindResult};
pub use models::{
    CandidateSet, Day, Evidence, Feature, Location, Prediction, TimeBucket, TripFeatures,
    TripRecord, WeightedDataset, WeightedWindow,
};
