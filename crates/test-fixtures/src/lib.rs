//! Test fixture loader and record builders shared by the Wayfind crates.
//!
//! Golden datasets live as JSON under `golden/`; the builders keep hand-written
//! scenarios short.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use wayfind_core::models::{Day, Location, TimeBucket, TripFeatures, TripRecord};

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// A training/test split with the outcome a correct estimator must reproduce.
#[derive(Debug, Clone, Deserialize)]
pub struct TripScenario {
    pub description: String,
    pub rho: f64,
    pub training: Vec<TripRecord>,
    pub test: Vec<TripRecord>,
    pub expected: ScenarioExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    pub cutoff_index: usize,
    /// Predicted destination per test row with the full training set visible.
    pub final_predictions: Vec<Location>,
    /// Accuracy for every window size, `accuracies[i]` at iteration `i + 1`.
    pub accuracies: Vec<f64>,
}

/// Load a scenario from `golden/`.
pub fn load_scenario(name: &str) -> TripScenario {
    load_fixture(name)
}

/// Build a query row. `day` is stringified so numeric and named days compare alike.
pub fn features(
    day: impl ToString,
    start: &str,
    holiday: bool,
    passengers: u32,
    bucket: u32,
) -> TripFeatures {
    TripFeatures {
        day: Day::new(day.to_string()),
        start_location: Location::from(start),
        holiday,
        passengers,
        time_bucket: TimeBucket(bucket),
    }
}

/// Build a trip record.
pub fn trip(
    day: impl ToString,
    start: &str,
    end: &str,
    holiday: bool,
    passengers: u32,
    bucket: u32,
) -> TripRecord {
    TripRecord::new(
        features(day, start, holiday, passengers, bucket),
        Location::from(end),
    )
}

/// Four-record history where `A -> B` is seen twice and `A -> C` once.
///
/// Query `A` on day 1, no holiday, 1 passenger, bucket 0 must pick `B`.
pub fn two_to_one_history() -> Vec<TripRecord> {
    vec![
        trip(1, "A", "B", false, 1, 0),
        trip(1, "A", "B", false, 1, 0),
        trip(1, "A", "C", false, 1, 0),
        trip(2, "B", "A", true, 2, 1),
    ]
}

/// Shorthand for a list of locations.
pub fn locations(names: &[&str]) -> Vec<Location> {
    names.iter().map(|n| Location::from(*n)).collect()
}
