use serde::{Deserialize, Serialize};
use std::fmt;

/// Day-of-week (or any day category) label. Compared by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(String);

impl Day {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Day {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u8> for Day {
    fn from(n: u8) -> Self {
        Self(n.to_string())
    }
}

/// A named place a trip starts or ends at. Compared by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Integer time-of-day class produced by bucketing a clock reading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeBucket(pub u32);

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five features the transition factor multiplies over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Day,
    StartLocation,
    Holiday,
    Passengers,
    TimeBucket,
}

impl Feature {
    /// All features, in the fixed order used for per-feature tallies.
    pub const ALL: [Feature; crate::constants::FEATURE_COUNT] = [
        Feature::Day,
        Feature::StartLocation,
        Feature::Holiday,
        Feature::Passengers,
        Feature::TimeBucket,
    ];

    /// Position of this feature in [`Feature::ALL`].
    pub fn index(self) -> usize {
        match self {
            Feature::Day => 0,
            Feature::StartLocation => 1,
            Feature::Holiday => 2,
            Feature::Passengers => 3,
            Feature::TimeBucket => 4,
        }
    }
}

/// One feature value, hashable so it can key running counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureValue {
    Day(Day),
    StartLocation(Location),
    Holiday(bool),
    Passengers(u32),
    TimeBucket(TimeBucket),
}

/// The observable context of a trip: everything except where it ended.
///
/// Doubles as the query row handed to the predictor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripFeatures {
    pub day: Day,
    pub start_location: Location,
    pub holiday: bool,
    pub passengers: u32,
    pub time_bucket: TimeBucket,
}

impl TripFeatures {
    /// Exact-value comparison of a single feature.
    pub fn matches(&self, other: &TripFeatures, feature: Feature) -> bool {
        match feature {
            Feature::Day => self.day == other.day,
            Feature::StartLocation => self.start_location == other.start_location,
            Feature::Holiday => self.holiday == other.holiday,
            Feature::Passengers => self.passengers == other.passengers,
            Feature::TimeBucket => self.time_bucket == other.time_bucket,
        }
    }

    /// Owned value of a single feature.
    pub fn value(&self, feature: Feature) -> FeatureValue {
        match feature {
            Feature::Day => FeatureValue::Day(self.day.clone()),
            Feature::StartLocation => FeatureValue::StartLocation(self.start_location.clone()),
            Feature::Holiday => FeatureValue::Holiday(self.holiday),
            Feature::Passengers => FeatureValue::Passengers(self.passengers),
            Feature::TimeBucket => FeatureValue::TimeBucket(self.time_bucket),
        }
    }
}

/// One historical trip. Records are kept oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(flatten)]
    pub features: TripFeatures,
    pub end_location: Location,
}

impl TripRecord {
    pub fn new(features: TripFeatures, end_location: Location) -> Self {
        Self {
            features,
            end_location,
        }
    }
}

impl AsRef<TripFeatures> for TripFeatures {
    fn as_ref(&self) -> &TripFeatures {
        self
    }
}

impl AsRef<TripFeatures> for TripRecord {
    fn as_ref(&self) -> &TripFeatures {
        &self.features
    }
}
