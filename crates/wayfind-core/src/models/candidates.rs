use serde::{Deserialize, Serialize};

use super::trip::{Location, TripRecord};

/// Distinct candidate destinations in first-occurrence order.
///
/// The order is the argmax tie-break order, so it must be reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    locations: Vec<Location>,
}

impl CandidateSet {
    /// Build from any sequence of locations, keeping the first occurrence of each.
    pub fn from_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        let mut set = Self::default();
        for location in locations {
            set.insert(location);
        }
        set
    }

    /// Distinct end locations of the given trips.
    pub fn from_end_locations(records: &[TripRecord]) -> Self {
        Self::from_locations(records.iter().map(|r| r.end_location.clone()))
    }

    /// Append a location unless already present. Returns whether it was new.
    pub fn insert(&mut self, location: Location) -> bool {
        if self.locations.contains(&location) {
            return false;
        }
        self.locations.push(location);
        true
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.locations.contains(location)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }
}
