use serde::{Deserialize, Serialize};

use super::trip::Location;

/// How much the chosen destination was backed by history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// The winning factor is strictly positive.
    Supported,
    /// Every eligible candidate scored 0; the first eligible one was taken.
    NoEvidence,
    /// Every candidate was the query's own start location; the first was taken.
    AllExcluded,
}

/// The destination chosen for one query row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Always a member of the candidate set.
    pub destination: Location,
    /// The winning transition factor (`-1.0` when all candidates were excluded).
    pub factor: f64,
    pub evidence: Evidence,
}

impl Prediction {
    /// True when the pick reflects actual historical support.
    pub fn is_supported(&self) -> bool {
        self.evidence == Evidence::Supported
    }
}
