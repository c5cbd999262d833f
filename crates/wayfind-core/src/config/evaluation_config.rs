use serde::{Deserialize, Serialize};

use super::defaults;

/// Which transition scorer the evaluation loop uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Rescan the whole window for every (query, candidate) pair.
    Scan,
    /// Keep running weighted counts and grow them one record at a time.
    #[default]
    Incremental,
}

/// Where the candidate destinations are enumerated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSource {
    /// Distinct end locations of the test set.
    #[default]
    Test,
    /// Distinct end locations of the (retained) training set.
    Training,
}

/// Evaluation loop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub scorer: ScorerKind,
    pub candidates: CandidateSource,
    /// Score test rows on the rayon pool.
    pub parallel: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            scorer: ScorerKind::default(),
            candidates: CandidateSource::default(),
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}
