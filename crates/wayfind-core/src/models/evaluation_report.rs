use serde::{Deserialize, Serialize};

/// Accuracy measured with the first `iteration` training records visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyPoint {
    pub iteration: usize,
    pub accuracy: f64,
}

/// The accuracy curve of one evaluation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Records dropped from the front of the training set.
    pub cutoff_index: usize,
    /// Records left after the cutoff; the curve has this many points.
    pub retained_len: usize,
    pub points: Vec<AccuracyPoint>,
}

impl EvaluationReport {
    /// Accuracy with the whole retained training set visible.
    pub fn final_accuracy(&self) -> Option<f64> {
        self.points.last().map(|p| p.accuracy)
    }

    /// Highest accuracy on the curve; the earliest iteration wins ties.
    pub fn best(&self) -> Option<AccuracyPoint> {
        self.points.iter().copied().fold(None, |best, p| match best {
            Some(b) if b.accuracy >= p.accuracy => Some(b),
            _ => Some(p),
        })
    }
}
