use crate::models::{Location, TripFeatures};

/// Scores how strongly a query's features point at one destination.
pub trait ITransitionScorer: Send + Sync {
    /// Transition factor for `destination`.
    ///
    /// In `[0.0, 1.0]` when every feature value of the query has been seen,
    /// exactly `0.0` as soon as one has not.
    fn factor(&self, query: &TripFeatures, destination: &Location) -> f64;

    /// Number of records the scorer has seen.
    fn window_len(&self) -> usize;
}
