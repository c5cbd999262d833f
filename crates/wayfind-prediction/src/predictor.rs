use rayon::prelude::*;
use tracing::{debug, trace};

use wayfind_core::constants::SELF_LOOP_FACTOR;
use wayfind_core::errors::{WayfindError, WayfindResult};
use wayfind_core::models::{CandidateSet, Evidence, Location, Prediction, TripFeatures};
use wayfind_core::traits::ITransitionScorer;

/// Picks the most probable destination for a query row.
///
/// A candidate equal to the query's start location scores
/// [`SELF_LOOP_FACTOR`] and can only win when every candidate is excluded.
/// Ties go to the earliest candidate in set order.
#[derive(Debug, Clone)]
pub struct DestinationPredictor {
    candidates: CandidateSet,
}

impl DestinationPredictor {
    /// Create a predictor over a non-empty candidate set.
    pub fn new(candidates: CandidateSet) -> WayfindResult<Self> {
        if candidates.is_empty() {
            return Err(WayfindError::EmptyCandidateSet);
        }
        Ok(Self { candidates })
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Factor for every candidate, in candidate order.
    pub fn score_candidates<S>(&self, scorer: &S, query: &TripFeatures) -> Vec<(Location, f64)>
    where
        S: ITransitionScorer + ?Sized,
    {
        self.candidates
            .iter()
            .map(|c| (c.clone(), candidate_factor(scorer, query, c)))
            .collect()
    }

    /// Choose one destination for `query`.
    pub fn predict<S>(&self, scorer: &S, query: &TripFeatures) -> Prediction
    where
        S: ITransitionScorer + ?Sized,
    {
        let mut best: Option<(&Location, f64)> = None;
        for candidate in self.candidates.iter() {
            let factor = candidate_factor(scorer, query, candidate);
            // Strictly greater keeps the first candidate on ties.
            if best.map_or(true, |(_, f)| factor > f) {
                best = Some((candidate, factor));
            }
        }

        // The candidate set is non-empty by construction.
        let (destination, factor) =
            best.unwrap_or((&self.candidates.as_slice()[0], SELF_LOOP_FACTOR));
        let evidence = if factor == SELF_LOOP_FACTOR {
            Evidence::AllExcluded
        } else if factor == 0.0 {
            Evidence::NoEvidence
        } else {
            Evidence::Supported
        };
        trace!(
            start = %query.start_location,
            destination = %destination,
            factor,
            ?evidence,
            "destination selected"
        );

        Prediction {
            destination: destination.clone(),
            factor,
            evidence,
        }
    }

    /// Predict every query, preserving input order. With `parallel` the rows
    /// are scored on the rayon pool.
    pub fn predict_all<S, Q>(&self, scorer: &S, queries: &[Q], parallel: bool) -> Vec<Prediction>
    where
        S: ITransitionScorer + ?Sized,
        Q: AsRef<TripFeatures> + Sync,
    {
        debug!(
            queries = queries.len(),
            candidates = self.candidates.len(),
            window = scorer.window_len(),
            parallel,
            "predicting destinations"
        );
        if parallel {
            queries
                .par_iter()
                .map(|q| self.predict(scorer, q.as_ref()))
                .collect()
        } else {
            queries
                .iter()
                .map(|q| self.predict(scorer, q.as_ref()))
                .collect()
        }
    }
}

fn candidate_factor<S>(scorer: &S, query: &TripFeatures, candidate: &Location) -> f64
where
    S: ITransitionScorer + ?Sized,
{
    if query.start_location == *candidate {
        SELF_LOOP_FACTOR
    } else {
        scorer.factor(query, candidate)
    }
}
