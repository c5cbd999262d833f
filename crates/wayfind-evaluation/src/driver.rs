use tracing::{info, instrument};

use wayfind_core::config::{CandidateSource, ScorerKind, WayfindConfig};
use wayfind_core::errors::{WayfindError, WayfindResult};
use wayfind_core::models::{
    AccuracyPoint, CandidateSet, EvaluationReport, Location, Prediction, TripRecord,
    WeightedDataset,
};
use wayfind_decay::EvaporationEngine;
use wayfind_prediction::{DestinationPredictor, IncrementalScorer, ScanScorer};

use crate::accuracy::accuracy;

/// Runs the estimator against a held-out test set.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: WayfindConfig,
    engine: EvaporationEngine,
}

impl Evaluator {
    /// Create from a validated config.
    pub fn new(config: &WayfindConfig) -> WayfindResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: EvaporationEngine::new(&config.evaporation)?,
            config: config.clone(),
        })
    }

    /// Accuracy for every training-window size.
    ///
    /// After the retention cutoff, iteration `i` shows the predictor the
    /// oldest `i` retained records (with their weights from the full retained
    /// set) and scores every test row.
    #[instrument(skip_all, fields(training = training.len(), test = test.len()))]
    pub fn run(
        &self,
        training: Vec<TripRecord>,
        test: &[TripRecord],
    ) -> WayfindResult<EvaluationReport> {
        if test.is_empty() {
            return Err(WayfindError::invalid("test", "test set is empty"));
        }
        let retained = self.engine.retain(training)?;
        let dataset = retained.dataset;
        if dataset.is_empty() {
            info!(cutoff_index = retained.cutoff_index, "no training records retained");
            return Ok(EvaluationReport {
                cutoff_index: retained.cutoff_index,
                retained_len: 0,
                points: Vec::new(),
            });
        }
        let predictor = DestinationPredictor::new(self.candidates(&dataset, test))?;
        let actual: Vec<&Location> = test.iter().map(|r| &r.end_location).collect();
        let total = dataset.len();
        let parallel = self.config.evaluation.parallel;

        let mut points = Vec::with_capacity(total);
        let mut incremental = IncrementalScorer::new();
        for (i, (record, weight)) in dataset.full().iter().enumerate() {
            let iteration = i + 1;
            let predictions = match self.config.evaluation.scorer {
                ScorerKind::Incremental => {
                    incremental.push(record, weight);
                    predictor.predict_all(&incremental, test, parallel)
                }
                ScorerKind::Scan => {
                    let scorer = ScanScorer::new(dataset.window(iteration)?);
                    predictor.predict_all(&scorer, test, parallel)
                }
            };
            let predicted: Vec<&Location> = predictions.iter().map(|p| &p.destination).collect();
            let ratio = accuracy(&predicted, &actual)?;
            info!(iteration, total, accuracy = ratio, "evaluation iteration");
            points.push(AccuracyPoint {
                iteration,
                accuracy: ratio,
            });
        }

        Ok(EvaluationReport {
            cutoff_index: retained.cutoff_index,
            retained_len: total,
            points,
        })
    }

    /// Predict a destination for each query using the whole retained history.
    #[instrument(skip_all, fields(training = training.len(), queries = queries.len()))]
    pub fn predict(
        &self,
        training: Vec<TripRecord>,
        queries: &[TripRecord],
    ) -> WayfindResult<Vec<Prediction>> {
        let dataset = self.engine.retain(training)?.dataset;
        let predictor = DestinationPredictor::new(self.candidates(&dataset, queries))?;
        let parallel = self.config.evaluation.parallel;
        let predictions = match self.config.evaluation.scorer {
            ScorerKind::Incremental => {
                let scorer = IncrementalScorer::from_window(dataset.full());
                predictor.predict_all(&scorer, queries, parallel)
            }
            ScorerKind::Scan => {
                let scorer = ScanScorer::new(dataset.full());
                predictor.predict_all(&scorer, queries, parallel)
            }
        };
        info!(
            supported = predictions.iter().filter(|p| p.is_supported()).count(),
            total = predictions.len(),
            "predictions complete"
        );
        Ok(predictions)
    }

    fn candidates(&self, training: &WeightedDataset, test: &[TripRecord]) -> CandidateSet {
        match self.config.evaluation.candidates {
            CandidateSource::Test => CandidateSet::from_end_locations(test),
            CandidateSource::Training => CandidateSet::from_end_locations(training.records()),
        }
    }
}
